// Ticket log export (CSV) and Philippine-time formatting

use crate::domain::Ticket;
use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Header row of the exported log
pub const CSV_HEADER: [&str; 4] = ["Queue Number", "Service Type", "Date & Time", "Estimated Wait"];

/// Asia/Manila is UTC+08:00 with no daylight saving
const PHILIPPINE_OFFSET_SECS: i32 = 8 * 3600;

fn philippine_offset() -> FixedOffset {
    FixedOffset::east_opt(PHILIPPINE_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

fn philippine_time(millis: i64) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp_millis(millis).map(|utc| utc.with_timezone(&philippine_offset()))
}

/// Issue time as shown in the export, e.g. `10/19/2026, 2:05:07 PM`.
/// Out-of-range instants print as raw milliseconds.
pub fn format_issue_time(millis: i64) -> String {
    match philippine_time(millis) {
        Some(t) => t.format("%m/%d/%Y, %-I:%M:%S %p").to_string(),
        None => millis.to_string(),
    }
}

/// Wall-board clock line, e.g. `October 19, 2026 | 02:05 PM`
pub fn format_clock(millis: i64) -> String {
    match philippine_time(millis) {
        Some(t) => t.format("%B %-d, %Y | %I:%M %p").to_string(),
        None => millis.to_string(),
    }
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn csv_row<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields
        .into_iter()
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render the log as CSV: header plus one row per ticket, oldest first,
/// rows separated by `\n` with no trailing newline.
pub fn to_csv(log: &[Ticket]) -> String {
    let mut rows = Vec::with_capacity(log.len() + 1);
    rows.push(csv_row(CSV_HEADER));

    for ticket in log {
        rows.push(csv_row([
            ticket.queue_number().to_string(),
            ticket.service_type().to_string(),
            format_issue_time(ticket.timestamp()),
            format!("{} mins", ticket.estimated_wait()),
        ]));
    }

    rows.join("\n")
}

// Terminal rendering for kiosk, board and admin output

use branchq_core::application::export::{format_clock, format_issue_time};
use branchq_core::application::{Outcome, WallBoard};
use branchq_core::domain::{format_queue_number, Counters, QueueCategory, Ticket};
use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Tabled)]
pub struct TicketRow {
    #[tabled(rename = "Queue #")]
    queue_number: String,
    #[tabled(rename = "Service")]
    service_type: String,
    #[tabled(rename = "Time")]
    issued_at: String,
    #[tabled(rename = "Est. Wait")]
    estimated_wait: String,
}

impl From<&Ticket> for TicketRow {
    fn from(ticket: &Ticket) -> Self {
        Self {
            queue_number: ticket.queue_number().to_string(),
            service_type: ticket.service_type().to_string(),
            issued_at: format_issue_time(ticket.timestamp()),
            estimated_wait: format!("{} mins", ticket.estimated_wait()),
        }
    }
}

#[derive(Tabled)]
struct CounterRow {
    #[tabled(rename = "Service")]
    service: &'static str,
    #[tabled(rename = "Last Issued")]
    last_issued: String,
}

#[derive(Tabled)]
struct ServingRow {
    #[tabled(rename = "Counter")]
    counter: u8,
    #[tabled(rename = "Now Serving")]
    queue_number: String,
}

#[derive(Serialize)]
struct JsonOutput<'a, T: Serialize> {
    value: &'a T,
    degraded: Option<String>,
}

/// Print the storage fault, if any, to stderr
pub fn warn_if_degraded<T>(outcome: &Outcome<T>) {
    if let Some(cause) = outcome.cause() {
        eprintln!(
            "{} {}",
            "⚠ Storage degraded, results may not persist:".yellow().bold(),
            cause
        );
    }
}

/// Machine-readable form of any outcome
pub fn to_json<T: Serialize>(outcome: &Outcome<T>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonOutput {
        value: outcome.value(),
        degraded: outcome.cause().map(|c| c.to_string()),
    })
}

pub fn print_ticket(ticket: &Ticket) {
    println!("{}", "Your Queue Number".cyan().bold());
    println!();
    println!("    {}", ticket.queue_number().bold());
    println!();
    println!("  {} {}", "Service:".bold(), ticket.service_type());
    println!("  {} ~{} minutes", "Estimated wait:".bold(), ticket.estimated_wait());
    println!("  {} {}", "Issued:".bold(), format_issue_time(ticket.timestamp()));
    println!();
    println!("Please wait for your number to be called.");
}

pub fn print_counters(counters: &Counters) {
    let rows: Vec<CounterRow> = QueueCategory::ALL
        .into_iter()
        .map(|category| CounterRow {
            service: category.label(),
            last_issued: format_queue_number(category, counters.get(category)),
        })
        .collect();

    println!("{}", "Current Queue Counters".cyan().bold());
    println!("{}", Table::new(rows));
}

pub fn print_log(tickets: &[Ticket], total: usize) {
    println!(
        "{}",
        format!("Recent Queue Tickets ({} total)", total).cyan().bold()
    );
    if tickets.is_empty() {
        println!("{}", "No queue tickets yet".yellow());
        return;
    }
    println!("{}", Table::new(tickets.iter().map(TicketRow::from)));
}

pub fn print_board(board: &WallBoard, now_millis: i64) {
    println!("{}", "Philippine Banking".cyan().bold());
    println!("{}", format_clock(now_millis));
    println!();

    let serving: Vec<ServingRow> = board
        .now_serving
        .iter()
        .map(|slot| ServingRow {
            counter: slot.counter,
            queue_number: slot.queue_number.clone(),
        })
        .collect();
    println!("{}", Table::new(serving));
    println!();

    println!("{}", "Next in Queue".cyan().bold());
    for lane in &board.upcoming {
        println!(
            "  {} {}",
            format!("{:<22}", lane.category.board_heading()).bold(),
            lane.numbers.join("  ")
        );
    }
}

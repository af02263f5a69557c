// Ticket Domain Model

use super::category::QueueCategory;
use serde::{Deserialize, Serialize};

/// Minutes of wait added per counter step
pub const MINUTES_PER_TICKET: u64 = 5;

/// Floor for the estimated wait
pub const MIN_ESTIMATED_WAIT: u64 = 5;

/// Render a queue number: category code plus the value zero-padded to
/// three digits. Values above 999 print in full, never truncated.
pub fn format_queue_number(category: QueueCategory, value: u64) -> String {
    format!("{}{:03}", category.code(), value)
}

/// Linear placeholder estimate: 5 minutes per counter step, floored at 5.
pub fn estimated_wait_minutes(counter_value: u64) -> u64 {
    counter_value
        .saturating_mul(MINUTES_PER_TICKET)
        .max(MIN_ESTIMATED_WAIT)
}

/// An issued queue ticket. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    queue_number: String,
    service_type: String,
    /// Issue instant, milliseconds since epoch
    timestamp: i64,
    /// Minutes
    estimated_wait: u64,
}

impl Ticket {
    /// Build the ticket for a category whose counter was just bumped to
    /// `counter_value`.
    pub fn issue(category: QueueCategory, counter_value: u64, timestamp: i64) -> Self {
        Self {
            queue_number: format_queue_number(category, counter_value),
            service_type: category.label().to_string(),
            timestamp,
            estimated_wait: estimated_wait_minutes(counter_value),
        }
    }

    pub fn queue_number(&self) -> &str {
        &self.queue_number
    }

    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn estimated_wait(&self) -> u64 {
        self.estimated_wait
    }
}

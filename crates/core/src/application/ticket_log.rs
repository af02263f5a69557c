// Ticket Log - append-only history of issued tickets

use super::export;
use super::outcome::Outcome;
use super::stored::{read_json, remove, write_json};
use crate::domain::Ticket;
use crate::port::KeyValueStore;
use std::sync::Arc;
use tracing::warn;

/// Store key holding the serialized log
pub const QUEUE_LOG_KEY: &str = "queue_log";

/// Last `limit` tickets of a log, newest first
pub fn newest_first(log: Vec<Ticket>, limit: usize) -> Vec<Ticket> {
    log.into_iter().rev().take(limit).collect()
}

pub struct TicketLog {
    store: Arc<dyn KeyValueStore>,
}

impl TicketLog {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All tickets, oldest first. Empty when nothing usable is stored.
    pub async fn load_all(&self) -> Outcome<Vec<Ticket>> {
        read_json(self.store.as_ref(), QUEUE_LOG_KEY).await
    }

    /// Append one ticket by rewriting the whole log.
    ///
    /// A corrupt log is replaced by a log holding only `ticket`. A log that
    /// could not be read is left untouched and the ticket is not recorded.
    pub async fn append(&self, ticket: Ticket) -> Outcome<()> {
        let (mut log, read_fault) = self.load_all().await.into_parts();
        if let Some(fault) = read_fault.as_ref().filter(|f| f.is_unavailable()) {
            warn!(
                queue_number = ticket.queue_number(),
                error = %fault,
                "Ticket log unreadable, ticket not recorded"
            );
            return Outcome::from_parts((), read_fault);
        }
        log.push(ticket);

        let (_, write_fault) = write_json(self.store.as_ref(), QUEUE_LOG_KEY, &log)
            .await
            .into_parts();

        Outcome::from_parts((), read_fault).merge(write_fault)
    }

    pub async fn clear(&self) -> Outcome<()> {
        remove(self.store.as_ref(), QUEUE_LOG_KEY).await
    }

    /// Last `limit` tickets, newest first
    pub async fn recent(&self, limit: usize) -> Outcome<Vec<Ticket>> {
        self.load_all()
            .await
            .map(|log| newest_first(log, limit))
    }

    /// CSV export of the whole log
    pub async fn serialize(&self) -> Outcome<String> {
        self.load_all().await.map(|log| export::to_csv(&log))
    }
}

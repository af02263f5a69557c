// Queue Service - the kiosk's collaborator-facing surface

pub mod board;
pub mod issue;

pub use board::{ServingSlot, UpcomingLane, WallBoard, MAX_LANE_NUMBERS};

use crate::application::counter_store::CounterStore;
use crate::application::outcome::Outcome;
use crate::application::ticket_log::TicketLog;
use crate::domain::{Counters, QueueCategory, Ticket};
use crate::port::{KeyValueStore, TimeProvider};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Queue Service
///
/// Owns the counter store and ticket log over one injected key-value store.
/// `issue` and `reset_counters` are serialized through an internal lock, so
/// every caller sharing this instance sees gap-free, duplicate-free numbers.
/// Two instances (or two processes) over the same backing store are not
/// coordinated.
pub struct QueueService {
    counters: CounterStore,
    log: TicketLog,
    time_provider: Arc<dyn TimeProvider>,
    write_lock: Mutex<()>,
}

impl QueueService {
    pub fn new(store: Arc<dyn KeyValueStore>, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            counters: CounterStore::new(store.clone()),
            log: TicketLog::new(store),
            time_provider,
            write_lock: Mutex::new(()),
        }
    }

    /// Issue the next ticket for a category
    pub async fn issue(&self, category: QueueCategory) -> Outcome<Ticket> {
        let _guard = self.write_lock.lock().await;
        issue::execute(
            &self.counters,
            &self.log,
            self.time_provider.as_ref(),
            category,
        )
        .await
    }

    /// Read-only snapshot of the counters
    pub async fn load_counters(&self) -> Outcome<Counters> {
        self.counters.load().await
    }

    /// Zero every counter and clear the log (admin)
    pub async fn reset_counters(&self) -> Outcome<()> {
        let _guard = self.write_lock.lock().await;
        let (_, counter_fault) = self.counters.reset().await.into_parts();
        let (_, log_fault) = self.log.clear().await.into_parts();

        info!(degraded = counter_fault.is_some() || log_fault.is_some(), "Queue counters reset");

        Outcome::from_parts((), counter_fault).merge(log_fault)
    }

    pub async fn get_queue_log(&self) -> Outcome<Vec<Ticket>> {
        self.log.load_all().await
    }

    /// Latest `limit` tickets, newest first
    pub async fn recent_tickets(&self, limit: usize) -> Outcome<Vec<Ticket>> {
        self.log.recent(limit).await
    }

    /// CSV rendering of the log
    pub async fn export_queue_log(&self) -> Outcome<String> {
        self.log.serialize().await
    }

    pub async fn display_next_numbers(
        &self,
        category: QueueCategory,
        count: usize,
    ) -> Outcome<Vec<String>> {
        self.counters
            .load()
            .await
            .map(|c| board::next_numbers(category, c.get(category), count))
    }

    pub async fn now_serving(&self) -> Outcome<Vec<ServingSlot>> {
        self.counters.load().await.map(|c| board::now_serving(&c))
    }

    /// Everything the TV view shows, from a single counters read
    pub async fn wall_board(&self, count: usize) -> Outcome<WallBoard> {
        self.counters
            .load()
            .await
            .map(|c| board::wall_board(&c, count))
    }

    /// Current time according to the injected clock
    pub fn now_millis(&self) -> i64 {
        self.time_provider.now_millis()
    }
}

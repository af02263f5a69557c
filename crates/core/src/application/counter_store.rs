// Counter Store - durable per-category counters

use super::outcome::Outcome;
use super::stored::{read_json, write_json};
use crate::domain::Counters;
use crate::port::KeyValueStore;
use std::sync::Arc;

/// Store key holding the serialized counters
pub const COUNTERS_KEY: &str = "queue_counters";

pub struct CounterStore {
    store: Arc<dyn KeyValueStore>,
}

impl CounterStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persisted counters, or all-zero when nothing usable is stored
    pub async fn load(&self) -> Outcome<Counters> {
        read_json(self.store.as_ref(), COUNTERS_KEY).await
    }

    pub async fn save(&self, counters: &Counters) -> Outcome<()> {
        write_json(self.store.as_ref(), COUNTERS_KEY, counters).await
    }

    pub async fn reset(&self) -> Outcome<()> {
        self.save(&Counters::zero()).await
    }
}

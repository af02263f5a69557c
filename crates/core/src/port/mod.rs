// Port Layer - Interfaces for external dependencies

pub mod kv_store;
pub mod time_provider;

// Re-exports
pub use kv_store::{InMemoryKeyValueStore, KeyValueStore};
pub use time_provider::{FixedTimeProvider, SystemTimeProvider, TimeProvider};

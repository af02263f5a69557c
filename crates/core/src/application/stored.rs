// JSON-encoded values over the key-value port

use super::outcome::{Outcome, StoreFault};
use crate::port::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Read and decode `key`, falling back to `T::default()` when the key is
/// absent (Ok) or unreadable (Degraded).
pub(crate) async fn read_json<T>(store: &dyn KeyValueStore, key: &str) -> Outcome<T>
where
    T: DeserializeOwned + Default,
{
    let raw = match store.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return Outcome::Ok(T::default()),
        Err(e) => {
            warn!(key = key, error = %e, "Store read failed, using default");
            return Outcome::degraded(T::default(), StoreFault::Unavailable(e.to_string()));
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Outcome::Ok(value),
        Err(e) => {
            warn!(key = key, error = %e, "Stored value is corrupt, using default");
            Outcome::degraded(T::default(), StoreFault::corrupt(key, e))
        }
    }
}

/// Encode and write `value` under `key`. Best-effort.
pub(crate) async fn write_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Outcome<()>
where
    T: Serialize + ?Sized,
{
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(key = key, error = %e, "Encoding failed, value not persisted");
            return Outcome::degraded((), StoreFault::Unavailable(e.to_string()));
        }
    };

    match store.set(key, &raw).await {
        Ok(()) => Outcome::Ok(()),
        Err(e) => {
            warn!(key = key, error = %e, "Store write failed, value not persisted");
            Outcome::degraded((), StoreFault::Unavailable(e.to_string()))
        }
    }
}

pub(crate) async fn remove(store: &dyn KeyValueStore, key: &str) -> Outcome<()> {
    match store.delete(key).await {
        Ok(()) => Outcome::Ok(()),
        Err(e) => {
            warn!(key = key, error = %e, "Store delete failed");
            Outcome::degraded((), StoreFault::Unavailable(e.to_string()))
        }
    }
}

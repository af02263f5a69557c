// Test doubles for the key-value port

use crate::error::{AppError, Result};
use crate::port::{InMemoryKeyValueStore, KeyValueStore};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory store whose reads and writes can be switched off
#[derive(Default)]
pub(crate) struct FlakyStore {
    inner: InMemoryKeyValueStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FlakyStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn fail_reads(&self, on: bool) {
        self.fail_reads.store(on, Ordering::SeqCst);
    }

    pub(crate) fn fail_writes(&self, on: bool) {
        self.fail_writes.store(on, Ordering::SeqCst);
    }

    /// Bypass the failure switches
    pub(crate) async fn raw_set(&self, key: &str, value: &str) {
        self.inner.set(key, value).await.unwrap();
    }

    pub(crate) async fn raw_get(&self, key: &str) -> Option<String> {
        self.inner.get(key).await.unwrap()
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable("read refused".to_string()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable("quota exceeded".to_string()));
        }
        self.inner.set(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable("delete refused".to_string()));
        }
        self.inner.delete(key).await
    }
}

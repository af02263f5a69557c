// SQLite KeyValueStore Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use branchq_core::error::Result;
use branchq_core::port::{KeyValueStore, TimeProvider};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::debug;

/// Key-value rows in the `kv_store` table
pub struct SqliteKeyValueStore {
    pool: SqlitePool,
    time_provider: Arc<dyn TimeProvider>,
}

impl SqliteKeyValueStore {
    pub fn new(pool: SqlitePool, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            pool,
            time_provider,
        }
    }
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = self.time_provider.now_millis();

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at) VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(key = key, bytes = value.len(), "kv_store write");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM kv_store WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(key = key, removed = result.rows_affected(), "kv_store delete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations};
    use branchq_core::port::FixedTimeProvider;

    async fn store() -> (SqliteKeyValueStore, SqlitePool) {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        let store = SqliteKeyValueStore::new(pool.clone(), Arc::new(FixedTimeProvider::new(42)));
        (store, pool)
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let (store, _pool) = store().await;
        assert_eq!(store.get("queue_counters").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let (store, pool) = store().await;
        store.set("queue_counters", r#"{"C":1}"#).await.unwrap();
        store.set("queue_counters", r#"{"C":2}"#).await.unwrap();

        assert_eq!(
            store.get("queue_counters").await.unwrap().as_deref(),
            Some(r#"{"C":2}"#)
        );

        let (rows, updated_at): (i64, i64) =
            sqlx::query_as("SELECT COUNT(*), MAX(updated_at) FROM kv_store")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(rows, 1);
        assert_eq!(updated_at, 42);
    }

    #[tokio::test]
    async fn test_delete() {
        let (store, _pool) = store().await;
        store.set("queue_log", "[]").await.unwrap();
        store.delete("queue_log").await.unwrap();
        assert_eq!(store.get("queue_log").await.unwrap(), None);

        // Absent key is fine
        store.delete("queue_log").await.unwrap();
    }

    #[tokio::test]
    async fn test_value_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("queue.db");
        let url = path.to_str().unwrap();

        {
            let pool = create_pool(url).await.unwrap();
            run_migrations(&pool).await.unwrap();
            let store = SqliteKeyValueStore::new(pool.clone(), Arc::new(FixedTimeProvider::new(1)));
            store.set("queue_counters", r#"{"C":9}"#).await.unwrap();
            pool.close().await;
        }

        let pool = create_pool(url).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let store = SqliteKeyValueStore::new(pool, Arc::new(FixedTimeProvider::new(2)));
        assert_eq!(
            store.get("queue_counters").await.unwrap().as_deref(),
            Some(r#"{"C":9}"#)
        );
    }

    #[tokio::test]
    async fn test_unmigrated_database_reports_error() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        let store = SqliteKeyValueStore::new(pool, Arc::new(FixedTimeProvider::new(0)));
        assert!(store.get("queue_counters").await.is_err());
    }
}

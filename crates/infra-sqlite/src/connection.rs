// SQLite Connection Pool Setup

use crate::error::map_sqlx_error;
use branchq_core::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

fn is_memory_url(database_url: &str) -> bool {
    database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .starts_with(":memory:")
}

/// Create SQLite connection pool with WAL mode
///
/// `:memory:` (or `sqlite::memory:`) gives a throwaway store on a single
/// connection so every query sees the same database.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(map_sqlx_error)?
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .create_if_missing(true);

    let max_connections = if is_memory_url(database_url) { 1 } else { 4 };

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(map_sqlx_error)
}

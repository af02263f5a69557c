// Runtime configuration

use anyhow::{Context, Result};
use std::path::Path;

pub const DEFAULT_DB_PATH: &str = "~/.branchq/queue.db";

/// Shared secret for admin commands when none is configured
pub const DEFAULT_ADMIN_SECRET: &str = "admin123";

fn is_memory(raw: &str) -> bool {
    matches!(raw.trim(), ":memory:" | "sqlite::memory:")
}

/// Resolve the configured database location into a connectable path.
///
/// Expands `~`, and creates the parent directory of a file-backed store.
pub fn resolve_db_path(raw: &str) -> Result<String> {
    if is_memory(raw) {
        return Ok(raw.trim().to_string());
    }

    let expanded = shellexpand::tilde(raw.trim()).into_owned();

    if let Some(parent) = Path::new(&expanded).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory {}", parent.display())
            })?;
        }
    }

    Ok(expanded)
}

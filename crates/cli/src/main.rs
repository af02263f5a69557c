//! branchq - bank branch queue kiosk
//!
//! Issues tickets, shows the wall board, and runs admin actions against a
//! local SQLite-backed queue store.

mod auth;
mod config;
mod logging;
mod render;

use anyhow::{Context, Result};
use branchq_core::application::{newest_first, Outcome, QueueService, MAX_LANE_NUMBERS};
use branchq_core::domain::{QueueCategory, Ticket};
use branchq_core::port::time_provider::SystemTimeProvider;
use branchq_infra_sqlite::{create_pool, run_migrations, SqliteKeyValueStore};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use config::{DEFAULT_ADMIN_SECRET, DEFAULT_DB_PATH};

#[derive(Parser)]
#[command(name = "branchq")]
#[command(about = "Bank branch queue kiosk", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// SQLite database file (":memory:" for a throwaway store)
    #[arg(long, global = true, env = "BRANCHQ_DB_PATH", default_value = DEFAULT_DB_PATH)]
    db_path: String,

    /// Log output format: pretty or json
    #[arg(long, global = true, env = "BRANCHQ_LOG_FORMAT", default_value = "pretty")]
    log_format: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue the next ticket for a service (cash, priority, qr, other)
    Issue {
        /// Service picked at the kiosk
        service: QueueCategory,
    },

    /// Show the wall board (now serving and next numbers)
    Board {
        /// Numbers shown per lane
        #[arg(
            short,
            long,
            default_value = "5",
            value_parser = clap::value_parser!(u16).range(1..=(MAX_LANE_NUMBERS as i64))
        )]
        count: u16,
    },

    /// Admin actions (password protected)
    Admin {
        /// Admin password
        #[arg(long, env = "BRANCHQ_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,

        /// Shared secret the password must match
        #[arg(
            long,
            env = "BRANCHQ_ADMIN_SECRET",
            default_value = DEFAULT_ADMIN_SECRET,
            hide_default_value = true,
            hide_env_values = true
        )]
        admin_secret: String,

        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Show current counters
    Counters,

    /// Show recent tickets, newest first
    Log {
        /// Number of tickets to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Export the full ticket log as CSV
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Zero all counters and clear the log
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

async fn open_service(db_path: &str) -> Result<QueueService> {
    let db_path = config::resolve_db_path(db_path)?;
    info!(db_path = %db_path, "Opening queue store");

    let pool = create_pool(&db_path)
        .await
        .with_context(|| format!("Failed to open queue database at {}", db_path))?;
    run_migrations(&pool).await.context("Migration failed")?;

    // DI wiring
    let time_provider = Arc::new(SystemTimeProvider);
    let store = Arc::new(SqliteKeyValueStore::new(pool, time_provider.clone()));
    Ok(QueueService::new(store, time_provider))
}

/// Total log size plus the newest `limit` tickets, from one log read
fn log_view(log: Outcome<Vec<Ticket>>, limit: usize) -> (usize, Outcome<Vec<Ticket>>) {
    let total = log.value().len();
    (total, log.map(|tickets| newest_first(tickets, limit)))
}

/// Print JSON, or warn on degradation and hand the value to `human`
fn emit<T: Serialize>(json: bool, outcome: &Outcome<T>, human: impl FnOnce(&T)) -> Result<()> {
    if json {
        println!("{}", render::to_json(outcome)?);
    } else {
        render::warn_if_degraded(outcome);
        human(outcome.value());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(logging::LogFormat::parse(&cli.log_format));

    match cli.command {
        Commands::Issue { service } => {
            let queue = open_service(&cli.db_path).await?;
            let ticket = queue.issue(service).await;
            emit(cli.json, &ticket, render::print_ticket)?;
        }

        Commands::Board { count } => {
            let queue = open_service(&cli.db_path).await?;
            let board = queue.wall_board(usize::from(count)).await;
            let now = queue.now_millis();
            emit(cli.json, &board, |b| render::print_board(b, now))?;
        }

        Commands::Admin {
            password,
            admin_secret,
            action,
        } => {
            auth::verify_admin(&password, &admin_secret)?;
            let queue = open_service(&cli.db_path).await?;

            match action {
                AdminAction::Counters => {
                    let counters = queue.load_counters().await;
                    emit(cli.json, &counters, render::print_counters)?;
                }

                AdminAction::Log { limit } => {
                    let (total, recent) = log_view(queue.get_queue_log().await, limit);
                    emit(cli.json, &recent, |tickets| render::print_log(tickets, total))?;
                }

                AdminAction::Export { output } => {
                    let csv = queue.export_queue_log().await;

                    match output {
                        Some(path) => {
                            std::fs::write(&path, csv.value()).with_context(|| {
                                format!("Failed to write export to {}", path.display())
                            })?;
                            let written = csv.map(|_| path.display().to_string());
                            emit(cli.json, &written, |p| {
                                println!(
                                    "{}",
                                    format!("✓ Queue log exported to {}", p).green().bold()
                                )
                            })?;
                        }
                        None => emit(cli.json, &csv, |text| println!("{}", text))?,
                    }
                }

                AdminAction::Reset { yes } => {
                    if !yes {
                        anyhow::bail!(
                            "Resetting clears every counter and the ticket log; re-run with --yes"
                        );
                    }
                    let reset = queue.reset_counters().await;
                    emit(cli.json, &reset, |_| {
                        println!("{}", "✓ Queue counters reset successfully".green().bold())
                    })?;
                }
            }
        }
    }

    Ok(())
}

//! Logging bootstrap.
//!
//! The TUI owns the terminal, so diagnostics go to a daily-rolling file
//! under the logs directory instead of stdout/stderr. Filtering comes from
//! the TALLY_LOG environment variable (standard EnvFilter syntax).

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Default filter when TALLY_LOG is not set.
const DEFAULT_FILTER: &str = "info";

/// Initializes the global tracing subscriber.
///
/// Returns the appender guard; dropping it flushes buffered log lines, so
/// the caller keeps it alive for the lifetime of the process.
pub fn init() -> Result<WorkerGuard> {
    let dir = paths::logs_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, "tally.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_env("TALLY_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

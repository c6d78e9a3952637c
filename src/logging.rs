//! Request log setup
//!
//! Every request attempt, outcome, and settings change is written to a
//! daily-rotating plain-text file under `logs/`. Nothing is ever written to
//! the terminal itself: stdout belongs to the TUI.

use color_eyre::Result;
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize the daily-rotating file logger. The returned guard must stay
/// alive for the lifetime of the process or buffered lines are lost.
pub fn init(logs_dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(logs_dir)?;

    let appender = tracing_appender::rolling::daily(logs_dir, "aiworker.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

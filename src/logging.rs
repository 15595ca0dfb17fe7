//! Tracing subscriber setup for the binary.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Where log output should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Write to stderr.
    Stderr,
    /// Append to a file through a non-blocking writer.
    File(&'a Path),
    /// Discard everything (the TUI owns the terminal).
    Off,
}

/// Build the level filter. `RUST_LOG` wins; otherwise `warn`, or `debug`
/// when `verbose` is set.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { "playtime=debug,warn" } else { "warn" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber.
///
/// The returned guard flushes file output on drop and must be held until
/// the program exits.
pub fn init(verbose: bool, target: LogTarget<'_>) -> Result<Option<WorkerGuard>> {
    match target {
        LogTarget::Off => Ok(None),
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(verbose))
                .with_target(false)
                .init();
            Ok(None)
        }
        LogTarget::File(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_writer(writer)
                .with_env_filter(env_filter(verbose))
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
    }
}

/// Pick the log target for a command.
///
/// A log file always wins. Without one, interactive sessions log nowhere
/// and everything else logs to stderr.
pub fn target_for(log_file: Option<&Path>, interactive: bool) -> LogTarget<'_> {
    match log_file {
        Some(path) => LogTarget::File(path),
        None if interactive => LogTarget::Off,
        None => LogTarget::Stderr,
    }
}

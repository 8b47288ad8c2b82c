// Rust guideline compliant 2026-10-16

//! Tracing subscriber setup for the CLI.
//!
//! Log events never go to stdout, which carries command output. Without a
//! log file they are written as compact text to stderr; with one they are
//! appended as JSON lines through a non-blocking writer.

use anyhow::{bail, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Installs the global tracing subscriber.
///
/// # Arguments
///
/// * `level` - Minimum level name (error, warn, info, debug, trace)
/// * `log_file` - Optional file to append JSON log lines to
///
/// # Returns
///
/// The writer guard when logging to a file. It must be held until the
/// process exits so buffered lines are flushed.
///
/// # Errors
///
/// Returns an error if the level is unknown or the log file cannot be opened.
pub fn init_tracing(level: &str, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = parse_log_level(level)?;

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

/// Parses a log level name case-insensitively.
///
/// # Errors
///
/// Returns an error for an unknown level name.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => bail!("Invalid log level: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level_is_case_insensitive() {
        assert_eq!(parse_log_level("WARN").ok(), Some(Level::WARN));
        assert_eq!(parse_log_level("trace").ok(), Some(Level::TRACE));
    }

    #[test]
    fn test_parse_log_level_rejects_unknown() {
        assert!(parse_log_level("verbose").is_err());
    }
}

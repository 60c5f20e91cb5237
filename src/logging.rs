//! Logging setup
//!
//! Events go to `expense-tracker.log` in the base directory because the
//! terminal UI owns stdout. `RUST_LOG` controls the filter (default `info`)
//! and `EXPENSE_TRACKER_LOG_FORMAT=json` switches to JSON lines.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ExpensePaths;
use crate::error::ExpenseError;

/// Environment variable selecting the log format (`text` or `json`)
pub const LOG_FORMAT_ENV: &str = "EXPENSE_TRACKER_LOG_FORMAT";

/// Install the global subscriber
///
/// Calling this more than once leaves the first subscriber in place.
pub fn init(paths: &ExpensePaths) -> Result<(), ExpenseError> {
    std::fs::create_dir_all(paths.base_dir())
        .map_err(|e| ExpenseError::Io(format!("Failed to create log directory: {}", e)))?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| ExpenseError::Io(format!("Failed to open log file: {}", e)))?;

    let log_format = std::env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let result = if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(Mutex::new(file)),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(Mutex::new(file)),
            )
            .try_init()
    };

    if result.is_ok() {
        tracing::debug!(path = %paths.log_file().display(), "logging initialized");
    }
    Ok(())
}

//! Structured logging
//!
//! Events are written as JSON lines to a timestamped file in the logs
//! directory. The TUI owns the terminal, so nothing is logged to stdout.
//! `RUST_LOG` takes precedence over the filter in settings.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::{GrowBankPaths, Settings};
use crate::error::{GrowBankError, GrowBankResult};

/// Log file name for a session started now
pub fn log_file_name() -> String {
    format!(
        "growbank-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    )
}

/// Install the global subscriber. Returns the path of the log file.
pub fn init_logging(paths: &GrowBankPaths, settings: &Settings) -> GrowBankResult<PathBuf> {
    let log_dir = paths.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let log_file = log_dir.join(log_file_name());
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .map_err(|e| GrowBankError::Config(format!("Invalid log filter: {}", e)))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .map_err(|e| GrowBankError::Config(format!("Logging already initialised: {}", e)))?;

    Ok(log_file)
}

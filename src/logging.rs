//! Diagnostic logging setup.
//!
//! The terminal belongs to the UI, so diagnostics go to a file or nowhere.

use std::fs::{File, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::CarouselConfig;
use crate::error::CarouselError;

/// Installs the global tracing subscriber when `log_file` is configured.
///
/// Returns `true` when a subscriber was installed.
///
/// # Errors
///
/// Returns [`CarouselError::Logging`] when the filter directive is invalid,
/// the log file cannot be opened, or a subscriber is already installed.
pub fn init_logging(config: &CarouselConfig) -> Result<bool, CarouselError> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(false);
    };

    let filter = build_filter(config.log_filter())?;
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|error| CarouselError::Logging {
            message: error.to_string(),
        })?;

    Ok(true)
}

fn build_filter(directive: &str) -> Result<EnvFilter, CarouselError> {
    EnvFilter::try_new(directive).map_err(|error| CarouselError::Logging {
        message: format!("invalid log level '{directive}': {error}"),
    })
}

fn open_log_file(path: &str) -> Result<File, CarouselError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| CarouselError::Io {
            message: format!("failed to open log file '{path}': {error}"),
        })
}

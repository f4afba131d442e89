//! Errors surfaced by the carousel binary before the UI starts.
//!
//! Fetch failures never appear here: they are absorbed by the review store
//! and rendered as the empty state.

use thiserror::Error;

/// Errors raised while configuring or running the carousel.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CarouselError {
    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Logging could not be initialised.
    #[error("logging error: {message}")]
    Logging {
        /// Details about the logging failure.
        message: String,
    },

    /// The terminal program failed.
    #[error("terminal error: {message}")]
    Terminal {
        /// Error detail from the TUI runtime.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

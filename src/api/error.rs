//! Error types exposed by the review API layer.

use thiserror::Error;

/// Errors surfaced while fetching or decoding the review feed.
///
/// None of these reach the user: the review store logs them and falls back
/// to the empty state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The configured endpoint could not be parsed or joined.
    #[error("review endpoint URL is invalid: {0}")]
    InvalidUrl(String),

    /// No gateway was configured for the running view.
    #[error("review gateway is not configured")]
    Unconfigured,

    /// The HTTP client could not be constructed.
    #[error("failed to configure HTTP client: {message}")]
    Client {
        /// Builder error detail.
        message: String,
    },

    /// Networking failed while calling the backend.
    #[error("network error fetching reviews: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The backend answered with a non-success HTTP status.
    #[error("review API returned status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Truncated response body.
        message: String,
    },

    /// The response body was not the expected JSON envelope.
    #[error("review API response could not be decoded: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// The envelope decoded but reported `success: false` or carried no data.
    #[error("review API reported failure: {message}")]
    Unsuccessful {
        /// Message returned by the backend, or a description of what was
        /// missing.
        message: String,
    },
}

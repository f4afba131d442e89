//! Gateway for loading course reviews over HTTP.
//!
//! The trait keeps the store independent of the transport so tests can swap
//! in a mock, while [`HttpReviewGateway`] performs the real `GET` with
//! reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::error::FetchError;
use super::models::{ApiReviewsEnvelope, Review};

/// Maximum number of characters of an error body kept in a [`FetchError`].
const ERROR_BODY_LIMIT: usize = 160;

/// Gateway that can load the review feed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Fetches every review, in server order.
    async fn fetch_reviews(&self) -> Result<Vec<Review>, FetchError>;
}

/// reqwest-backed gateway issuing a single `GET` to the reviews endpoint.
#[derive(Debug, Clone)]
pub struct HttpReviewGateway {
    client: Client,
    endpoint: Url,
}

impl HttpReviewGateway {
    /// Creates a gateway from an existing client.
    #[must_use]
    pub const fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// Builds a client for the endpoint, applying `timeout` when given.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] when reqwest fails to build a client.
    pub fn for_endpoint(endpoint: Url, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let builder = Client::builder();
        let configured = match timeout {
            Some(limit) => builder.timeout(limit),
            None => builder,
        };
        let client = configured.build().map_err(|error| FetchError::Client {
            message: error.to_string(),
        })?;
        Ok(Self::new(client, endpoint))
    }

    /// Returns the endpoint this gateway calls.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ReviewGateway for HttpReviewGateway {
    async fn fetch_reviews(&self) -> Result<Vec<Review>, FetchError> {
        tracing::debug!("fetching reviews from {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|error| FetchError::Network {
                message: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.map_or_else(
                |_| "(failed to read error response body)".to_owned(),
                |body| truncate_for_message(&body, ERROR_BODY_LIMIT),
            );
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiReviewsEnvelope =
            response.json().await.map_err(|error| FetchError::Decode {
                message: error.to_string(),
            })?;

        envelope.into_reviews()
    }
}

fn truncate_for_message(content: &str, limit: usize) -> String {
    let trimmed = content.trim();
    if trimmed.chars().count() <= limit {
        return trimmed.to_owned();
    }
    let kept: String = trimmed.chars().take(limit).collect();
    format!("{kept}...")
}

//! Review store: the fetched list, its fetch lifecycle and the rotation.
//!
//! Fetching is fail-soft. Every failure is logged and collapses to an empty
//! list, which renders exactly like a backend that has no reviews yet.

use tokio_util::sync::CancellationToken;

use crate::api::{FetchError, Review, ReviewGateway};

use super::navigation::Rotation;
use super::window::select_window;

/// Fetch lifecycle of a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    /// The mount-time fetch has not completed yet.
    #[default]
    NotLoaded,
    /// A fetch outcome was applied. The list may still be empty.
    Loaded,
}

/// Result of a single fetch attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The backend returned a list of reviews.
    Loaded(Vec<Review>),
    /// The fetch failed. The store falls back to an empty list.
    Unavailable(FetchError),
    /// The owning view was torn down before the fetch finished.
    Cancelled,
}

/// Holds the reviews, the rotation offset and the fetch state.
#[derive(Debug, Clone, Default)]
pub struct ReviewStore {
    reviews: Vec<Review>,
    rotation: Rotation,
    state: LoadState,
}

impl ReviewStore {
    /// Creates an empty, not-yet-loaded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already loaded with `reviews`.
    #[must_use]
    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        Self {
            reviews,
            rotation: Rotation::new(),
            state: LoadState::Loaded,
        }
    }

    /// Performs one fetch, abandoning it if `cancel` fires first.
    ///
    /// Failures are logged here and returned as
    /// [`LoadOutcome::Unavailable`]; they never propagate further.
    pub async fn load(gateway: &dyn ReviewGateway, cancel: &CancellationToken) -> LoadOutcome {
        let result = tokio::select! {
            () = cancel.cancelled() => {
                tracing::debug!("review fetch cancelled before completion");
                return LoadOutcome::Cancelled;
            }
            result = gateway.fetch_reviews() => result,
        };

        match result {
            Ok(reviews) => LoadOutcome::Loaded(reviews),
            Err(error) => {
                tracing::warn!("error fetching reviews: {error}");
                LoadOutcome::Unavailable(error)
            }
        }
    }

    /// Applies a fetch outcome, at most once per load cycle.
    ///
    /// Returns `true` when the outcome changed the store. Cancelled
    /// outcomes, and any outcome arriving after the store is already
    /// loaded, are discarded.
    pub fn apply(&mut self, outcome: LoadOutcome) -> bool {
        if self.state == LoadState::Loaded {
            tracing::debug!("discarding review fetch result for an already loaded store");
            return false;
        }

        match outcome {
            LoadOutcome::Loaded(reviews) => {
                tracing::info!("loaded {} reviews", reviews.len());
                self.reviews = reviews;
            }
            LoadOutcome::Unavailable(_) => self.reviews.clear(),
            LoadOutcome::Cancelled => return false,
        }
        self.rotation.reset();
        self.state = LoadState::Loaded;
        true
    }

    /// Replaces the list wholesale and resets the rotation.
    pub fn replace(&mut self, reviews: Vec<Review>) {
        self.reviews = reviews;
        self.rotation.reset();
        self.state = LoadState::Loaded;
    }

    /// Returns the store to the not-yet-loaded state for a fresh fetch.
    pub fn reset(&mut self) {
        self.reviews.clear();
        self.rotation.reset();
        self.state = LoadState::NotLoaded;
    }

    /// Current fetch state.
    #[must_use]
    pub const fn state(&self) -> LoadState {
        self.state
    }

    /// All reviews in server order.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Number of reviews held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Whether the store holds no reviews.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Rotation offset, or `None` while the list is empty.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        if self.reviews.is_empty() {
            None
        } else {
            Some(self.rotation.offset())
        }
    }

    /// Reviews currently visible, derived from the list and the offset.
    #[must_use]
    pub fn visible(&self) -> Vec<&Review> {
        select_window(&self.reviews, self.rotation.offset())
    }

    /// Whether previous/next controls should be shown.
    #[must_use]
    pub fn shows_controls(&self) -> bool {
        Rotation::needs_rotation(self.reviews.len())
    }

    /// Rotates forward. Returns `true` when the offset changed.
    pub fn advance(&mut self) -> bool {
        self.rotation.advance(self.reviews.len())
    }

    /// Rotates backward. Returns `true` when the offset changed.
    pub fn retreat(&mut self) -> bool {
        self.rotation.retreat(self.reviews.len())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

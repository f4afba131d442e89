//! Review carousel library crate.
//!
//! Fetches course reviews from a backend API once per mount and shows a
//! rotating window of at most three review cards in the terminal. Fetch
//! failures are logged and degrade to a "no reviews" placeholder.
//!
//! - [`carousel`]: circular window selection, guarded navigation and the
//!   review store
//! - [`api`]: review models and the HTTP gateway
//! - [`tui`]: the bubbletea-rs application and card rendering
//! - [`config`]: layered configuration

pub mod api;
pub mod carousel;
pub mod config;
pub mod error;
pub mod logging;
pub mod telemetry;
pub mod tui;

pub use api::{FetchError, HttpReviewGateway, Review, ReviewAuthor, ReviewCourse, ReviewGateway};
pub use carousel::{LoadOutcome, LoadState, ReviewStore, Rotation, select_window, window_size};
pub use config::CarouselConfig;
pub use error::CarouselError;

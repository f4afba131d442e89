//! Carousel core: circular window selection and guarded navigation.
//!
//! - [`window`]: derives the visible cards from the list and an offset
//! - [`navigation`]: the rotation offset and its advance/retreat guard
//! - [`store`]: the fetched list, its load lifecycle and the rotation
//!
//! The visible window is never stored. It is recomputed from
//! `(reviews, offset)` on every read.

pub mod navigation;
pub mod store;
pub mod window;

pub use navigation::Rotation;
pub use store::{LoadOutcome, LoadState, ReviewStore};
pub use window::{MAX_VISIBLE_CARDS, select_window, window_size};

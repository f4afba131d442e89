//! UI components for the review carousel.
//!
//! Each component owns its layout state and renders to a plain string, in
//! keeping with the bubbletea-rs view model.

mod carousel_view;
mod review_card;
mod star_rating;
mod text_truncate;
mod text_wrap;

pub use carousel_view::{
    CarouselComponent, CarouselViewContext, EMPTY_PLACEHOLDER, LOADING_PLACEHOLDER,
};
pub use review_card::{DEFAULT_AVATAR_SERVICE, ReviewCard, avatar_url};
pub use star_rating::{STAR_COUNT, StarFill, format_rating, render_stars, star_strip};
pub use text_truncate::{EXCERPT_ELLIPSIS, EXCERPT_WORDS, truncate_words};
pub use text_wrap::wrap_words;

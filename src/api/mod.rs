//! Review feed access: models, errors and the HTTP gateway.

pub mod error;
pub mod gateway;
pub mod models;

pub use error::FetchError;
pub use gateway::{HttpReviewGateway, ReviewGateway};
pub use models::{ANONYMOUS_AUTHOR, Review, ReviewAuthor, ReviewCourse};

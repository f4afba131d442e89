//! Test helpers for constructing `Review` fixtures.
//!
//! # Examples
//!
//! ```
//! use review_carousel::api::models::test_support::{numbered_reviews, review_by};
//!
//! let review = review_by("Ada", "Lovelace", "Loved it");
//! assert_eq!(review.author.display_name(), "Ada Lovelace");
//!
//! let reviews = numbered_reviews(5);
//! assert_eq!(reviews.len(), 5);
//! ```

use super::{Review, ReviewAuthor, ReviewCourse};

/// Constructs a four-star review with the given author and body.
#[must_use]
pub fn review_by(first_name: &str, last_name: &str, body: &str) -> Review {
    Review {
        rating: 4.0,
        body: body.to_owned(),
        author: ReviewAuthor {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            image: None,
        },
        course: ReviewCourse {
            course_name: Some("Rust Fundamentals".to_owned()),
        },
    }
}

/// Constructs `count` reviews whose bodies are `"review 0"`, `"review 1"`,
/// and so on, so tests can identify them by position.
#[must_use]
pub fn numbered_reviews(count: usize) -> Vec<Review> {
    (0..count)
        .map(|index| review_by("Learner", &index.to_string(), &format!("review {index}")))
        .collect()
}

/// Returns the bodies of `reviews`, for compact assertions.
#[must_use]
pub fn bodies<'a>(reviews: impl IntoIterator<Item = &'a Review>) -> Vec<&'a str> {
    reviews.into_iter().map(|review| review.body.as_str()).collect()
}

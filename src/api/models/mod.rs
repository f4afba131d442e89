//! Data models representing course reviews.
//!
//! Types prefixed with `Api` are internal deserialisation targets that mirror
//! the backend's JSON field names and convert into the public domain types.
//! Decoding is lenient: only the envelope shape is mandatory, and every
//! review field falls back to a default when missing.

use serde::Deserialize;

use crate::api::error::FetchError;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Name shown when a review carries no usable author name.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// A single course review as displayed by the carousel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Review {
    /// Display rating, expected in `[0, 5]` and always finite.
    pub rating: f64,
    /// Free-text review body. May be empty.
    pub body: String,
    /// Reviewer details.
    pub author: ReviewAuthor,
    /// Reviewed course details.
    pub course: ReviewCourse,
}

/// Author of a review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewAuthor {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Avatar image URL, if the author uploaded one.
    pub image: Option<String>,
}

impl ReviewAuthor {
    /// Returns `"first last"`, or [`ANONYMOUS_AUTHOR`] when both are blank.
    #[must_use]
    pub fn display_name(&self) -> String {
        let joined = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let trimmed = joined.trim();
        if trimmed.is_empty() {
            ANONYMOUS_AUTHOR.to_owned()
        } else {
            trimmed.to_owned()
        }
    }
}

/// Course a review was written for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewCourse {
    /// Course title, if the backend populated it.
    pub course_name: Option<String>,
}

impl ReviewCourse {
    /// Returns the course title or an empty string.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.course_name.as_deref().unwrap_or_default()
    }
}

/// Envelope wrapping every response from the reviews endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiReviewsEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<Vec<ApiReview>>,
    #[serde(default)]
    message: Option<String>,
}

impl ApiReviewsEnvelope {
    /// Unwraps the envelope into domain reviews.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Unsuccessful`] when the backend reports failure
    /// or omits the `data` payload.
    pub(crate) fn into_reviews(self) -> Result<Vec<Review>, FetchError> {
        if !self.success {
            return Err(FetchError::Unsuccessful {
                message: self
                    .message
                    .unwrap_or_else(|| "success flag was false".to_owned()),
            });
        }

        let data = self.data.ok_or_else(|| FetchError::Unsuccessful {
            message: "response carried no data".to_owned(),
        })?;

        Ok(data.into_iter().map(Review::from).collect())
    }
}

#[derive(Debug, Deserialize)]
struct ApiReview {
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    review: Option<String>,
    #[serde(default)]
    user: Option<ApiUser>,
    #[serde(default)]
    course: Option<ApiCourse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiUser {
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiCourse {
    #[serde(default)]
    course_name: Option<String>,
}

impl From<ApiReview> for Review {
    fn from(value: ApiReview) -> Self {
        let rating = value.rating.filter(|rating| rating.is_finite()).unwrap_or(0.0);
        Self {
            rating,
            body: value.review.unwrap_or_default(),
            author: value.user.map(ReviewAuthor::from).unwrap_or_default(),
            course: value.course.map(ReviewCourse::from).unwrap_or_default(),
        }
    }
}

impl From<ApiUser> for ReviewAuthor {
    fn from(value: ApiUser) -> Self {
        Self {
            first_name: value.first_name.unwrap_or_default(),
            last_name: value.last_name.unwrap_or_default(),
            image: value.image.filter(|image| !image.trim().is_empty()),
        }
    }
}

impl From<ApiCourse> for ReviewCourse {
    fn from(value: ApiCourse) -> Self {
        Self {
            course_name: value.course_name,
        }
    }
}

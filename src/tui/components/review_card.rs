//! Render model and layout for a single review card.

use url::form_urlencoded;

use crate::api::{Review, ReviewAuthor};

use super::star_rating::{STAR_COUNT, StarFill, format_rating, star_strip};
use super::text_truncate::{
    EXCERPT_WORDS, pad_to_display_width, truncate_to_display_width_with_ellipsis, truncate_words,
};
use super::text_wrap::wrap_words;

/// Default initials-avatar service used when a reviewer has no image.
pub const DEFAULT_AVATAR_SERVICE: &str = "https://api.dicebear.com/5.x/initials/svg";

/// Everything the view needs to draw one review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCard {
    /// Reviewer's display name.
    pub author_name: String,
    /// Course title, empty when unknown.
    pub course_name: String,
    /// Reviewer image, or a generated initials avatar.
    pub avatar_url: String,
    /// Review body, cut to [`EXCERPT_WORDS`] words.
    pub excerpt: String,
    /// Rating with one decimal place.
    pub rating_label: String,
    /// Five-unit star visualisation.
    pub stars: [StarFill; STAR_COUNT],
}

impl ReviewCard {
    /// Builds the card for `review`.
    #[must_use]
    pub fn from_review(review: &Review, avatar_service: &str) -> Self {
        Self {
            author_name: review.author.display_name(),
            course_name: review.course.display_name().to_owned(),
            avatar_url: avatar_url(&review.author, avatar_service),
            excerpt: truncate_words(&review.body, EXCERPT_WORDS).into_owned(),
            rating_label: format_rating(review.rating),
            stars: star_strip(review.rating),
        }
    }

    /// Lays the card out as lines exactly `width` columns wide.
    #[must_use]
    pub fn render_lines(&self, width: usize) -> Vec<String> {
        let mut lines = vec![self.author_name.clone()];
        if !self.course_name.is_empty() {
            lines.push(self.course_name.clone());
        }
        lines.push(format!("@ {}", self.avatar_url));
        lines.push(String::new());
        lines.extend(wrap_words(&self.excerpt, width));
        lines.push(String::new());
        let stars: String = self.stars.iter().map(|fill| fill.glyph()).collect();
        lines.push(format!("{} {stars}", self.rating_label));

        lines
            .iter()
            .map(|line| {
                pad_to_display_width(&truncate_to_display_width_with_ellipsis(line, width), width)
            })
            .collect()
    }
}

/// Returns the author's image, or a deterministic initials avatar seeded by
/// the author's display name.
///
/// # Examples
///
/// ```
/// use review_carousel::api::ReviewAuthor;
/// use review_carousel::tui::components::avatar_url;
///
/// let author = ReviewAuthor {
///     first_name: "Ada".to_owned(),
///     last_name: "Lovelace".to_owned(),
///     image: None,
/// };
/// assert_eq!(
///     avatar_url(&author, "https://avatars.example/initials/svg"),
///     "https://avatars.example/initials/svg?seed=Ada+Lovelace"
/// );
/// ```
#[must_use]
pub fn avatar_url(author: &ReviewAuthor, avatar_service: &str) -> String {
    if let Some(image) = &author.image {
        return image.clone();
    }

    let seed: String = form_urlencoded::byte_serialize(author.display_name().as_bytes()).collect();
    format!("{}?seed={seed}", avatar_service.trim_end_matches('?'))
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use unicode_width::UnicodeWidthStr;

    use super::*;
    use crate::api::models::test_support::review_by;

    #[fixture]
    fn service() -> &'static str {
        DEFAULT_AVATAR_SERVICE
    }

    #[rstest]
    fn uploaded_image_is_used_verbatim(service: &str) {
        let mut review = review_by("Ada", "Lovelace", "ok");
        review.author.image = Some("https://cdn.example/ada.png".to_owned());

        let card = ReviewCard::from_review(&review, service);

        assert_eq!(card.avatar_url, "https://cdn.example/ada.png");
    }

    #[rstest]
    fn missing_image_falls_back_to_generated_avatar(service: &str) {
        let review = review_by("Ada", "Lovelace", "ok");

        let card = ReviewCard::from_review(&review, service);

        assert_eq!(
            card.avatar_url,
            "https://api.dicebear.com/5.x/initials/svg?seed=Ada+Lovelace"
        );
    }

    #[rstest]
    fn generated_avatar_is_deterministic(service: &str) {
        let author = review_by("Grace", "Hopper", "").author;
        assert_eq!(avatar_url(&author, service), avatar_url(&author, service));
    }

    #[rstest]
    fn generated_avatar_escapes_seed(service: &str) {
        let author = review_by("Zoë", "O'Neil & Co", "").author;
        let url = avatar_url(&author, service);
        assert!(url.ends_with("?seed=Zo%C3%AB+O%27Neil+%26+Co"), "got {url}");
    }

    #[rstest]
    fn card_exposes_display_fields(service: &str) {
        let mut review = review_by("Ada", "Lovelace", "Clear and well paced");
        review.rating = 4.5;

        let card = ReviewCard::from_review(&review, service);

        assert_eq!(card.author_name, "Ada Lovelace");
        assert_eq!(card.course_name, "Rust Fundamentals");
        assert_eq!(card.excerpt, "Clear and well paced");
        assert_eq!(card.rating_label, "4.5");
        assert_eq!(card.stars.last(), Some(&StarFill::Half));
    }

    #[rstest]
    fn long_body_is_truncated_in_card(service: &str) {
        let body = (0..30).map(|i| i.to_string()).collect::<Vec<_>>().join(" ");
        let card = ReviewCard::from_review(&review_by("A", "B", &body), service);
        assert!(card.excerpt.ends_with("19 ..."), "got {}", card.excerpt);
    }

    #[rstest]
    fn render_lines_are_exactly_width_wide(service: &str) {
        let card = ReviewCard::from_review(
            &review_by("Ada", "Lovelace", "A long enough body to wrap across lines"),
            service,
        );

        let lines = card.render_lines(18);

        assert!(lines.iter().all(|line| line.width() == 18), "{lines:?}");
        assert!(lines.first().is_some_and(|line| line.starts_with("Ada Lovelace")));
        assert!(lines.last().is_some_and(|line| line.starts_with("4.0 ★★★★☆")));
    }

    #[rstest]
    fn render_lines_skip_missing_course(service: &str) {
        let mut review = review_by("Ada", "Lovelace", "ok");
        review.course.course_name = None;

        let lines = ReviewCard::from_review(&review, service).render_lines(40);

        assert!(lines.get(1).is_some_and(|line| line.starts_with("@ ")));
    }
}

//! Text truncation helpers for review cards.
//!
//! Two flavours: word-count truncation for review excerpts, and display
//! width truncation for fitting a line into a card column.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Number of words kept in a review excerpt.
pub const EXCERPT_WORDS: usize = 20;

/// Marker appended to a truncated excerpt.
pub const EXCERPT_ELLIPSIS: &str = "...";

/// Keeps the first `max_words` whitespace-separated words of `body`.
///
/// Bodies with at most `max_words` words are returned unchanged. Longer
/// bodies are cut to `max_words` words joined by single spaces, followed by
/// a space and [`EXCERPT_ELLIPSIS`].
///
/// # Examples
///
/// ```
/// use review_carousel::tui::components::truncate_words;
///
/// assert_eq!(truncate_words("one two three", 2), "one two ...");
/// assert_eq!(truncate_words("one two", 2), "one two");
/// ```
#[must_use]
pub fn truncate_words(body: &str, max_words: usize) -> Cow<'_, str> {
    if body.split_whitespace().nth(max_words).is_none() {
        return Cow::Borrowed(body);
    }

    let kept: Vec<&str> = body.split_whitespace().take(max_words).collect();
    Cow::Owned(format!("{} {EXCERPT_ELLIPSIS}", kept.join(" ")))
}

enum WidthTruncationDecision {
    Empty,
    Unchanged,
    DotFallback,
    Ellipsis,
}

fn width_truncation_decision(text: &str, max_width: usize) -> WidthTruncationDecision {
    if max_width == 0 {
        WidthTruncationDecision::Empty
    } else if text.width() <= max_width {
        WidthTruncationDecision::Unchanged
    } else if max_width <= 3 {
        WidthTruncationDecision::DotFallback
    } else {
        WidthTruncationDecision::Ellipsis
    }
}

/// Truncates text to the provided display width and appends an ellipsis.
///
/// Width is measured in terminal columns, not Unicode scalar count.
#[must_use]
pub fn truncate_to_display_width_with_ellipsis(text: &str, max_width: usize) -> String {
    match width_truncation_decision(text, max_width) {
        WidthTruncationDecision::Empty => String::new(),
        WidthTruncationDecision::Unchanged => text.to_owned(),
        WidthTruncationDecision::DotFallback => ".".repeat(max_width),
        WidthTruncationDecision::Ellipsis => {
            let target_width = max_width.saturating_sub(3);
            let mut truncated = String::new();
            let mut current_width: usize = 0;
            for ch in text.chars() {
                let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if current_width.saturating_add(char_width) > target_width {
                    break;
                }
                truncated.push(ch);
                current_width = current_width.saturating_add(char_width);
            }
            format!("{truncated}...")
        }
    }
}

/// Pads `text` with spaces up to `width` display columns.
///
/// Text already at or beyond `width` is returned unchanged.
#[must_use]
pub fn pad_to_display_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(padding))
}

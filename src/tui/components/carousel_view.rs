//! Carousel component: lays the visible review cards out side by side.

use crate::carousel::{LoadState, ReviewStore};

use super::review_card::ReviewCard;

/// Placeholder shown when there are no reviews, including after a failed
/// fetch.
pub const EMPTY_PLACEHOLDER: &str = "No reviews available";

/// Text shown until the mount-time fetch completes.
pub const LOADING_PLACEHOLDER: &str = "Loading reviews...";

/// Separator drawn between card columns.
const COLUMN_GAP: &str = " │ ";

/// Narrowest column a card is squeezed into.
const MIN_CARD_WIDTH: usize = 12;

/// Default render width before the first resize event.
const DEFAULT_WIDTH: usize = 80;

/// Context for rendering the carousel view.
#[derive(Debug, Clone, Copy)]
pub struct CarouselViewContext<'a> {
    /// Store holding the reviews and rotation.
    pub store: &'a ReviewStore,
    /// Service used for generated avatars.
    pub avatar_service: &'a str,
}

/// Component drawing the visible window of review cards.
#[derive(Debug, Clone)]
pub struct CarouselComponent {
    width: usize,
}

impl Default for CarouselComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselComponent {
    /// Creates a component with the default width.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }

    /// Updates the available width in columns.
    pub const fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Returns the available width in columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Renders the carousel.
    ///
    /// Navigation hints appear only when the list holds more reviews than
    /// fit in the window; an empty list renders [`EMPTY_PLACEHOLDER`] and
    /// nothing else.
    #[must_use]
    pub fn view(&self, ctx: &CarouselViewContext<'_>) -> String {
        if ctx.store.state() == LoadState::NotLoaded {
            return format!("{LOADING_PLACEHOLDER}\n");
        }
        if ctx.store.is_empty() {
            return format!("{EMPTY_PLACEHOLDER}\n");
        }

        let cards: Vec<ReviewCard> = ctx
            .store
            .visible()
            .into_iter()
            .map(|review| ReviewCard::from_review(review, ctx.avatar_service))
            .collect();

        let mut output = self.render_cards(&cards);
        if ctx.store.shows_controls() {
            output.push('\n');
            output.push_str(&render_controls(ctx.store));
        }
        output
    }

    fn column_width(&self, columns: usize) -> usize {
        let gaps = COLUMN_GAP.chars().count().saturating_mul(columns.saturating_sub(1));
        self.width
            .saturating_sub(gaps)
            .checked_div(columns)
            .unwrap_or(self.width)
            .max(MIN_CARD_WIDTH)
    }

    fn render_cards(&self, cards: &[ReviewCard]) -> String {
        let column_width = self.column_width(cards.len());
        let columns: Vec<Vec<String>> = cards
            .iter()
            .map(|card| card.render_lines(column_width))
            .collect();
        let rows = columns.iter().map(Vec::len).max().unwrap_or(0);
        let blank = " ".repeat(column_width);

        let mut output = String::new();
        for row in 0..rows {
            let cells: Vec<&str> = columns
                .iter()
                .map(|column| column.get(row).map_or(blank.as_str(), String::as_str))
                .collect();
            output.push_str(cells.join(COLUMN_GAP).trim_end());
            output.push('\n');
        }
        output
    }
}

fn render_controls(store: &ReviewStore) -> String {
    let position = store.offset().map_or(0, |offset| offset.saturating_add(1));
    format!("◀ h  {position}/{}  l ▶\n", store.len())
}

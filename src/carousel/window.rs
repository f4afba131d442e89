//! Circular window selection over the review list.

/// Largest number of cards shown at once.
pub const MAX_VISIBLE_CARDS: usize = 3;

/// Number of cards visible for a list of `len` reviews.
#[must_use]
pub const fn window_size(len: usize) -> usize {
    if len < MAX_VISIBLE_CARDS {
        len
    } else {
        MAX_VISIBLE_CARDS
    }
}

/// Returns the visible window starting at `offset`, wrapping past the end.
///
/// The result always holds exactly [`window_size`] items. An `offset` at or
/// beyond `items.len()` is reduced modulo the length, so indexing can never
/// go out of bounds. An empty slice yields an empty window; callers render
/// the empty state instead of asking for one.
///
/// # Examples
///
/// ```
/// use review_carousel::carousel::select_window;
///
/// let items = [0, 1, 2, 3, 4];
/// assert_eq!(select_window(&items, 4), vec![&4, &0, &1]);
/// ```
#[must_use]
pub fn select_window<T>(items: &[T], offset: usize) -> Vec<&T> {
    let len = items.len();
    let Some(start) = offset.checked_rem(len) else {
        return Vec::new();
    };

    (0..window_size(len))
        .filter_map(|step| start.saturating_add(step).checked_rem(len))
        .filter_map(|index| items.get(index))
        .collect()
}

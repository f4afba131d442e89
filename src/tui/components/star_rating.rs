//! Five-unit star strip for review ratings.

/// Number of star units in a strip.
pub const STAR_COUNT: usize = 5;

/// Highest rating a strip can show.
const MAX_RATING: f64 = 5.0;

/// Fill level of one star unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFill {
    /// Fully lit.
    Full,
    /// Half lit.
    Half,
    /// Unlit.
    Empty,
}

impl StarFill {
    /// Terminal glyph for this fill level.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Full => '★',
            Self::Half => '⯪',
            Self::Empty => '☆',
        }
    }
}

/// Computes the star strip for `rating`, rounded to the nearest half star.
///
/// Ratings outside `[0, 5]` are clamped and non-finite ratings show as zero.
#[must_use]
pub fn star_strip(rating: f64) -> [StarFill; STAR_COUNT] {
    let half_steps = half_steps(rating);
    let mut strip = [StarFill::Empty; STAR_COUNT];
    for (unit, fill) in (0_u8..).zip(strip.iter_mut()) {
        let full_threshold = unit.saturating_mul(2).saturating_add(2);
        let half_threshold = unit.saturating_mul(2).saturating_add(1);
        *fill = if half_steps >= full_threshold {
            StarFill::Full
        } else if half_steps >= half_threshold {
            StarFill::Half
        } else {
            StarFill::Empty
        };
    }
    strip
}

/// Renders the strip as a string of glyphs.
#[must_use]
pub fn render_stars(rating: f64) -> String {
    star_strip(rating).iter().map(|fill| fill.glyph()).collect()
}

/// Formats a rating with one decimal place (`4.5`, `3.0`).
///
/// Ties round away from zero, so `4.25` renders as `4.3`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "ratings are scaled to tenths so ties round away from zero"
)]
pub fn format_rating(rating: f64) -> String {
    let tenths = (rating * 10.0).round() / 10.0;
    format!("{tenths:.1}")
}

#[expect(
    clippy::float_arithmetic,
    reason = "ratings are fractional and must be scaled to half-star steps"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is clamped to [0, 10] before the cast"
)]
fn half_steps(rating: f64) -> u8 {
    if !rating.is_finite() {
        return 0;
    }
    (rating.clamp(0.0, MAX_RATING) * 2.0).round() as u8
}

//! Rotation offset and the guarded advance/retreat operations.

use super::window::window_size;

/// Rotation offset into the review list.
///
/// Holds a value in `[0, len)` for the list it is used with. Callers must
/// pass the same `len` to every operation until the list is replaced, at
/// which point the rotation is reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rotation {
    offset: usize,
}

impl Rotation {
    /// Creates a rotation at offset 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { offset: 0 }
    }

    /// Current offset.
    #[must_use]
    pub const fn offset(self) -> usize {
        self.offset
    }

    /// Resets the offset to 0.
    pub const fn reset(&mut self) {
        self.offset = 0;
    }

    /// Whether a list of `len` reviews holds more than fits in the window.
    #[must_use]
    pub const fn needs_rotation(len: usize) -> bool {
        len > window_size(len)
    }

    /// Moves forward by one, wrapping to 0 after the last review.
    ///
    /// Returns `false` and leaves the offset untouched when every review is
    /// already visible.
    pub fn advance(&mut self, len: usize) -> bool {
        if !Self::needs_rotation(len) {
            return false;
        }
        self.step(len, 1)
    }

    /// Moves back by one, wrapping to the last review from 0.
    ///
    /// Returns `false` and leaves the offset untouched when every review is
    /// already visible.
    pub fn retreat(&mut self, len: usize) -> bool {
        if !Self::needs_rotation(len) {
            return false;
        }
        self.step(len, len.saturating_sub(1))
    }

    fn step(&mut self, len: usize, delta: usize) -> bool {
        let Some(current) = self.offset.checked_rem(len) else {
            return false;
        };
        let Some(next) = current.saturating_add(delta).checked_rem(len) else {
            return false;
        };
        self.offset = next;
        true
    }
}

//! Message types for the TUI update loop.
//!
//! Messages represent user actions, async command results and window
//! events.

use crate::carousel::LoadOutcome;

/// Identifies one mount of the carousel.
///
/// Every fetch result carries the id of the mount that issued it, so the
/// app can discard results that arrive after a remount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MountId(pub u64);

impl MountId {
    /// Returns the id of the next mount.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Messages for the review carousel application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Rotate the window forward by one review.
    Next,
    /// Rotate the window backward by one review.
    Previous,

    // Data loading
    /// Discard the current list and fetch again as a fresh mount.
    RefetchRequested,
    /// A fetch issued by `mount` finished.
    FetchFinished {
        /// Mount that issued the fetch.
        mount: MountId,
        /// How the fetch ended.
        outcome: LoadOutcome,
        /// Fetch latency in milliseconds.
        latency_ms: u64,
    },

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

//! Rendering logic for the carousel application chrome.
//!
//! Pure query methods producing the header, status bar and help overlay.

use super::CarouselApp;
use crate::carousel::LoadState;

impl CarouselApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Course Reviews";
        let loading_indicator = if self.store.state() == LoadState::NotLoaded {
            " [Loading...]"
        } else {
            ""
        };
        format!("{title}{loading_indicator}\n")
    }

    /// Renders the status bar with key hints.
    ///
    /// Rotation hints are listed only while the carousel shows controls.
    pub(super) fn render_status_bar(&self) -> String {
        let hints = if self.store.shows_controls() {
            "h/l:rotate  r:refetch  ?:help  q:quit"
        } else {
            "r:refetch  ?:help  q:quit"
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay() -> String {
        let help_text = r"
=== Keyboard Shortcuts ===

Carousel:
  l, Right   Next review
  h, Left    Previous review

Other:
  r          Fetch reviews again
  ?          Toggle this help
  q, Esc     Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}

//! Navigation handlers.
//!
//! Rotation only happens when the controls are on screen; otherwise the
//! key press is ignored and the offset stays put.

use bubbletea_rs::Cmd;

use super::CarouselApp;

impl CarouselApp {
    /// Handles a request to rotate forward.
    pub(super) fn handle_next(&mut self) -> Option<Cmd> {
        if self.store.shows_controls() {
            self.store.advance();
        }
        None
    }

    /// Handles a request to rotate backward.
    pub(super) fn handle_previous(&mut self) -> Option<Cmd> {
        if self.store.shows_controls() {
            self.store.retreat();
        }
        None
    }
}

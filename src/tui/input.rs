//! Input handling for the TUI application.
//!
//! Translates terminal key events into application messages.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// Whether the key is the `Ctrl-C` interrupt, which always quits.
#[must_use]
pub fn is_interrupt(key: &bubbletea_rs::event::KeyMsg) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.key == KeyCode::Char('c')
}

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    if is_interrupt(key) {
        return Some(AppMsg::Quit);
    }

    match key.key {
        KeyCode::Char('q') | KeyCode::Esc => Some(AppMsg::Quit),
        KeyCode::Char('l') | KeyCode::Right => Some(AppMsg::Next),
        KeyCode::Char('h') | KeyCode::Left => Some(AppMsg::Previous),
        KeyCode::Char('r') => Some(AppMsg::RefetchRequested),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

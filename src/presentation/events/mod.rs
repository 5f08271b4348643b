//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Global shortcuts, checked before the active screen sees a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalKey {
    Quit,
    AddressBar,
    Home,
    Favorites,
    SignIn,
    SignOut,
    Back,
}

/// Terminal key classification.
pub struct EventHandler;

impl EventHandler {
    /// Returns whether the event is a key press (not a release or repeat).
    #[must_use]
    pub fn is_press(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press
    }

    /// Maps a key to a global shortcut.
    ///
    /// While a text field has focus only Ctrl+C is global, so letters can be
    /// typed.
    #[must_use]
    pub fn global_key(key: &KeyEvent, captures_input: bool) -> Option<GlobalKey> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(GlobalKey::Quit);
        }
        if captures_input || !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
            return None;
        }

        match key.code {
            KeyCode::Char('q') => Some(GlobalKey::Quit),
            KeyCode::Char(':') => Some(GlobalKey::AddressBar),
            KeyCode::Char('h') => Some(GlobalKey::Home),
            KeyCode::Char('f') => Some(GlobalKey::Favorites),
            KeyCode::Char('l') => Some(GlobalKey::SignIn),
            KeyCode::Char('o') => Some(GlobalKey::SignOut),
            KeyCode::Backspace => Some(GlobalKey::Back),
            _ => None,
        }
    }
}

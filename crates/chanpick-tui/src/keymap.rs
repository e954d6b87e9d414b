//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Picker keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    MoveUp,
    MoveDown,
    PrevPage,
    NextPage,
    Toggle,
    ToggleAll,
    Confirm,
    Cancel,
    None,
}

/// Map a key event to a picker action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Cancel,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => KeyAction::Cancel,
        KeyCode::Enter => KeyAction::Confirm,
        KeyCode::Char(' ') => KeyAction::Toggle,
        KeyCode::Char('a' | 'A') => KeyAction::ToggleAll,
        KeyCode::Up | KeyCode::Char('k' | 'K') => KeyAction::MoveUp,
        KeyCode::Down | KeyCode::Char('j' | 'J') => KeyAction::MoveDown,
        KeyCode::Left | KeyCode::Char('h' | 'H') => KeyAction::PrevPage,
        KeyCode::Right | KeyCode::Char('l' | 'L') => KeyAction::NextPage,
        _ => KeyAction::None,
    }
}

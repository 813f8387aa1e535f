//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Horizontal movement key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Left,
    Right,
}

/// Map a key press to a discrete action.
///
/// Quit is handled separately by [`should_quit`] so it can be checked first.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Enter => Some(GameAction::Confirm),
        KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        _ => None,
    }
}

/// Map a key to a movement direction, if it is one.
pub fn movement_key(code: KeyCode) -> Option<MoveKey> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(MoveKey::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(MoveKey::Right),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

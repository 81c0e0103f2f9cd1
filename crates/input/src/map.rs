//! Key mapping from terminal events to game actions.
//!
//! Bindings depend on the mode: in navigation W/A/S/D walk and turn, in the
//! editor they move the cursor. Letters are case-insensitive.

use crate::types::{GameAction, Mode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a game action for the given mode.
pub fn handle_key_event(key: KeyEvent, mode: Mode) -> Option<GameAction> {
    if should_quit(key) {
        return Some(GameAction::Quit);
    }

    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    match mode {
        Mode::Navigate => match code {
            KeyCode::Char('a') | KeyCode::Left => Some(GameAction::RotateLeft),
            KeyCode::Char('d') | KeyCode::Right => Some(GameAction::RotateRight),
            KeyCode::Char('w') | KeyCode::Up => Some(GameAction::MoveForward),
            KeyCode::Char('s') | KeyCode::Down => Some(GameAction::MoveBackward),
            KeyCode::Char('m') => Some(GameAction::ToggleEditor),
            _ => None,
        },
        Mode::Edit => match code {
            KeyCode::Char('w') | KeyCode::Up => Some(GameAction::CursorUp),
            KeyCode::Char('s') | KeyCode::Down => Some(GameAction::CursorDown),
            KeyCode::Char('a') | KeyCode::Left => Some(GameAction::CursorLeft),
            KeyCode::Char('d') | KeyCode::Right => Some(GameAction::CursorRight),
            KeyCode::Char('1') => Some(GameAction::PlaceWall),
            KeyCode::Char('2') => Some(GameAction::ClearWall),
            KeyCode::Char('3') => Some(GameAction::Teleport),
            KeyCode::Char('g') => Some(GameAction::Regenerate),
            KeyCode::Char('c') => Some(GameAction::ResetRoom),
            KeyCode::Char('m') => Some(GameAction::ToggleEditor),
            _ => None,
        },
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

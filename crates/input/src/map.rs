//! Key mapping from terminal events to view actions.

use crate::types::ViewAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to view actions.
pub fn handle_key_event(key: KeyEvent) -> Option<ViewAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Mesh rotation
        KeyCode::Left => Some(ViewAction::YawLeft),
        KeyCode::Right => Some(ViewAction::YawRight),
        KeyCode::Up => Some(ViewAction::PitchUp),
        KeyCode::Down => Some(ViewAction::PitchDown),
        KeyCode::Char(',') | KeyCode::Char('<') => Some(ViewAction::RollLeft),
        KeyCode::Char('.') | KeyCode::Char('>') => Some(ViewAction::RollRight),

        // Camera
        KeyCode::Char('w') | KeyCode::Char('W') => Some(ViewAction::CameraForward),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(ViewAction::CameraBack),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(ViewAction::CameraLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(ViewAction::CameraRight),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ViewAction::CameraUp),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(ViewAction::CameraDown),

        // Toggles
        KeyCode::Char('m') | KeyCode::Char('M') => Some(ViewAction::NextModel),
        KeyCode::Char('b') | KeyCode::Char('B') => Some(ViewAction::ToggleCulling),

        _ => None,
    }
}

/// Check if key should quit the renderer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

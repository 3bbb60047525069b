//! Key mapping from terminal events to spin actions.

use crate::types::SpinAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a pivot selection.
///
/// The number row picks the rotation pivot; the labels are arbitrary and
/// carry no meaning beyond selection. Anything else is a deliberate no-op.
pub fn handle_key_event(key: KeyEvent) -> Option<SpinAction> {
    match key.code {
        KeyCode::Char('1') => Some(SpinAction::SelectPivot(0)),
        KeyCode::Char('2') => Some(SpinAction::SelectPivot(1)),
        KeyCode::Char('3') => Some(SpinAction::SelectPivot(2)),
        KeyCode::Char('4') => Some(SpinAction::SelectPivot(3)),
        _ => None,
    }
}

/// Check if the key should end the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || matches!(key.code, KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

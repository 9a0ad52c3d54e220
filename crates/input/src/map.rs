//! Key mapping from terminal events to player intents.

use crate::types::InputIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a keyboard event to an intent.
///
/// Space jumps and Esc quits. Ctrl-C also quits, since raw mode swallows the
/// interrupt signal. Releases and auto-repeats are ignored, as is every other key.
pub fn map_key_event(key: KeyEvent) -> Option<InputIntent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if is_interrupt(key) {
        return Some(InputIntent::Quit);
    }

    match key.code {
        KeyCode::Char(' ') => Some(InputIntent::Jump),
        KeyCode::Esc => Some(InputIntent::Quit),
        _ => None,
    }
}

/// Ctrl-C
pub fn is_interrupt(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

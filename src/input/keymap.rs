//! Keyboard-to-action mapping.

use crate::core::Action;
use crate::eval::{DIVIDE_GLYPH, MULTIPLY_GLYPH};
use serde::{Deserialize, Serialize};

/// A key press as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// A printable character
    Char(char),
    Enter,
    Backspace,
    Escape,
}

/// Map a key press to the action it triggers, if any.
///
/// # Example
///
/// ```rust
/// use calc_engine::core::Action;
/// use calc_engine::input::{action_for_key, Key};
///
/// assert_eq!(action_for_key(Key::Char('7')), Some(Action::append("7")));
/// assert_eq!(action_for_key(Key::Char('*')), Some(Action::append("×")));
/// assert_eq!(action_for_key(Key::Enter), Some(Action::Calculate));
/// assert_eq!(action_for_key(Key::Char('x')), None);
/// ```
pub fn action_for_key(key: Key) -> Option<Action> {
    match key {
        Key::Enter | Key::Char('=') => Some(Action::Calculate),
        Key::Backspace => Some(Action::Delete),
        Key::Escape => Some(Action::Clear),
        Key::Char('*') => Some(Action::append(MULTIPLY_GLYPH.to_string())),
        Key::Char('/') => Some(Action::append(DIVIDE_GLYPH.to_string())),
        Key::Char(c @ ('0'..='9' | '+' | '-' | '.' | '(' | ')' | '^')) => {
            Some(Action::append(c.to_string()))
        }
        Key::Char(_) => None,
    }
}

/// Map a sequence of typed characters, skipping unmapped ones.
///
/// `'\n'` is treated as Enter and `'\u{8}'` as Backspace.
pub fn actions_for_text(text: &str) -> Vec<Action> {
    text.chars()
        .map(|c| match c {
            '\n' | '\r' => Key::Enter,
            '\u{8}' => Key::Backspace,
            '\u{1b}' => Key::Escape,
            c => Key::Char(c),
        })
        .filter_map(action_for_key)
        .collect()
}

//! Type definitions for keypad input

use std::fmt;

/// A key pressed on the keypad, as reported by the page (`KeyboardEvent.key`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    /// Any other named key (`Enter`, `ArrowLeft`, `Tab`...)
    Named(String),
}

impl Key {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            _ => {
                let mut chars = raw.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Named(raw.to_string()),
                }
            }
        }
    }
}

impl From<&str> for Key {
    fn from(raw: &str) -> Self {
        Key::parse(raw)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{c}"),
            Key::Backspace => f.write_str("Backspace"),
            Key::Delete => f.write_str("Delete"),
            Key::Named(name) => f.write_str(name),
        }
    }
}

/// What a key does to the dial state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    EnterRoom,
    AppendDigit(char),
    RemoveDigit,
    /// Default action prevented, nothing changes
    Suppress,
}

impl KeyAction {
    /// Total mapping from keys to actions
    pub fn classify(key: &Key) -> Self {
        match key {
            Key::Char('#') => KeyAction::EnterRoom,
            Key::Char(c) if c.is_ascii_digit() => KeyAction::AppendDigit(*c),
            Key::Backspace | Key::Delete => KeyAction::RemoveDigit,
            Key::Char(_) | Key::Named(_) => KeyAction::Suppress,
        }
    }
}

/// Result of feeding one key to the dial pad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    EnterRoom,
    DigitAppended,
    DigitRemoved,
    Suppressed,
}

/// Digits typed so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialState {
    digits: String,
}

impl DialState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one ASCII digit; anything else is refused
    pub fn push(&mut self, digit: char) -> bool {
        if !digit.is_ascii_digit() {
            return false;
        }
        self.digits.push(digit);
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        self.digits.pop()
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

//! Logical key events from a front-end
//!
//! Front-ends translate their own key or button events into the names used
//! here: a single letter, `"Backspace"` or `"Enter"`.

use super::session::Session;
use tracing::trace;

/// A key that means something to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Backspace,
    Enter,
}

impl Key {
    /// Parse a logical key name
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Key;
    ///
    /// assert_eq!(Key::parse("A"), Some(Key::Letter('A')));
    /// assert_eq!(Key::parse("Enter"), Some(Key::Enter));
    /// assert_eq!(Key::parse("Shift"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Backspace" => Some(Self::Backspace),
            "Enter" => Some(Self::Enter),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => Some(Self::Letter(c)),
                    _ => None,
                }
            }
        }
    }

    /// Name of the key as shown on an on-screen keyboard
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(c) => c.to_ascii_uppercase().to_string(),
            Self::Backspace => "Backspace".to_string(),
            Self::Enter => "Enter".to_string(),
        }
    }
}

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&[Key]; 3] = [
    &[
        Key::Letter('Q'),
        Key::Letter('W'),
        Key::Letter('E'),
        Key::Letter('R'),
        Key::Letter('T'),
        Key::Letter('Y'),
        Key::Letter('U'),
        Key::Letter('I'),
        Key::Letter('O'),
        Key::Letter('P'),
    ],
    &[
        Key::Letter('A'),
        Key::Letter('S'),
        Key::Letter('D'),
        Key::Letter('F'),
        Key::Letter('G'),
        Key::Letter('H'),
        Key::Letter('J'),
        Key::Letter('K'),
        Key::Letter('L'),
    ],
    &[
        Key::Enter,
        Key::Letter('Z'),
        Key::Letter('X'),
        Key::Letter('C'),
        Key::Letter('V'),
        Key::Letter('B'),
        Key::Letter('N'),
        Key::Letter('M'),
        Key::Backspace,
    ],
];

impl Session {
    /// Apply a parsed key
    ///
    /// Returns whether the session changed.
    pub fn press(&mut self, key: Key) -> bool {
        match key {
            Key::Letter(c) => self.append_char(c),
            Key::Backspace => self.delete_char(),
            Key::Enter => self.submit().is_some(),
        }
    }

    /// Forward a logical key event by name; unknown names are ignored
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Session;
    ///
    /// let mut session = Session::default();
    /// for key in ["R", "e", "a", "c", "t", "Enter"] {
    ///     session.on_key(key);
    /// }
    /// assert_eq!(session.attempt(), 1);
    /// assert!(session.message().is_some());
    /// ```
    pub fn on_key(&mut self, key: &str) -> bool {
        match Key::parse(key) {
            Some(key) => self.press(key),
            None => {
                trace!(key, "ignored key");
                false
            }
        }
    }

    /// Restart control for the front-end
    pub fn reset_game(&mut self) {
        self.reset();
    }
}

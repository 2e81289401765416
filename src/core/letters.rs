//! Aggregate per-letter status for keyboard coloring

use super::feedback::{Feedback, LetterStatus};
use super::word::Word;
use rustc_hash::FxHashMap;

/// Best-known status of every letter guessed so far
///
/// Letters are keyed by their lowercase ASCII byte. A letter only gets an
/// entry once it has appeared in a submitted guess, and a `Correct` entry is
/// never overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStatusMap {
    statuses: FxHashMap<u8, LetterStatus>,
}

impl LetterStatusMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one evaluated guess into the map
    ///
    /// Positions are applied left to right, so a later position overwrites an
    /// earlier one for the same letter, unless the stored status is `Correct`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterStatus, LetterStatusMap, Word};
    ///
    /// let secret = Word::new("react").unwrap();
    /// let mut map = LetterStatusMap::new();
    ///
    /// let first = Word::new("react").unwrap();
    /// map.update(&first, &Feedback::evaluate(&secret, &first));
    ///
    /// let second = Word::new("trace").unwrap();
    /// map.update(&second, &Feedback::evaluate(&secret, &second));
    ///
    /// // T was misplaced in TRACE but stays correct from REACT
    /// assert_eq!(map.get('t'), Some(LetterStatus::Correct));
    /// ```
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &status) in guess.chars().iter().zip(feedback.statuses()) {
            let entry = self.statuses.entry(letter).or_insert(status);
            if *entry != LetterStatus::Correct {
                *entry = status;
            }
        }
    }

    /// Status for a letter, case-insensitive
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.statuses
            .get(&(letter.to_ascii_lowercase() as u8))
            .copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

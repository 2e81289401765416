//! Guess evaluation and per-letter feedback
//!
//! Each position of a guess gets one of three statuses:
//! - Correct: right letter in the right position
//! - Misplaced: letter appears somewhere in the secret
//! - Incorrect: letter does not appear in the secret
//!
//! Evaluation does no frequency accounting. A letter counts as misplaced if the
//! secret contains it anywhere, however many times it is repeated in the guess.
//! This deliberately differs from strict Wordle scoring for repeated letters.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Outcome for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    Correct,
    Misplaced,
    Incorrect,
}

impl LetterStatus {
    /// Emoji square used in share strings
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Incorrect => '⬛',
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Misplaced => "misplaced",
            Self::Incorrect => "incorrect",
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered per-position statuses for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Evaluate `guess` against `secret`
    ///
    /// # Algorithm
    /// For each position independently:
    /// 1. Same letter as the secret at that position: correct
    /// 2. Otherwise, secret contains the letter anywhere: misplaced
    /// 3. Otherwise: incorrect
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let secret = Word::new("react").unwrap();
    /// let guess = Word::new("trace").unwrap();
    ///
    /// let feedback = Feedback::evaluate(&secret, &guess);
    /// assert_eq!(
    ///     feedback.statuses(),
    ///     &[Misplaced, Misplaced, Correct, Correct, Misplaced]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let statuses = std::array::from_fn(|i| {
            let letter = guess.char_at(i);
            if letter == secret.char_at(i) {
                LetterStatus::Correct
            } else if secret.has_letter(letter) {
                LetterStatus::Misplaced
            } else {
                LetterStatus::Incorrect
            }
        });

        Self(statuses)
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

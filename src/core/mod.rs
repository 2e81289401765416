//! Core domain types for Wordle
//!
//! Pure, I/O-free types: validated words, guess evaluation and the
//! aggregate letter map used to color the keyboard.

mod feedback;
mod letters;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use letters::LetterStatusMap;
pub use word::{WORD_LENGTH, Word, WordError};

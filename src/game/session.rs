//! Game session state machine
//!
//! A `Session` owns everything for one game: the secret, the guess buffer,
//! both history tables, the keyboard letter map and the end-of-game result.
//! Invalid input is ignored rather than reported.

use crate::core::{Feedback, LetterStatusMap, WORD_LENGTH, Word};
use tracing::{debug, info, trace};

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Secret used when none is supplied
pub const DEFAULT_SECRET: [u8; WORD_LENGTH] = *b"react";

/// One row of displayed letters; `None` is an empty cell
pub type GridRow = [Option<char>; WORD_LENGTH];

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Terminal result of a game, set exactly once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: Outcome,
    pub message: String,
}

impl GameResult {
    fn won(secret: &Word, attempts: usize) -> Self {
        Self {
            outcome: Outcome::Won,
            message: format!(
                "Congratulations! You guessed the word \"{secret}\" in {attempts} attempts."
            ),
        }
    }

    fn lost(secret: &Word) -> Self {
        Self {
            outcome: Outcome::Lost,
            message: format!(
                "Sorry, you've run out of attempts. The correct word was \"{secret}\"."
            ),
        }
    }
}

/// A single game against a fixed secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    secret: Word,
    buffer: String,
    attempt: usize,
    grid: [GridRow; MAX_ATTEMPTS],
    feedback: [Option<Feedback>; MAX_ATTEMPTS],
    letters: LetterStatusMap,
    result: Option<GameResult>,
}

impl Default for Session {
    /// Session against [`DEFAULT_SECRET`]
    fn default() -> Self {
        Self::new(Word::from_letters(DEFAULT_SECRET))
    }
}

impl Session {
    /// Start a new game against `secret`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{GameState, Session};
    ///
    /// let session = Session::new(Word::new("react").unwrap());
    /// assert_eq!(session.state(), GameState::Playing);
    /// assert_eq!(session.attempt(), 0);
    /// ```
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            buffer: String::with_capacity(WORD_LENGTH),
            attempt: 0,
            grid: [[None; WORD_LENGTH]; MAX_ATTEMPTS],
            feedback: [None; MAX_ATTEMPTS],
            letters: LetterStatusMap::new(),
            result: None,
        }
    }

    /// Append a letter to the guess buffer
    ///
    /// Ignored unless the game is in progress, `c` is an ASCII letter and the
    /// buffer is not yet full. Returns whether the letter was accepted.
    pub fn append_char(&mut self, c: char) -> bool {
        if !self.is_playing() || !c.is_ascii_alphabetic() || self.buffer.len() >= WORD_LENGTH {
            trace!(%c, "rejected letter");
            return false;
        }

        self.buffer.push(c.to_ascii_lowercase());
        debug!(buffer = %self.buffer, "letter appended");
        true
    }

    /// Remove the last letter of the guess buffer
    ///
    /// Returns whether a letter was removed.
    pub fn delete_char(&mut self) -> bool {
        if !self.is_playing() {
            trace!("rejected delete after game end");
            return false;
        }

        let removed = self.buffer.pop().is_some();
        if removed {
            debug!(buffer = %self.buffer, "letter deleted");
        }
        removed
    }

    /// Submit the guess buffer
    ///
    /// Ignored unless the game is in progress and the buffer is full. On
    /// success the guess is evaluated, recorded in the next history row and
    /// folded into the letter map; the game ends on a perfect guess or when
    /// the last attempt is used. Returns the feedback for an accepted guess.
    pub fn submit(&mut self) -> Option<Feedback> {
        if !self.is_playing() {
            trace!("rejected submit after game end");
            return None;
        }

        let Ok(guess) = Word::new(self.buffer.as_str()) else {
            trace!(buffer = %self.buffer, "rejected incomplete guess");
            return None;
        };

        let feedback = Feedback::evaluate(&self.secret, &guess);
        self.letters.update(&guess, &feedback);

        self.grid[self.attempt] = guess.to_display().map(Some);
        self.feedback[self.attempt] = Some(feedback);
        self.attempt += 1;

        info!(
            attempt = self.attempt,
            guess = %guess,
            feedback = %feedback.to_emoji(),
            "guess submitted"
        );

        if feedback.is_perfect() {
            self.finish(GameResult::won(&self.secret, self.attempt));
        } else if self.attempt == MAX_ATTEMPTS {
            self.finish(GameResult::lost(&self.secret));
        }

        self.buffer.clear();
        Some(feedback)
    }

    /// Start over against the same secret
    ///
    /// Valid in any state. Every piece of game state, including the letter
    /// map and the result message, goes back to its initial value.
    pub fn reset(&mut self) {
        info!(attempts = self.attempt, "game reset");
        *self = Self::new(self.secret.clone());
    }

    fn finish(&mut self, result: GameResult) {
        info!(outcome = ?result.outcome, attempts = self.attempt, "game over");
        self.result = Some(result);
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        match &self.result {
            None => GameState::Playing,
            Some(GameResult {
                outcome: Outcome::Won,
                ..
            }) => GameState::Won,
            Some(GameResult {
                outcome: Outcome::Lost,
                ..
            }) => GameState::Lost,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.result.is_none()
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// In-progress guess, lowercase
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Number of guesses submitted so far
    #[must_use]
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    /// Submitted rows only, without the live buffer
    #[must_use]
    pub const fn history(&self) -> &[GridRow; MAX_ATTEMPTS] {
        &self.grid
    }

    /// Grid for display, with the guess buffer merged into the current row
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Session;
    ///
    /// let mut session = Session::default();
    /// session.append_char('r');
    /// session.append_char('e');
    ///
    /// let grid = session.grid();
    /// assert_eq!(grid[0], [Some('R'), Some('E'), None, None, None]);
    /// ```
    #[must_use]
    pub fn grid(&self) -> [GridRow; MAX_ATTEMPTS] {
        let mut grid = self.grid;
        if self.is_playing() && self.attempt < MAX_ATTEMPTS {
            let row = &mut grid[self.attempt];
            *row = [None; WORD_LENGTH];
            for (cell, c) in row.iter_mut().zip(self.buffer.chars()) {
                *cell = Some(c.to_ascii_uppercase());
            }
        }
        grid
    }

    /// Feedback for each row; `None` for rows not yet submitted
    #[must_use]
    pub const fn feedback(&self) -> &[Option<Feedback>; MAX_ATTEMPTS] {
        &self.feedback
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterStatusMap {
        &self.letters
    }

    #[must_use]
    pub const fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// End-of-game message, if the game is over
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.message.as_str())
    }

    /// Emoji grid of the submitted rows, one line per guess
    #[must_use]
    pub fn share_text(&self) -> String {
        self.feedback
            .iter()
            .flatten()
            .map(Feedback::to_emoji)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Correct, Incorrect, Misplaced};

    fn type_word(session: &mut Session, word: &str) {
        for c in word.chars() {
            session.append_char(c);
        }
    }

    fn guess(session: &mut Session, word: &str) -> Option<Feedback> {
        type_word(session, word);
        session.submit()
    }

    #[test]
    fn fresh_session_is_empty() {
        let session = Session::default();
        assert_eq!(session.secret(), &Word::new("react").unwrap());
        assert_eq!(session.state(), GameState::Playing);
        assert_eq!(session.buffer(), "");
        assert_eq!(session.attempt(), 0);
        assert!(session.feedback().iter().all(Option::is_none));
        assert!(session.grid().iter().flatten().all(Option::is_none));
        assert!(session.letters().is_empty());
        assert_eq!(session.result(), None);
        assert_eq!(session.message(), None);
    }

    #[test]
    fn append_lowercases_and_caps_length() {
        let mut session = Session::default();
        assert!(session.append_char('R'));
        type_word(&mut session, "eact");
        assert_eq!(session.buffer(), "react");

        assert!(!session.append_char('s'));
        assert_eq!(session.buffer(), "react");
    }

    #[test]
    fn append_rejects_non_letters() {
        let mut session = Session::default();
        assert!(!session.append_char('1'));
        assert!(!session.append_char(' '));
        assert!(!session.append_char('é'));
        assert_eq!(session.buffer(), "");
    }

    #[test]
    fn delete_removes_last_letter() {
        let mut session = Session::default();
        assert!(!session.delete_char());

        type_word(&mut session, "rea");
        assert!(session.delete_char());
        assert_eq!(session.buffer(), "re");
    }

    #[test]
    fn short_submission_is_ignored() {
        let mut session = Session::default();
        assert_eq!(guess(&mut session, "reac"), None);

        assert_eq!(session.attempt(), 0);
        assert_eq!(session.buffer(), "reac");
        assert!(session.history().iter().flatten().all(Option::is_none));
        assert!(session.letters().is_empty());
    }

    #[test]
    fn submission_records_row_and_clears_buffer() {
        let mut session = Session::default();
        let feedback = guess(&mut session, "trace").unwrap();

        assert_eq!(
            feedback.statuses(),
            &[Misplaced, Misplaced, Correct, Correct, Misplaced]
        );
        assert_eq!(session.attempt(), 1);
        assert_eq!(session.buffer(), "");
        assert_eq!(
            session.history()[0],
            [Some('T'), Some('R'), Some('A'), Some('C'), Some('E')]
        );
        assert_eq!(session.feedback()[0], Some(feedback));
        assert!(session.feedback()[1..].iter().all(Option::is_none));
        assert_eq!(session.state(), GameState::Playing);
    }

    #[test]
    fn grid_merges_live_buffer_into_current_row() {
        let mut session = Session::default();
        guess(&mut session, "plumb");
        type_word(&mut session, "ra");

        let grid = session.grid();
        assert_eq!(
            grid[0],
            [Some('P'), Some('L'), Some('U'), Some('M'), Some('B')]
        );
        assert_eq!(grid[1], [Some('R'), Some('A'), None, None, None]);
        assert!(grid[2..].iter().flatten().all(Option::is_none));

        // The stored history is untouched by the live row
        assert!(session.history()[1].iter().all(Option::is_none));
    }

    #[test]
    fn perfect_guess_wins_immediately() {
        let mut session = Session::default();
        guess(&mut session, "plumb");
        guess(&mut session, "react");

        assert_eq!(session.state(), GameState::Won);
        assert_eq!(
            session.message(),
            Some("Congratulations! You guessed the word \"react\" in 2 attempts.")
        );
        assert_eq!(session.result().map(|r| r.outcome), Some(Outcome::Won));
    }

    #[test]
    fn input_is_rejected_after_win() {
        let mut session = Session::default();
        guess(&mut session, "react");
        let before = session.clone();

        assert!(!session.append_char('a'));
        assert!(!session.delete_char());
        assert_eq!(session.submit(), None);
        assert_eq!(session, before);
    }

    #[test]
    fn six_misses_lose() {
        let mut session = Session::default();
        for _ in 0..MAX_ATTEMPTS - 1 {
            guess(&mut session, "plumb");
            assert_eq!(session.state(), GameState::Playing);
        }
        guess(&mut session, "trace");

        assert_eq!(session.state(), GameState::Lost);
        assert_eq!(session.attempt(), MAX_ATTEMPTS);
        let message = session.message().unwrap();
        assert!(message.contains("react"));
        assert_eq!(
            message,
            "Sorry, you've run out of attempts. The correct word was \"react\"."
        );

        // No further guesses and no live row once lost
        type_word(&mut session, "react");
        assert_eq!(session.buffer(), "");
        assert_eq!(session.submit(), None);
        assert_eq!(session.attempt(), MAX_ATTEMPTS);
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let mut session = Session::default();
        for _ in 0..MAX_ATTEMPTS - 1 {
            guess(&mut session, "plumb");
        }
        guess(&mut session, "react");

        assert_eq!(session.state(), GameState::Won);
        assert_eq!(
            session.message(),
            Some("Congratulations! You guessed the word \"react\" in 6 attempts.")
        );
    }

    #[test]
    fn letter_map_keeps_correct_across_guesses() {
        let mut session = Session::new(Word::new("crate").unwrap());
        guess(&mut session, "react");
        // A is correct in position 2 of both REACT and CRATE
        assert_eq!(session.letters().get('a'), Some(Correct));

        guess(&mut session, "abbey");
        assert_eq!(session.letters().get('a'), Some(Correct));
        assert_eq!(session.letters().get('b'), Some(Incorrect));
    }

    #[test]
    fn reset_from_any_state_matches_fresh_session() {
        let fresh = Session::default();

        let mut playing = Session::default();
        guess(&mut playing, "trace");
        type_word(&mut playing, "re");
        playing.reset();
        assert_eq!(playing, fresh);

        let mut won = Session::default();
        guess(&mut won, "react");
        won.reset();
        assert_eq!(won, fresh);
        assert_eq!(won.message(), None);

        let mut lost = Session::default();
        for _ in 0..MAX_ATTEMPTS {
            guess(&mut lost, "plumb");
        }
        lost.reset();
        assert_eq!(lost, fresh);
        assert!(lost.append_char('r'));
    }

    #[test]
    fn share_text_lists_submitted_rows() {
        let mut session = Session::default();
        guess(&mut session, "trace");
        guess(&mut session, "react");
        assert_eq!(session.share_text(), "🟨🟨🟩🟩🟨\n🟩🟩🟩🟩🟩");
    }
}

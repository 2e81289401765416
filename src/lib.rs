//! Wordle Game
//!
//! A single-player Wordle: guess a fixed 5-letter secret in 6 attempts with
//! per-letter feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{GameState, Session};
//!
//! let mut session = Session::new(Word::new("react").unwrap());
//!
//! for key in ["T", "R", "A", "C", "E", "Enter"] {
//!     session.on_key(key);
//! }
//! println!("{}", session.share_text());
//!
//! for key in ["R", "E", "A", "C", "T", "Enter"] {
//!     session.on_key(key);
//! }
//! assert_eq!(session.state(), GameState::Won);
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

//! Game session and input handling

mod input;
mod session;

pub use input::{KEYBOARD_ROWS, Key};
pub use session::{
    DEFAULT_SECRET, GameResult, GameState, GridRow, MAX_ATTEMPTS, Outcome, Session,
};

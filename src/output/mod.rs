//! Terminal output formatting
//!
//! Colored board rendering for the line-oriented front-end.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_result};

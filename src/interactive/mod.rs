//! Interactive TUI interface
//!
//! Terminal front-end for a `Session`: grid, keyboard and restart modal.

mod app;
mod rendering;

pub use app::{App, Statistics, run_tui};

//! Display functions for the line-oriented front-end

use super::formatters::{format_keyboard, format_row};
use crate::game::{Outcome, Session};
use colored::Colorize;
use std::io::{self, Write};

/// Print the grid and keyboard for the current session
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_board(out: &mut impl Write, session: &Session) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    for (row, feedback) in session.grid().iter().zip(session.feedback()) {
        writeln!(out, "  {}", format_row(row, feedback.as_ref()))?;
    }
    writeln!(out)?;
    for line in format_keyboard(session.letters()) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out, "{}", "─".repeat(40).cyan())
}

/// Print the end-of-game message and share grid
///
/// Does nothing while the game is still in progress.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_result(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let Some(result) = session.result() else {
        return Ok(());
    };

    let message = match result.outcome {
        Outcome::Won => result.message.green().bold(),
        Outcome::Lost => result.message.red().bold(),
    };
    writeln!(out, "\n{message}\n")?;
    writeln!(out, "{}\n", session.share_text())
}

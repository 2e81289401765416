//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, LetterStatusMap};
use crate::game::{GridRow, KEYBOARD_ROWS, Key};
use colored::{ColoredString, Colorize};

/// Color one cell of text by its status
#[must_use]
pub fn colorize_status(text: &str, status: Option<LetterStatus>) -> ColoredString {
    match status {
        Some(LetterStatus::Correct) => text.black().on_green().bold(),
        Some(LetterStatus::Misplaced) => text.black().on_yellow().bold(),
        Some(LetterStatus::Incorrect) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Format a grid row, colored by its feedback if it has been submitted
#[must_use]
pub fn format_row(row: &GridRow, feedback: Option<&Feedback>) -> String {
    row.iter()
        .enumerate()
        .map(|(i, cell)| {
            let text = match cell {
                Some(c) => format!(" {c} "),
                None => " _ ".to_string(),
            };
            colorize_status(&text, feedback.map(|f| f.statuses()[i])).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the on-screen keyboard, one string per row
#[must_use]
pub fn format_keyboard(letters: &LetterStatusMap) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.iter()
                .filter_map(|&key| match key {
                    Key::Letter(c) => Some(colorize_status(&c.to_string(), letters.get(c))),
                    Key::Enter | Key::Backspace => None,
                })
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: one guess per line.

use crate::core::WORD_LENGTH;
use crate::game::{Key, Session};
use crate::output::{print_board, print_result};
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Run the simple interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple(session: Session) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the simple interactive mode on arbitrary input and output
///
/// Each input line is typed into the session key by key and submitted.
/// `new` restarts, `quit` exits; end of input also exits.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple_with(
    mut session: Session,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "\n╔════════════════════════════════════════╗")?;
    writeln!(out, "║                 WORDLE                 ║")?;
    writeln!(out, "╚════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {WORD_LENGTH}-letter word. Commands: 'new' to restart, 'quit' to exit."
    )?;

    loop {
        print_board(out, &session)?;

        if !session.is_playing() {
            print_result(out, &session)?;
            match read_line(input, out, "Play again? (y/n)")?.as_deref() {
                Some("y" | "yes") => {
                    session.reset_game();
                    writeln!(out, "\n🔄 New game started!")?;
                    continue;
                }
                _ => break,
            }
        }

        let Some(line) = read_line(input, out, "Guess")? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "restart" => {
                session.reset_game();
                writeln!(out, "\n🔄 New game started!")?;
            }
            guess => {
                if guess.len() != WORD_LENGTH || !guess.chars().all(|c| c.is_ascii_alphabetic()) {
                    writeln!(out, "❌ Guess must be exactly {WORD_LENGTH} letters")?;
                    continue;
                }
                for c in guess.chars() {
                    session.press(Key::Letter(c));
                }
                session.on_key("Enter");
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

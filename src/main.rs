//! Wordle Game - CLI
//!
//! Play Wordle in the terminal, either in the TUI or in a plain line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::run_simple,
    core::Word,
    game::Session,
    interactive::{App, run_tui},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the 5-letter word in 6 attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Secret word for this session (5 letters, default: react)
    #[arg(short, long, global = true)]
    secret: Option<String>,

    /// Write logs to this file (filter with RUST_LOG, default 'info')
    #[arg(short, long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (one guess per line, no TUI)
    Simple,
}

/// Install a file logger; the terminal itself is left to the game
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let session = match &cli.secret {
        Some(secret) => Session::new(
            Word::new(secret).with_context(|| format!("invalid secret word '{secret}'"))?,
        ),
        None => Session::default(),
    };

    tracing::info!("starting session");

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(session)),
        Commands::Simple => run_simple(session),
    }
}

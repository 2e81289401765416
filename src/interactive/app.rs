//! TUI application state and logic

use super::rendering::{key_at, modal_area};
use crate::game::{GameState, Key, MAX_ATTEMPTS, Session};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Position, Rect},
};
use std::io;
use tracing::{debug, info};

/// Application state
pub struct App {
    pub session: Session,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// Results of the games finished in this process
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index is the number of guesses used by a win
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    fn record(&mut self, session: &Session) {
        match session.state() {
            GameState::Playing => return,
            GameState::Won => {
                self.games_won += 1;
                self.guess_distribution[session.attempt()] += 1;
            }
            GameState::Lost => {}
        }
        self.total_games += 1;
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Wins per number of guesses, e.g. "1:0 2:3 3:1 4:0 5:0 6:0"
    #[must_use]
    pub fn distribution_text(&self) -> String {
        self.guess_distribution
            .iter()
            .enumerate()
            .skip(1)
            .map(|(guesses, wins)| format!("{guesses}:{wins}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Whether the end-of-game modal is showing
    #[must_use]
    pub const fn show_modal(&self) -> bool {
        !self.session.is_playing()
    }

    /// Handle one key press
    ///
    /// While the modal is showing, only restart and quit keys do anything;
    /// nothing reaches the session.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        if self.show_modal() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('r' | 'R')) {
                self.restart();
            }
            return;
        }

        let game_key = match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Key::Letter(c)
            }
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Enter => Key::Enter,
            _ => return,
        };

        self.press(game_key);
    }

    /// Handle one mouse event against a frame of size `area`
    ///
    /// A left click on an on-screen key presses it; while the modal is
    /// showing, a left click inside the modal restarts.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let position = Position::new(mouse.column, mouse.row);

        if self.show_modal() {
            if modal_area(area).contains(position) {
                self.restart();
            }
            return;
        }

        if let Some(key) = key_at(area, position) {
            debug!(key = %key.label(), "clicked");
            self.press(key);
        }
    }

    fn press(&mut self, key: Key) {
        if self.session.press(key) && !self.session.is_playing() {
            self.stats.record(&self.session);
        }
    }

    pub fn restart(&mut self) {
        self.session.reset_game();
        info!(
            games = self.stats.total_games,
            won = self.stats.games_won,
            "new game"
        );
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    const SCREEN: Rect = Rect::new(0, 0, 80, 30);

    fn left_click(app: &mut App, position: Position) {
        app.handle_mouse(
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: position.x,
                row: position.y,
                modifiers: KeyModifiers::NONE,
            },
            SCREEN,
        );
    }

    /// Position of an on-screen key in `SCREEN`
    fn key_position(key: Key) -> Position {
        let found = (SCREEN.y..SCREEN.bottom())
            .flat_map(|y| (SCREEN.x..SCREEN.right()).map(move |x| Position::new(x, y)))
            .find(|&p| key_at(SCREEN, p) == Some(key));
        found.unwrap_or_else(|| panic!("{key:?} is not on screen"))
    }

    fn type_guess(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn letters_fill_the_buffer() {
        let mut app = App::new(Session::default());
        press(&mut app, KeyCode::Char('R'));
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.buffer(), "r");
        assert!(!app.should_quit);
    }

    #[test]
    fn win_shows_modal_and_records_stats() {
        let mut app = App::new(Session::default());
        type_guess(&mut app, "trace");
        type_guess(&mut app, "react");

        assert!(app.show_modal());
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn modal_blocks_letters_until_restart() {
        let mut app = App::new(Session::default());
        type_guess(&mut app, "react");

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.session.state(), GameState::Won);

        press(&mut app, KeyCode::Char('r'));
        assert!(!app.show_modal());
        assert_eq!(app.session, Session::default());

        // Stats survive a restart
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn loss_is_recorded() {
        let mut app = App::new(Session::default());
        for _ in 0..MAX_ATTEMPTS {
            type_guess(&mut app, "plumb");
        }
        assert_eq!(app.session.state(), GameState::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.stats.win_rate().abs() < f64::EPSILON);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.state(), GameState::Playing);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = App::new(Session::default());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(Session::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.session.buffer(), "");
    }

    #[test]
    fn control_and_alt_chords_do_not_type() {
        let mut app = App::new(Session::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::ALT));
        assert_eq!(app.session.buffer(), "");

        app.handle_key(KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT));
        assert_eq!(app.session.buffer(), "r");
    }

    #[test]
    fn clicking_keys_plays_a_guess() {
        let mut app = App::new(Session::default());
        for c in ['T', 'R', 'A', 'C', 'X'] {
            left_click(&mut app, key_position(Key::Letter(c)));
        }
        left_click(&mut app, key_position(Key::Backspace));
        left_click(&mut app, key_position(Key::Letter('E')));
        assert_eq!(app.session.buffer(), "trace");

        left_click(&mut app, key_position(Key::Enter));
        assert_eq!(app.session.attempt(), 1);
        assert_eq!(app.session.buffer(), "");
    }

    #[test]
    fn clicks_outside_keys_and_other_buttons_are_ignored() {
        let mut app = App::new(Session::default());
        left_click(&mut app, Position::new(0, 0));

        let q = key_position(Key::Letter('Q'));
        for kind in [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Moved,
        ] {
            app.handle_mouse(
                MouseEvent {
                    kind,
                    column: q.x,
                    row: q.y,
                    modifiers: KeyModifiers::NONE,
                },
                SCREEN,
            );
        }
        assert_eq!(app.session.buffer(), "");
    }

    #[test]
    fn clicking_to_win_records_stats_and_modal_click_restarts() {
        let mut app = App::new(Session::default());
        for c in ['R', 'E', 'A', 'C', 'T'] {
            left_click(&mut app, key_position(Key::Letter(c)));
        }
        left_click(&mut app, key_position(Key::Enter));
        assert!(app.show_modal());
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);

        // Outside the modal nothing happens
        left_click(&mut app, Position::new(0, 0));
        assert!(app.show_modal());

        left_click(&mut app, modal_area(SCREEN).as_position());
        assert!(!app.show_modal());
        assert_eq!(app.session, Session::default());
    }

    #[test]
    fn distribution_text_lists_wins_per_guess_count() {
        let mut app = App::new(Session::default());
        assert_eq!(app.stats.distribution_text(), "1:0 2:0 3:0 4:0 5:0 6:0");

        type_guess(&mut app, "trace");
        type_guess(&mut app, "react");
        press(&mut app, KeyCode::Enter);
        type_guess(&mut app, "react");
        assert_eq!(app.stats.distribution_text(), "1:1 2:1 3:0 4:0 5:0 6:0");
    }
}

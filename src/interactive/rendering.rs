//! TUI rendering with ratatui
//!
//! Grid, on-screen keyboard and the end-of-game modal. Key and modal
//! positions come from the same layout functions the mouse handler uses.

use super::app::App;
use crate::core::{Feedback, LetterStatus};
use crate::game::{KEYBOARD_ROWS, Key, MAX_ATTEMPTS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Margin, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = main_layout(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[4]);

    if app.show_modal() {
        render_modal(f, app);
    }
}

fn main_layout(area: Rect) -> [Rect; 5] {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                       // Header
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Grid
            Constraint::Length(5),                       // Keyboard
            Constraint::Min(0),                          // Spacer
            Constraint::Length(4),                       // Status bar
        ])
        .areas(area)
}

/// Text drawn for a key on the on-screen keyboard
fn key_text(key: Key) -> String {
    match key {
        Key::Letter(c) => format!(" {c} "),
        Key::Enter | Key::Backspace => format!(" {} ", key.label().to_uppercase()),
    }
}

/// Screen cell of every on-screen key, for a keyboard block at `area`
///
/// Rows are centered inside the block border with one column between keys.
pub(super) fn key_cells(area: Rect) -> Vec<(Key, Rect)> {
    let inner = area.inner(Margin::new(1, 1));
    let mut cells = Vec::new();

    for (r, row) in KEYBOARD_ROWS.iter().enumerate() {
        let y = inner.y + r as u16;
        if y >= inner.bottom() {
            break;
        }

        let widths: Vec<u16> = row.iter().map(|&key| key_text(key).len() as u16).collect();
        let row_width = widths.iter().sum::<u16>() + widths.len().saturating_sub(1) as u16;
        let mut x = inner.x + inner.width.saturating_sub(row_width) / 2;

        for (&key, width) in row.iter().zip(widths) {
            let cell = Rect::new(x, y, width, 1).intersection(inner);
            if !cell.is_empty() {
                cells.push((key, cell));
            }
            x = x.saturating_add(width + 1);
        }
    }

    cells
}

/// On-screen key under a terminal position, if any
pub(super) fn key_at(frame_area: Rect, position: Position) -> Option<Key> {
    key_cells(main_layout(frame_area)[2])
        .into_iter()
        .find(|(_, cell)| cell.contains(position))
        .map(|(key, _)| key)
}

/// Area covered by the end-of-game modal
pub(super) fn modal_area(frame_area: Rect) -> Rect {
    centered_rect(frame_area, 60, MAX_ATTEMPTS as u16 + 8)
}

/// Cell style for a status; unset cells are plain
fn status_style(status: Option<LetterStatus>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match status {
        Some(LetterStatus::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(LetterStatus::Misplaced) => base.fg(Color::Black).bg(Color::Yellow),
        Some(LetterStatus::Incorrect) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let grid = app.session.grid();
    let feedback = app.session.feedback();

    let lines: Vec<Line> = grid
        .iter()
        .zip(feedback)
        .map(|(row, row_feedback)| {
            let statuses = row_feedback.as_ref().map(Feedback::statuses);
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .flat_map(|(i, cell)| {
                    let status = statuses.map(|s| s[i]);
                    let text = match cell {
                        Some(c) => format!(" {c} "),
                        None => " · ".to_string(),
                    };
                    [Span::styled(text, status_style(status)), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let letters = app.session.letters();

    let block = Block::default()
        .title(" Keyboard (click or type) ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    f.render_widget(block, area);

    for (key, cell) in key_cells(area) {
        let style = match key {
            Key::Letter(c) => status_style(letters.get(c)),
            Key::Enter | Key::Backspace => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        };
        f.render_widget(Paragraph::new(key_text(key)).style(style), cell);
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(area);

    let attempt_text = format!(
        "Attempt: {}/{}",
        (app.session.attempt() + 1).min(MAX_ATTEMPTS),
        MAX_ATTEMPTS
    );
    let attempt = Paragraph::new(attempt_text).alignment(Alignment::Center);
    f.render_widget(attempt, chunks[0]);

    let stats_text = vec![
        Line::from(format!(
            "Games: {} | Win Rate: {:.0}%",
            app.stats.total_games,
            app.stats.win_rate()
        )),
        Line::from(format!("Wins by guesses: {}", app.stats.distribution_text()))
            .style(Style::default().fg(Color::Green)),
    ];
    let stats = Paragraph::new(stats_text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(stats, chunks[1]);

    let help_text = if app.show_modal() {
        "Enter/R/Click: Restart | Esc: Quit"
    } else {
        "Type or click letters | Enter: Submit | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_modal(f: &mut Frame, app: &App) {
    let Some(message) = app.session.message() else {
        return;
    };

    let area = modal_area(f.area());

    let mut content = vec![
        Line::from(message.to_string()).style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
    ];
    content.extend(
        app.session
            .share_text()
            .lines()
            .map(|line| Line::from(line.to_string())),
    );
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "[ Restart: Enter / R / click ]",
        Style::default().fg(Color::Cyan),
    )));

    let modal = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Green)),
        );

    f.render_widget(Clear, area);
    f.render_widget(modal, area);
}

fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}

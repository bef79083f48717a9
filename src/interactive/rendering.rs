//! TUI rendering with ratatui
//!
//! Gallows, revealed word, on-screen keyboard and round status.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GuessSession, SessionStatus};
use crate::game::{Clock, GameMode};
use crate::output::formatters::{format_duration, gallows, spaced};
use crate::profile::PreferenceKey;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Keys per keyboard row
const KEYBOARD_WIDTH: usize = 10;

/// Palette for the current theme
struct Theme {
    background: Color,
    text: Color,
    accent: Color,
    muted: Color,
}

impl Theme {
    const fn new(dark: bool) -> Self {
        if dark {
            Self {
                background: Color::Reset,
                text: Color::White,
                accent: Color::Cyan,
                muted: Color::DarkGray,
            }
        } else {
            Self {
                background: Color::White,
                text: Color::Black,
                accent: Color::Blue,
                muted: Color::Gray,
            }
        }
    }
}

/// Main UI rendering function
pub fn ui<C: Clock, R: Rng>(f: &mut Frame, app: &App<C, R>) {
    let theme = Theme::new(app.settings.get(PreferenceKey::DarkMode));
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(7), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, &theme, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Gallows
            Constraint::Percentage(65), // Word and messages
        ])
        .split(chunks[1]);

    render_gallows(f, app, &theme, main_chunks[0]);
    render_word_panel(f, app, &theme, main_chunks[1]);
    render_keyboard(f, app, &theme, chunks[2]);
    render_status(f, app, &theme, chunks[3]);
}

fn panel<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(theme.text).bg(theme.background))
}

fn render_header<C: Clock, R: Rng>(f: &mut Frame, app: &App<C, R>, theme: &Theme, area: Rect) {
    let mode = match app.coordinator.round() {
        Some(round) if round.mode() == GameMode::Daily => "Daily challenge".to_string(),
        Some(round) => format!(
            "Practice · {}",
            round.category().unwrap_or("All categories")
        ),
        None => "No round".to_string(),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Գախաղան",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  "),
        Span::raw(mode),
        Span::raw("  │  ⏱ "),
        Span::raw(format_duration(app.elapsed())),
    ]))
    .alignment(Alignment::Center)
    .block(panel("", theme).style(Style::default().fg(theme.accent).bg(theme.background)));
    f.render_widget(header, area);
}

fn render_gallows<C: Clock, R: Rng>(f: &mut Frame, app: &App<C, R>, theme: &Theme, area: Rect) {
    let parts = app
        .coordinator
        .session()
        .map_or(0, GuessSession::attempts_used);

    let lines: Vec<Line> = gallows(parts)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(theme.text))))
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(panel(" Gallows ", theme));
    f.render_widget(paragraph, area);
}

fn render_word_panel<C: Clock, R: Rng>(
    f: &mut Frame,
    app: &App<C, R>,
    theme: &Theme,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    // Word
    let word_line = match app.coordinator.session() {
        Some(session) if app.input_mode == InputMode::RoundOver => {
            let color = if session.status() == SessionStatus::Won {
                Color::Green
            } else {
                Color::Red
            };
            Span::styled(
                spaced(session.word().text()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        Some(session) => Span::styled(
            spaced(&session.revealed_display()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("Press Enter to start", Style::default().fg(theme.muted)),
    };
    let word = Paragraph::new(vec![Line::from(""), Line::from(word_line)])
        .alignment(Alignment::Center)
        .block(panel(" Word ", theme));
    f.render_widget(word, chunks[0]);

    // Attempts
    let (remaining, max) = app
        .coordinator
        .session()
        .map_or((0, 1), |s| (s.remaining_attempts(), s.max_attempts()));
    let ratio = f64::from(remaining) / f64::from(max);
    let gauge_color = if ratio > 0.5 {
        Color::Green
    } else if ratio > 0.2 {
        Color::Yellow
    } else {
        Color::Red
    };
    let gauge = Gauge::default()
        .block(panel(" Attempts left ", theme))
        .gauge_style(Style::default().fg(gauge_color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{remaining}/{max}"));
    f.render_widget(gauge, chunks[1]);

    // Messages
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|m| {
            let color = match m.style {
                MessageStyle::Info => theme.text,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            ListItem::new(Span::styled(m.text.clone(), Style::default().fg(color)))
        })
        .collect();
    f.render_widget(List::new(items).block(panel(" Messages ", theme)), chunks[2]);
}

fn render_keyboard<C: Clock, R: Rng>(f: &mut Frame, app: &App<C, R>, theme: &Theme, area: Rect) {
    let session = app.coordinator.session();

    let lines: Vec<Line> = app
        .alphabet
        .rows(KEYBOARD_WIDTH)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&letter| {
                    let style = match session {
                        Some(s) if s.is_guessed(letter) && s.word().has_letter(letter) => {
                            Style::default().fg(Color::Black).bg(Color::Green)
                        }
                        Some(s) if s.is_guessed(letter) => {
                            Style::default().fg(theme.muted).add_modifier(Modifier::CROSSED_OUT)
                        }
                        _ => Style::default().fg(theme.text),
                    };
                    Span::styled(format!(" {letter} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(panel(" Keyboard ", theme));
    f.render_widget(keyboard, area);
}

fn render_status<C: Clock, R: Rng>(f: &mut Frame, app: &App<C, R>, theme: &Theme, area: Rect) {
    let stats = app.coordinator.statistics().snapshot();
    let sound = if app.settings.get(PreferenceKey::SoundEffects) {
        app.last_sounds
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        "muted".to_string()
    };

    let status = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(
                "Played {} · Won {}% · Streak {} ",
                stats.games_played, stats.win_percentage, stats.current_streak
            ),
            Style::default().fg(theme.accent),
        ),
        Span::styled(format!("♪ {sound}  "), Style::default().fg(theme.muted)),
        Span::raw("Enter: new  Tab: category  ^D: daily  ^S: sound  ^T: theme  Esc: quit"),
    ]))
    .block(panel("", theme));
    f.render_widget(status, area);
}

//! TUI application state and logic

use crate::core::{Alphabet, GuessKind};
use crate::error::GameError;
use crate::game::{
    Clock, GuessReport, PlaySessionCoordinator, RoundSummary, SoundEvent, SystemClock,
};
use crate::output::formatters::{LOSE_MESSAGE, WIN_MESSAGE};
use crate::profile::{PreferenceKey, SettingsStore};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Redraw interval while idle, so the round timer keeps moving
const TICK_RATE: Duration = Duration::from_secs(1);

/// Application state
pub struct App<C: Clock = SystemClock, R: Rng = StdRng> {
    pub coordinator: PlaySessionCoordinator<C, R>,
    pub settings: SettingsStore,
    pub alphabet: Alphabet,
    /// Category for the next practice round; `None` means all categories
    pub category: Option<String>,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub last_summary: Option<RoundSummary>,
    /// Sounds from the last action, shown in the status bar when sound is on
    pub last_sounds: Vec<SoundEvent>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<C: Clock, R: Rng> App<C, R> {
    #[must_use]
    pub fn new(
        coordinator: PlaySessionCoordinator<C, R>,
        settings: SettingsStore,
        alphabet: Alphabet,
    ) -> Self {
        Self {
            coordinator,
            settings,
            alphabet,
            category: None,
            messages: vec![Message {
                text: "Բարի գալուստ! Type letters to guess.".to_string(),
                style: MessageStyle::Info,
            }],
            input_mode: InputMode::RoundOver,
            last_summary: None,
            last_sounds: Vec::new(),
            should_quit: false,
        }
    }

    /// Start a practice round in the selected category
    pub fn start_practice(&mut self) {
        match self.coordinator.start_practice(self.category.as_deref()) {
            Ok(round) => {
                let letters = round.session().word().distinct_letter_count();
                self.round_started();
                self.add_message(
                    &format!("New word with {letters} different letters"),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Start today's daily round
    pub fn start_daily(&mut self) {
        let today = self.coordinator.clock().today();
        match self.coordinator.start_daily(today) {
            Ok(_) => {
                self.round_started();
                self.add_message("Daily challenge started", MessageStyle::Info);
            }
            Err(GameError::AlreadyPlayedToday(_)) => {
                self.add_message(
                    "You have already played today's challenge!",
                    MessageStyle::Error,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn round_started(&mut self) {
        self.input_mode = InputMode::Playing;
        self.last_summary = None;
        self.play(vec![SoundEvent::Start]);
    }

    /// New word: restart during a practice round, or start one after a round ended
    pub fn new_word(&mut self) {
        if self.input_mode == InputMode::RoundOver {
            self.start_practice();
            return;
        }
        match self.coordinator.restart() {
            Ok(_) => {
                self.round_started();
                self.add_message("New word", MessageStyle::Info);
            }
            Err(GameError::UnsupportedInDailyMode) => {
                self.add_message("The daily word cannot be changed", MessageStyle::Error);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Select the next category (all categories first) and start a round in it
    pub fn cycle_category(&mut self) {
        let names: Vec<&str> = self.coordinator.catalog().categories().collect();
        let next = match &self.category {
            None => names.first(),
            Some(current) => names
                .iter()
                .position(|n| *n == current.as_str())
                .and_then(|i| names.get(i + 1)),
        };
        self.category = next.map(|s| (*s).to_string());

        let label = self.category.as_deref().unwrap_or("All categories").to_string();
        self.add_message(&format!("Category: {label}"), MessageStyle::Info);
        self.start_practice();
    }

    pub fn guess(&mut self, letter: char) {
        if self.input_mode != InputMode::Playing {
            return;
        }
        match self.coordinator.submit_guess(letter) {
            Ok(report) => self.apply_report(report),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn apply_report(&mut self, report: GuessReport) {
        let letter = report.outcome.letter;
        match report.outcome.kind {
            GuessKind::Repeated => {
                self.add_message(&format!("'{letter}' already guessed"), MessageStyle::Info);
            }
            GuessKind::Wrong => {
                self.add_message(
                    &format!("No '{letter}' ({} left)", report.remaining_attempts),
                    MessageStyle::Error,
                );
            }
            GuessKind::Correct | GuessKind::Ignored => {}
        }
        self.play(report.sounds);

        if let Some(summary) = report.summary {
            if summary.won() {
                self.add_message(WIN_MESSAGE, MessageStyle::Success);
            } else {
                self.add_message(
                    &format!("{LOSE_MESSAGE} {}", summary.word),
                    MessageStyle::Error,
                );
            }
            self.add_message("Enter: new word  Tab: category  Esc: quit", MessageStyle::Info);
            self.input_mode = InputMode::RoundOver;
            self.last_summary = Some(summary);
        }
    }

    pub fn toggle_setting(&mut self, key: PreferenceKey) {
        match self.settings.toggle(key) {
            Ok(value) => self.add_message(
                &format!("{key}: {}", if value { "on" } else { "off" }),
                MessageStyle::Info,
            ),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn play(&mut self, sounds: Vec<SoundEvent>) {
        self.last_sounds = if self.settings.get(PreferenceKey::SoundEffects) {
            sounds
        } else {
            Vec::new()
        };
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Elapsed time of the current round
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.coordinator.elapsed().unwrap_or_default()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('d') if ctrl => self.start_daily(),
            KeyCode::Char('s') if ctrl => self.toggle_setting(PreferenceKey::SoundEffects),
            KeyCode::Char('t') if ctrl => self.toggle_setting(PreferenceKey::DarkMode),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') if self.input_mode == InputMode::RoundOver => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.new_word(),
            KeyCode::Tab => self.cycle_category(),
            KeyCode::Char(c) if !ctrl && c.is_alphabetic() => self.guess(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<C: Clock, R: Rng>(app: App<C, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, C: Clock, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<C, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    // Quitting mid-round records nothing
    app.coordinator.abandon();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SessionStatus;
    use crate::game::ManualClock;
    use crate::storage::MemoryStore;
    use crate::wordlists::WordCatalog;
    use crate::wordlists::loader::words_from_slice;
    use chrono::NaiveDate;
    use rand::SeedableRng;

    fn app() -> App<ManualClock, StdRng> {
        let store = MemoryStore::shared();
        let catalog = WordCatalog::from_categories([
            ("animals", words_from_slice(&["cat", "act"])),
            ("food", words_from_slice(&["tea", "eat"])),
        ]);
        let coordinator = PlaySessionCoordinator::with_parts(
            catalog,
            store.clone(),
            ManualClock::new(NaiveDate::from_ymd_opt(2024, 5, 5).unwrap()),
            StdRng::seed_from_u64(5),
        );
        App::new(coordinator, SettingsStore::load(store), Alphabet::latin())
    }

    fn press(app: &mut App<ManualClock, StdRng>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App<ManualClock, StdRng>, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    #[test]
    fn letters_are_guesses() {
        let mut app = app();
        app.start_practice();
        assert_eq!(app.input_mode, InputMode::Playing);

        for c in ['c', 'a', 't', 'e'] {
            press(&mut app, KeyCode::Char(c));
        }
        // Every test word is spelled from {a, c, e, t}
        assert!(app.coordinator.session().unwrap().is_terminal());
        assert_eq!(app.input_mode, InputMode::RoundOver);
    }

    #[test]
    fn winning_switches_to_round_over() {
        let mut app = app();
        app.category = Some("animals".to_string());
        app.start_practice();
        for c in ['c', 'a', 't'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.last_summary.as_ref().unwrap().status, SessionStatus::Won);
        assert!(app.last_sounds.contains(&SoundEvent::Win));

        // 'q' quits only between rounds
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn enter_starts_next_round() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Playing);
        assert!(app.coordinator.session().is_some());
    }

    #[test]
    fn tab_cycles_categories() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.category.as_deref(), Some("animals"));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.category.as_deref(), Some("food"));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.category, None);
    }

    #[test]
    fn daily_only_once() {
        let mut app = app();
        ctrl(&mut app, 'd');
        assert_eq!(app.input_mode, InputMode::Playing);

        ctrl(&mut app, 'd');
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);

        press(&mut app, KeyCode::Enter);
        assert!(app.messages.last().unwrap().text.contains("daily"));
    }

    #[test]
    fn sound_toggle_silences_events() {
        let mut app = app();
        ctrl(&mut app, 's');
        assert!(!app.settings.get(PreferenceKey::SoundEffects));
        app.start_practice();
        assert!(app.last_sounds.is_empty());
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "5");
    }
}

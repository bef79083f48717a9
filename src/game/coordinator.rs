//! Round orchestration
//!
//! The coordinator owns everything that lives across rounds (catalog, selectors,
//! statistics, store) and at most one active round. Starting a round always tears
//! the previous one down first, so there is never a second session or timer
//! alive in the background.

use super::clock::{Clock, RoundTimer, SystemClock};
use super::events::{GameMode, GuessReport, RoundSummary, SoundEvent};
use crate::core::{DEFAULT_MAX_ATTEMPTS, GuessSession, Word};
use crate::error::{GameError, Result};
use crate::profile::StatisticsTracker;
use crate::selection::{DailyWordSelector, WordPicker, daily};
use crate::storage::SharedStore;
use crate::wordlists::WordCatalog;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// The active round
#[derive(Debug)]
pub struct Round {
    session: GuessSession,
    mode: GameMode,
    category: Option<String>,
    timer: RoundTimer,
    recorded: bool,
}

impl Round {
    #[must_use]
    pub const fn session(&self) -> &GuessSession {
        &self.session
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// Category the word was drawn from; `None` for mixed and daily rounds
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// True once the result has been written to statistics
    #[must_use]
    pub const fn is_recorded(&self) -> bool {
        self.recorded
    }
}

/// Drives practice and daily rounds and feeds results into statistics
pub struct PlaySessionCoordinator<C: Clock = SystemClock, R: Rng = StdRng> {
    catalog: WordCatalog,
    picker: WordPicker,
    daily: DailyWordSelector,
    stats: StatisticsTracker,
    store: SharedStore,
    clock: C,
    rng: R,
    max_attempts: u8,
    round: Option<Round>,
}

impl PlaySessionCoordinator<SystemClock, StdRng> {
    /// Coordinator on the wall clock with an OS-seeded random source
    #[must_use]
    pub fn new(catalog: WordCatalog, store: SharedStore) -> Self {
        Self::with_parts(catalog, store, SystemClock, StdRng::from_os_rng())
    }
}

impl<C: Clock, R: Rng> PlaySessionCoordinator<C, R> {
    /// Coordinator with an explicit clock and random source
    #[must_use]
    pub fn with_parts(catalog: WordCatalog, store: SharedStore, clock: C, rng: R) -> Self {
        let stats = StatisticsTracker::load(store.clone());
        Self {
            catalog,
            picker: WordPicker::default(),
            daily: DailyWordSelector::new(),
            stats,
            store,
            clock,
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            round: None,
        }
    }

    /// Replace the picker policy (fallback word, mixed-category marker)
    #[must_use]
    pub fn with_picker(mut self, picker: WordPicker) -> Self {
        self.picker = picker;
        self
    }

    /// Change the wrong-guess budget for rounds started from now on
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u8) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Start a practice round
    ///
    /// The word is drawn at random from `category` (or from every category when
    /// `None` or the mixed marker) and is never today's daily word unless nothing
    /// else is available. The UI should play [`SoundEvent::Start`] on success.
    ///
    /// # Errors
    ///
    /// Returns `GameError::UnknownCategory` for an unknown category and
    /// `GameError::EmptyCatalog` when there are no words at all. The current round
    /// is kept on error.
    pub fn start_practice(&mut self, category: Option<&str>) -> Result<&Round> {
        let today = self.clock.today();
        let daily_word = self.daily.word_of_day(&self.catalog, today)?;
        let word = self
            .picker
            .pick(&self.catalog, category, Some(&daily_word), &mut self.rng)?;

        let category = category
            .filter(|c| !self.picker.is_mixed(Some(c)))
            .map(str::to_string);

        Ok(self.begin(word, GameMode::Practice, category))
    }

    /// Start today's daily round
    ///
    /// The day is marked as played as soon as the round starts, so quitting
    /// halfway does not allow a second attempt.
    ///
    /// # Errors
    ///
    /// Returns `GameError::AlreadyPlayedToday` if the daily round was already
    /// started on `today`, `GameError::EmptyCatalog` when there are no words, or a
    /// storage error if the played date cannot be saved.
    pub fn start_daily(&mut self, today: NaiveDate) -> Result<&Round> {
        if self.has_played_today(today) {
            return Err(GameError::AlreadyPlayedToday(today));
        }

        let word = self.daily.word_of_day(&self.catalog, today)?;
        daily::mark_played(&*self.store, today)?;

        Ok(self.begin(word, GameMode::Daily, None))
    }

    /// Start a new practice round in the same category as the current one
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoActiveRound` without a round,
    /// `GameError::UnsupportedInDailyMode` for a daily round, or any error from
    /// [`Self::start_practice`].
    pub fn restart(&mut self) -> Result<&Round> {
        let round = self.round.as_ref().ok_or(GameError::NoActiveRound)?;
        if round.mode == GameMode::Daily {
            return Err(GameError::UnsupportedInDailyMode);
        }

        let category = round.category.clone();
        self.start_practice(category.as_deref())
    }

    /// Forward one letter to the active round
    ///
    /// On the guess that ends the round the timer stops, the result is recorded in
    /// statistics exactly once, and the report carries a [`RoundSummary`].
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoActiveRound` without a round, or a storage error if the
    /// statistics cannot be saved.
    pub fn submit_guess(&mut self, letter: char) -> Result<GuessReport> {
        let round = self.round.as_mut().ok_or(GameError::NoActiveRound)?;
        let outcome = round.session.guess(letter);

        let mut summary = None;
        if outcome.status.is_terminal() && !round.recorded {
            let elapsed = round.timer.stop(&self.clock);
            round.recorded = true;

            let result = RoundSummary {
                word: round.session.word().text().to_string(),
                mode: round.mode,
                category: round.category.clone(),
                status: outcome.status,
                elapsed,
                attempts_used: round.session.attempts_used(),
                max_attempts: round.session.max_attempts(),
            };

            tracing::info!(
                mode = %result.mode,
                status = ?result.status,
                elapsed_secs = elapsed.as_secs(),
                "Round finished"
            );

            self.stats.record(result.won(), elapsed)?;
            summary = Some(result);
        }

        Ok(GuessReport {
            sounds: SoundEvent::for_outcome(&outcome),
            display: round.session.revealed_display(),
            remaining_attempts: round.session.remaining_attempts(),
            outcome,
            summary,
        })
    }

    /// Drop the active round without recording anything
    ///
    /// Returns true if a round was dropped.
    pub fn abandon(&mut self) -> bool {
        match self.round.take() {
            Some(round) => {
                if !round.session.is_terminal() {
                    tracing::debug!("Abandoned {} round in progress", round.mode);
                }
                true
            }
            None => false,
        }
    }

    fn begin(&mut self, word: Word, mode: GameMode, category: Option<String>) -> &Round {
        self.abandon();

        tracing::info!(%mode, category = category.as_deref().unwrap_or("*"), "Round started");

        self.round.insert(Round {
            session: GuessSession::with_max_attempts(word, self.max_attempts),
            mode,
            category,
            timer: RoundTimer::start(&self.clock),
            recorded: false,
        })
    }

    /// True if the daily round was already started on `today`
    #[must_use]
    pub fn has_played_today(&self, today: NaiveDate) -> bool {
        DailyWordSelector::has_played_today(daily::last_played(&*self.store), today)
    }

    /// Elapsed time of the active round (frozen once it ended)
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.round
            .as_ref()
            .map(|round| round.timer.elapsed(&self.clock))
    }

    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn session(&self) -> Option<&GuessSession> {
        self.round.as_ref().map(Round::session)
    }

    #[must_use]
    pub const fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn statistics(&self) -> &StatisticsTracker {
        &self.stats
    }

    /// Zero all statistics
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn reset_statistics(&mut self) -> Result<()> {
        self.stats.reset()
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }
}

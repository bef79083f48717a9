//! Play statistics
//!
//! Counters are updated once per finished round and written back to the store
//! straight away. Times are kept in whole seconds, the same resolution the round
//! timer reports.

use crate::error::Result;
use crate::storage::{SharedStore, keys, load_json, save_json};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Persisted counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Fastest win, in seconds
    pub best_time: Option<u64>,
    /// Sum of winning round times, in seconds
    pub total_time: u64,
}

impl Statistics {
    /// Apply one finished round
    pub fn record(&mut self, won: bool, elapsed: Duration) {
        self.games_played = self.games_played.saturating_add(1);

        if won {
            let secs = elapsed.as_secs();
            self.games_won = self.games_won.saturating_add(1);
            self.current_streak = self.current_streak.saturating_add(1);
            self.max_streak = self.max_streak.max(self.current_streak);
            self.total_time = self.total_time.saturating_add(secs);
            self.best_time = Some(self.best_time.map_or(secs, |best| best.min(secs)));
        } else {
            self.current_streak = 0;
        }
    }

    /// Restore the counter invariants on data read from storage
    fn sanitized(mut self) -> Self {
        if self.games_won > self.games_played {
            tracing::warn!(
                "Stored games won ({}) exceeds games played ({}), clamping",
                self.games_won,
                self.games_played
            );
            self.games_won = self.games_played;
        }
        self.current_streak = self.current_streak.min(self.games_won);
        self.max_streak = self.max_streak.max(self.current_streak);
        self
    }
}

/// Read-only view with derived values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub best_time: Option<Duration>,
    pub total_time: Duration,
    /// `round(100 * won / played)`, 0 before the first game
    pub win_percentage: u32,
    /// Mean winning time, `None` before the first win
    pub average_time: Option<Duration>,
}

impl From<&Statistics> for StatsSnapshot {
    fn from(stats: &Statistics) -> Self {
        let win_percentage = if stats.games_played == 0 {
            0
        } else {
            (100.0 * f64::from(stats.games_won) / f64::from(stats.games_played)).round() as u32
        };

        let average_time = (stats.games_won > 0)
            .then(|| Duration::from_secs(stats.total_time / u64::from(stats.games_won)));

        Self {
            games_played: stats.games_played,
            games_won: stats.games_won,
            current_streak: stats.current_streak,
            max_streak: stats.max_streak,
            best_time: stats.best_time.map(Duration::from_secs),
            total_time: Duration::from_secs(stats.total_time),
            win_percentage,
            average_time,
        }
    }
}

/// Statistics bound to a store
pub struct StatisticsTracker {
    store: SharedStore,
    stats: Statistics,
}

impl StatisticsTracker {
    /// Load statistics from the store (zeroes when absent or unreadable)
    #[must_use]
    pub fn load(store: SharedStore) -> Self {
        let stats = load_json::<Statistics>(&*store, keys::STATS)
            .map(Statistics::sanitized)
            .unwrap_or_default();

        Self { store, stats }
    }

    /// Record a finished round and persist
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written. The in-memory counters are
    /// updated either way.
    pub fn record(&mut self, won: bool, elapsed: Duration) -> Result<()> {
        self.stats.record(won, elapsed);
        tracing::info!(
            won,
            elapsed_secs = elapsed.as_secs(),
            played = self.stats.games_played,
            streak = self.stats.current_streak,
            "Recorded round"
        );
        self.save()
    }

    /// Zero every counter and persist
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn reset(&mut self) -> Result<()> {
        self.stats = Statistics::default();
        tracing::info!("Statistics reset");
        self.save()
    }

    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot::from(&self.stats)
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.stats
    }

    fn save(&self) -> Result<()> {
        save_json(&*self.store, keys::STATS, &self.stats)
    }
}

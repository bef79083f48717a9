//! Per-player data that outlives a round: statistics and preferences.

pub mod settings;
pub mod statistics;

pub use settings::{PreferenceKey, Settings, SettingsStore};
pub use statistics::{Statistics, StatisticsTracker, StatsSnapshot};

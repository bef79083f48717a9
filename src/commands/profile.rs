//! Statistics and settings commands

use crate::error::Result;
use crate::output::{print_settings, print_stats};
use crate::profile::{PreferenceKey, SettingsStore, StatisticsTracker};
use crate::storage::SharedStore;
use colored::Colorize;

/// Print statistics, optionally zeroing them first
///
/// # Errors
///
/// Returns an error if the reset cannot be saved.
pub fn run_stats(store: SharedStore, reset: bool) -> Result<()> {
    let mut tracker = StatisticsTracker::load(store);
    if reset {
        tracker.reset()?;
        println!("{}", "Statistics reset.".yellow());
    }
    print_stats(&tracker.snapshot());
    Ok(())
}

/// Show preferences, or change one
///
/// With a key and no value the preference is toggled.
///
/// # Errors
///
/// Returns an error if the change cannot be saved.
pub fn run_settings(
    store: SharedStore,
    key: Option<PreferenceKey>,
    value: Option<bool>,
) -> Result<()> {
    let mut settings = SettingsStore::load(store);

    if let Some(key) = key {
        let new_value = match value {
            Some(value) => {
                settings.set(key, value)?;
                value
            }
            None => settings.toggle(key)?,
        };
        println!(
            "{} {}",
            format!("{key} =").bright_cyan(),
            if new_value { "on" } else { "off" }
        );
    }

    print_settings(settings.settings());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::time::Duration;

    #[test]
    fn stats_reset_clears_store() {
        let store = MemoryStore::shared();
        StatisticsTracker::load(store.clone())
            .record(true, Duration::from_secs(9))
            .unwrap();

        run_stats(store.clone(), true).unwrap();
        assert_eq!(StatisticsTracker::load(store).statistics().games_played, 0);
    }

    #[test]
    fn settings_toggle_without_value() {
        let store = MemoryStore::shared();
        run_settings(store.clone(), Some(PreferenceKey::SoundEffects), None).unwrap();
        assert!(!SettingsStore::load(store.clone()).get(PreferenceKey::SoundEffects));

        run_settings(store.clone(), Some(PreferenceKey::SoundEffects), Some(false)).unwrap();
        assert!(!SettingsStore::load(store).get(PreferenceKey::SoundEffects));
    }
}

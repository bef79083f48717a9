//! Player preferences

use crate::error::Result;
use crate::storage::{SharedStore, keys, load_json, save_json};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Boolean preference names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum PreferenceKey {
    DarkMode,
    SoundEffects,
}

impl PreferenceKey {
    pub const ALL: [Self; 2] = [Self::DarkMode, Self::SoundEffects];

    /// Name used in the persisted JSON object
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DarkMode => "darkMode",
            Self::SoundEffects => "soundEffects",
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted preference values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub dark_mode: bool,
    pub sound_effects: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            sound_effects: true,
        }
    }
}

impl Settings {
    #[must_use]
    pub const fn get(&self, key: PreferenceKey) -> bool {
        match key {
            PreferenceKey::DarkMode => self.dark_mode,
            PreferenceKey::SoundEffects => self.sound_effects,
        }
    }

    pub const fn set(&mut self, key: PreferenceKey, value: bool) {
        match key {
            PreferenceKey::DarkMode => self.dark_mode = value,
            PreferenceKey::SoundEffects => self.sound_effects = value,
        }
    }
}

/// Preferences bound to a store; every change is written through
pub struct SettingsStore {
    store: SharedStore,
    settings: Settings,
}

impl SettingsStore {
    #[must_use]
    pub fn load(store: SharedStore) -> Self {
        let settings = load_json(&*store, keys::SETTINGS).unwrap_or_default();
        Self { store, settings }
    }

    #[must_use]
    pub const fn get(&self, key: PreferenceKey) -> bool {
        self.settings.get(key)
    }

    /// Change one preference and persist
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn set(&mut self, key: PreferenceKey, value: bool) -> Result<()> {
        self.settings.set(key, value);
        tracing::debug!("Preference {key} set to {value}");
        save_json(&*self.store, keys::SETTINGS, &self.settings)
    }

    /// Flip one preference and persist, returning the new value
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn toggle(&mut self, key: PreferenceKey) -> Result<bool> {
        let value = !self.get(key);
        self.set(key, value)?;
        Ok(value)
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }
}

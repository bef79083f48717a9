//! Runtime configuration
//!
//! Values come from the environment first; command-line flags override them.
use crate::core::DEFAULT_MAX_ATTEMPTS;
use crate::error::Result;
use crate::storage::{FileStore, SharedStore};
use crate::wordlists::{WordCatalog, embedded_catalog, loader};
use std::path::PathBuf;
use std::rc::Rc;

const APP_NAME: &str = "hangman_armenian";

/// Where data lives and how rounds are played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding `store.json`.
    pub data_dir: PathBuf,
    /// Custom word list; the embedded vocabulary is used when `None`.
    pub wordlist: Option<PathBuf>,
    /// Wrong guesses allowed per round.
    pub max_attempts: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            wordlist: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl AppConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HANGMAN_DATA_DIR` - directory for saved statistics and settings
    /// - `HANGMAN_WORDLIST` - path to a custom word list
    /// - `HANGMAN_MAX_ATTEMPTS` - wrong guesses per round (default: 6, minimum 1)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("HANGMAN_DATA_DIR").filter(|d| !d.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(path) = lookup("HANGMAN_WORDLIST").filter(|p| !p.is_empty()) {
            config.wordlist = Some(PathBuf::from(path));
        }
        if let Some(attempts) = lookup("HANGMAN_MAX_ATTEMPTS").and_then(|v| v.parse::<u8>().ok())
        {
            config.max_attempts = attempts.max(1);
        }

        config
    }

    /// Apply command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, wordlist: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if wordlist.is_some() {
            self.wordlist = wordlist;
        }
        self
    }

    /// Load the configured catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the custom word list cannot be read or parsed.
    pub fn load_catalog(&self) -> Result<WordCatalog> {
        match &self.wordlist {
            Some(path) => {
                tracing::info!("Loading word list from {}", path.display());
                loader::load_from_file(path)
            }
            None => Ok(embedded_catalog()),
        }
    }

    /// Open the file-backed store in the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open_store(&self) -> Result<SharedStore> {
        let store = FileStore::open(&self.data_dir)?;
        tracing::debug!("Using store at {}", store.path().display());
        Ok(Rc::new(store))
    }
}

/// Platform data directory, or `./save_data` when none can be determined.
///
/// - macOS: `~/Library/Application Support/hangman_armenian`
/// - Linux: `~/.local/share/hangman_armenian` (or `$XDG_DATA_HOME/hangman_armenian`)
/// - Windows: `%APPDATA%\hangman_armenian`
#[must_use]
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map_or_else(|| PathBuf::from("./save_data"), |dirs| dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::KeyValueStore;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert!(config.wordlist.is_none());
        assert_eq!(config.data_dir, default_data_dir());
    }

    #[test]
    fn env_values_are_read() {
        let config = AppConfig::from_lookup(lookup(&[
            ("HANGMAN_DATA_DIR", "/tmp/hangman"),
            ("HANGMAN_WORDLIST", "words.txt"),
            ("HANGMAN_MAX_ATTEMPTS", "8"),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/hangman"));
        assert_eq!(config.wordlist, Some(PathBuf::from("words.txt")));
        assert_eq!(config.max_attempts, 8);
    }

    #[test]
    fn bad_attempts_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[("HANGMAN_MAX_ATTEMPTS", "lots")]));
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);

        let config = AppConfig::from_lookup(lookup(&[("HANGMAN_MAX_ATTEMPTS", "0")]));
        assert_eq!(config.max_attempts, 1);
    }

    #[test]
    fn flags_override_env() {
        let config = AppConfig::from_lookup(lookup(&[("HANGMAN_DATA_DIR", "/env")]))
            .with_overrides(Some(PathBuf::from("/flag")), None);
        assert_eq!(config.data_dir, PathBuf::from("/flag"));
        assert!(config.wordlist.is_none());
    }

    #[test]
    fn embedded_catalog_by_default() {
        let catalog = AppConfig::default().load_catalog().unwrap();
        assert_eq!(catalog.len(), crate::wordlists::WORD_COUNT);
    }

    #[test]
    fn store_opens_in_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: dir.path().join("nested"),
            ..AppConfig::default()
        };
        let store = config.open_store().unwrap();
        store.set("k", "v").unwrap();
        assert!(dir.path().join("nested").join("store.json").exists());
    }
}

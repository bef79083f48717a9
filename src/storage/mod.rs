//! Key-value persistence
//!
//! The game keeps three flat blobs between runs: settings, statistics and the date the
//! daily challenge was last played. Everything goes through [`KeyValueStore`], the
//! equivalent of browser local storage, so the core never knows where data lives.

mod file;

pub use file::FileStore;

use crate::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Storage keys
pub mod keys {
    /// JSON settings object (`darkMode`, `soundEffects`)
    pub const SETTINGS: &str = "hangman_settings";
    /// JSON statistics object
    pub const STATS: &str = "hangman_stats";
    /// ISO date (`YYYY-MM-DD`) the daily challenge was last started
    pub const DAILY_LAST_PLAYED: &str = "hangman_daily_last_played";
}

/// String-to-string store with local-storage semantics
///
/// Methods take `&self`: a store is shared by the statistics tracker, the settings and
/// the coordinator on a single thread.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the value could not be persisted.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the removal could not be persisted.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Store handle shared between collaborators
pub type SharedStore = Rc<dyn KeyValueStore>;

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Read and decode a JSON value
///
/// A missing key gives `None`. A value that fails to decode is logged and also gives
/// `None`, so a corrupt blob falls back to defaults instead of blocking the game.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring unreadable value for {key}: {e}");
            None
        }
    }
}

/// Encode a value as JSON and store it
///
/// # Errors
///
/// Returns an error if encoding or the underlying write fails.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// In-memory store, used for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor returning a shared handle
    #[must_use]
    pub fn shared() -> SharedStore {
        Rc::new(Self::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        count: u32,
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));

        store.remove("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn shared_handle_sees_writes() {
        let store = MemoryStore::shared();
        let other = Rc::clone(&store);
        store.set("k", "1").unwrap();
        assert_eq!(other.get("k").as_deref(), Some("1"));
    }

    #[test]
    fn json_helpers() {
        let store = MemoryStore::new();
        save_json(&store, "sample", &Sample { count: 3 }).unwrap();
        assert_eq!(load_json::<Sample>(&store, "sample"), Some(Sample { count: 3 }));
        assert_eq!(load_json::<Sample>(&store, "missing"), None);
    }

    #[test]
    fn corrupt_json_is_treated_as_missing() {
        let store = MemoryStore::new();
        store.set("sample", "{not json").unwrap();
        assert_eq!(load_json::<Sample>(&store, "sample"), None);
    }
}

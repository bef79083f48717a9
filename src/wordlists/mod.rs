//! Word lists for the hangman game
//!
//! Provides the categorized catalog type, the embedded Western Armenian vocabulary
//! and a loader for custom lists.

mod catalog;
mod embedded;
pub mod loader;

pub use catalog::{Category, WordCatalog};
pub use embedded::{CATEGORIES, WORD_COUNT};

/// Build a catalog from the embedded vocabulary
#[must_use]
pub fn embedded_catalog() -> WordCatalog {
    WordCatalog::from_categories(
        CATEGORIES
            .iter()
            .map(|&(name, words)| (name, loader::words_from_slice(words))),
    )
}

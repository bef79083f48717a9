//! Random word selection for practice rounds

use crate::core::Word;
use crate::error::Result;
use crate::wordlists::WordCatalog;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Category marker meaning "draw from every category" ("mixed")
pub const MIXED_CATEGORY: &str = "Խառն";

/// Word returned when exclusion empties the candidate pool ("toy")
pub const FALLBACK_WORD: &str = "խաղալիք";

/// Picker policy
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// Returned when no candidate is left after exclusion
    pub fallback_word: Word,
    /// Category name treated the same as "no category"
    pub mixed_category: String,
}

impl Default for PickerConfig {
    /// # Panics
    /// Will not panic - `FALLBACK_WORD` is a constant made only of letters.
    fn default() -> Self {
        Self {
            fallback_word: Word::new(FALLBACK_WORD).expect("fallback word is made of letters"),
            mixed_category: MIXED_CATEGORY.to_string(),
        }
    }
}

/// Uniform random word selection with a single excluded word
#[derive(Debug, Clone, Default)]
pub struct WordPicker {
    config: PickerConfig,
}

impl WordPicker {
    #[must_use]
    pub const fn new(config: PickerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// True for `None` and for the mixed-category marker
    #[must_use]
    pub fn is_mixed(&self, category: Option<&str>) -> bool {
        category.is_none_or(|c| c == self.config.mixed_category)
    }

    /// Pick a word
    ///
    /// The pool is the named category, or every word when `category` is `None` or the
    /// mixed marker. `exclude` is removed from the pool by value. An empty pool yields
    /// the configured fallback word.
    ///
    /// # Errors
    ///
    /// Returns `GameError::UnknownCategory` if a category other than the mixed
    /// marker is named and the catalog does not have it.
    pub fn pick<R: Rng + ?Sized>(
        &self,
        catalog: &WordCatalog,
        category: Option<&str>,
        exclude: Option<&Word>,
        rng: &mut R,
    ) -> Result<Word> {
        let candidates: Vec<&Word> = match category {
            Some(name) if !self.is_mixed(Some(name)) => catalog
                .words_in(name)?
                .iter()
                .filter(|w| Some(*w) != exclude)
                .collect(),
            _ => catalog.all_words().filter(|w| Some(*w) != exclude).collect(),
        };

        if let Some(word) = candidates.choose(rng) {
            tracing::debug!("Picked from {} candidates", candidates.len());
            return Ok((*word).clone());
        }

        tracing::warn!(
            "All words filtered out, using fallback word {}",
            self.config.fallback_word
        );
        Ok(self.config.fallback_word.clone())
    }
}

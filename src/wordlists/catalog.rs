//! Categorized word catalog
//!
//! Categories keep the order they were added in, and words keep their order within a
//! category. `all_words()` relies on both so that index-based daily selection gives
//! the same word on every machine with the same catalog.

use crate::core::{Alphabet, SPACE, Word};
use crate::error::{GameError, Result};

/// A named group of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    words: Vec<Word>,
}

impl Category {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

/// Immutable collection of categorized words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCatalog {
    categories: Vec<Category>,
}

impl WordCatalog {
    /// Build a catalog from `(category, words)` pairs
    ///
    /// A category name that appears twice is merged into its first occurrence.
    pub fn from_categories<N, I>(entries: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Vec<Word>)>,
    {
        let mut categories: Vec<Category> = Vec::new();

        for (name, words) in entries {
            let name = name.into();
            if let Some(existing) = categories.iter_mut().find(|c| c.name == name) {
                existing.words.extend(words);
            } else {
                categories.push(Category { name, words });
            }
        }

        Self { categories }
    }

    /// Category names in catalog order
    ///
    /// The iterator is cheap to clone, so callers can restart it.
    pub fn categories(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.categories.iter().map(Category::name)
    }

    /// Full category records in catalog order
    #[must_use]
    pub fn category_entries(&self) -> &[Category] {
        &self.categories
    }

    /// Words of one category
    ///
    /// # Errors
    ///
    /// Returns `GameError::UnknownCategory` if no category has that name.
    pub fn words_in(&self, category: &str) -> Result<&[Word]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(Category::words)
            .ok_or_else(|| GameError::UnknownCategory(category.to_string()))
    }

    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c.name == category)
    }

    /// Every word, category by category
    pub fn all_words(&self) -> impl Iterator<Item = &Word> + Clone + '_ {
        self.categories.iter().flat_map(|c| c.words.iter())
    }

    /// The word at a position of `all_words()`
    #[must_use]
    pub fn word_at(&self, mut index: usize) -> Option<&Word> {
        for category in &self.categories {
            if index < category.words.len() {
                return Some(&category.words[index]);
            }
            index -= category.words.len();
        }
        None
    }

    /// Total number of words across categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.words.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|c| c.words.is_empty())
    }

    /// First category containing the word
    #[must_use]
    pub fn category_of(&self, word: &Word) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.words.contains(word))
            .map(Category::name)
    }

    /// Check that every word is spelled with letters from `alphabet`
    ///
    /// # Errors
    ///
    /// Returns `GameError::ForeignLetter` for the first offending word.
    pub fn validate(&self, alphabet: &Alphabet) -> Result<()> {
        for word in self.all_words() {
            if let Some(&letter) = word
                .chars()
                .iter()
                .find(|&&c| c != SPACE && !alphabet.contains(c))
            {
                return Err(GameError::ForeignLetter {
                    word: word.text().to_string(),
                    letter,
                    alphabet: alphabet.name(),
                });
            }
        }
        Ok(())
    }

    /// Keyboard alphabet for this catalog: Armenian when every word fits, else Latin
    #[must_use]
    pub fn alphabet(&self) -> Alphabet {
        let armenian = Alphabet::armenian();
        if self.validate(&armenian).is_ok() {
            armenian
        } else {
            Alphabet::latin()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn sample() -> WordCatalog {
        WordCatalog::from_categories([
            ("animals", words_from_slice(&["cat", "dog", "owl"])),
            ("food", words_from_slice(&["rice", "tea"])),
        ])
    }

    #[test]
    fn alphabet_follows_the_words() {
        assert_eq!(sample().alphabet().name(), "latin");
        let armenian =
            WordCatalog::from_categories([("Կենդանիներ", words_from_slice(&["կատու"]))]);
        assert_eq!(armenian.alphabet().name(), "armenian");
    }

    #[test]
    fn categories_keep_insertion_order() {
        let catalog = sample();
        let names = catalog.categories();
        assert_eq!(names.clone().collect::<Vec<_>>(), vec!["animals", "food"]);
        // Restartable
        assert_eq!(names.count(), 2);
    }

    #[test]
    fn words_in_known_category() {
        let catalog = sample();
        let food: Vec<&str> = catalog
            .words_in("food")
            .unwrap()
            .iter()
            .map(Word::text)
            .collect();
        assert_eq!(food, vec!["rice", "tea"]);
    }

    #[test]
    fn words_in_unknown_category() {
        let catalog = sample();
        assert!(matches!(
            catalog.words_in("colors"),
            Err(GameError::UnknownCategory(name)) if name == "colors"
        ));
    }

    #[test]
    fn all_words_are_category_then_word_ordered() {
        let catalog = sample();
        let all: Vec<&str> = catalog.all_words().map(Word::text).collect();
        assert_eq!(all, vec!["cat", "dog", "owl", "rice", "tea"]);
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn word_at_matches_all_words() {
        let catalog = sample();
        for (i, word) in catalog.all_words().enumerate() {
            assert_eq!(catalog.word_at(i), Some(word));
        }
        assert_eq!(catalog.word_at(5), None);
    }

    #[test]
    fn duplicate_category_names_merge() {
        let catalog = WordCatalog::from_categories([
            ("a", words_from_slice(&["one"])),
            ("b", words_from_slice(&["two"])),
            ("a", words_from_slice(&["three"])),
        ]);
        assert_eq!(catalog.categories().count(), 2);
        assert_eq!(catalog.words_in("a").unwrap().len(), 2);
    }

    #[test]
    fn empty_catalog() {
        let catalog = WordCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);

        let hollow = WordCatalog::from_categories([("empty", Vec::new())]);
        assert!(hollow.is_empty());
        assert!(hollow.has_category("empty"));
    }

    #[test]
    fn category_of_finds_owner() {
        let catalog = sample();
        let tea = Word::new("tea").unwrap();
        assert_eq!(catalog.category_of(&tea), Some("food"));
    }

    #[test]
    fn validate_reports_foreign_letters() {
        let catalog = WordCatalog::from_categories([("mixed", words_from_slice(&["cat", "կատու"]))]);
        assert!(matches!(
            catalog.validate(&Alphabet::latin()),
            Err(GameError::ForeignLetter { letter: 'կ', .. })
        ));
        assert!(sample().validate(&Alphabet::latin()).is_ok());
    }
}

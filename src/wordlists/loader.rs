//! Word list loading utilities
//!
//! Provides functions to load categorized word lists from files or build them from
//! embedded constants.
//!
//! File format:
//!
//! ```text
//! # comment
//! [Animals]
//! cat      # trailing comments are fine
//! dog
//!
//! [Food]
//! rice
//! ```

use super::WordCatalog;
use crate::core::Word;
use crate::error::{GameError, Result};
use std::fs;
use std::path::Path;

/// Parse a categorized word list
///
/// # Errors
///
/// Returns `GameError::CatalogFormat` when a word appears before the first
/// `[category]` header, a header is empty, or a word is not made of letters.
///
/// # Examples
/// ```
/// use hangman_armenian::wordlists::loader::parse_catalog;
///
/// let catalog = parse_catalog("[Animals]\ncat\ndog\n").unwrap();
/// assert_eq!(catalog.len(), 2);
/// ```
pub fn parse_catalog(content: &str) -> Result<WordCatalog> {
    let mut entries: Vec<(String, Vec<Word>)> = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let name = name.trim();
            if name.is_empty() {
                return Err(GameError::CatalogFormat {
                    line: line_number,
                    message: "empty category name".to_string(),
                });
            }
            entries.push((name.to_string(), Vec::new()));
            continue;
        }

        let Some((_, words)) = entries.last_mut() else {
            return Err(GameError::CatalogFormat {
                line: line_number,
                message: format!("word {line:?} appears before any [category] header"),
            });
        };

        let word = Word::new(line).map_err(|e| GameError::CatalogFormat {
            line: line_number,
            message: e.to_string(),
        })?;
        words.push(word);
    }

    Ok(WordCatalog::from_categories(entries))
}

/// Load a categorized word list from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or a format error from
/// [`parse_catalog`].
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordCatalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let catalog = parse_catalog(&content)?;

    tracing::debug!(
        "Loaded {} words in {} categories from {}",
        catalog.len(),
        catalog.categories().count(),
        path.display()
    );

    Ok(catalog)
}

/// Convert embedded string slice to Word vector
///
/// Invalid entries are skipped.
///
/// # Examples
/// ```
/// use hangman_armenian::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "d0g", "owl"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| match Word::new(s) {
            Ok(word) => Some(word),
            Err(e) => {
                tracing::warn!("Skipping invalid word {s:?}: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["cat", "Dog", "owl"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "dog");
        assert_eq!(words[2].text(), "owl");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["cat", "", "c4t", "owl"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "owl");
    }

    #[test]
    fn parse_sections_and_comments() {
        let text = "# header comment\n\n[Animals]\ncat   # feline\ndog\n\n[Food]\nrice\n";
        let catalog = parse_catalog(text).unwrap();

        assert_eq!(
            catalog.categories().collect::<Vec<_>>(),
            vec!["Animals", "Food"]
        );
        assert_eq!(catalog.words_in("Animals").unwrap().len(), 2);
        assert_eq!(catalog.words_in("Food").unwrap()[0].text(), "rice");
    }

    #[test]
    fn parse_allows_phrases() {
        let catalog = parse_catalog("[Phrases]\nice cream\n").unwrap();
        assert_eq!(catalog.words_in("Phrases").unwrap()[0].text(), "ice cream");
    }

    #[test]
    fn parse_rejects_word_without_category() {
        let err = parse_catalog("cat\n[Animals]\n").unwrap_err();
        assert!(matches!(err, GameError::CatalogFormat { line: 1, .. }));
    }

    #[test]
    fn parse_rejects_invalid_word() {
        let err = parse_catalog("[Animals]\ncat\nd0g\n").unwrap_err();
        assert!(matches!(err, GameError::CatalogFormat { line: 3, .. }));
    }

    #[test]
    fn parse_rejects_empty_header() {
        assert!(parse_catalog("[  ]\ncat\n").is_err());
    }

    #[test]
    fn load_from_file_reads_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[Ընտանիք]\nմայր\nհայր").unwrap();

        let catalog = load_from_file(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.has_category("Ընտանիք"));
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_file(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, GameError::Io(_)));
    }
}

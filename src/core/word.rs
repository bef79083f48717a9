//! Hangman word representation
//!
//! A Word stores the case-folded target text together with letter position indices
//! so that guesses can be checked and revealed without rescanning the text.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Separator allowed inside multi-word phrases. Always shown, never guessed.
pub const SPACE: char = ' ';

/// A target word (or short phrase) for one round
///
/// Letters are stored case-folded; spaces are kept in place but never indexed as
/// guessable letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<char>,
    letter_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must contain at least one letter")]
    Empty,
    #[error("word contains a character that is not a letter: {0:?}")]
    InvalidCharacter(char),
}

/// Case-fold a single guessed letter
///
/// Works for any script with case (Armenian `Ա` folds to `ա`, Latin `C` to `c`).
#[inline]
#[must_use]
pub fn normalize_letter(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Leading and trailing whitespace is trimmed and every letter is case-folded
    /// with [`normalize_letter`], the same rule applied to guesses.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - No letters remain after trimming
    /// - Any character is neither alphabetic nor a space
    ///
    /// # Examples
    /// ```
    /// use hangman_armenian::core::Word;
    ///
    /// let word = Word::new("Կատու").unwrap();
    /// assert_eq!(word.text(), "կատու");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c4t").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text: String = text.as_ref().trim().chars().map(normalize_letter).collect();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text
            .chars()
            .find(|&c| c != SPACE && !c.is_alphabetic())
        {
            return Err(WordError::InvalidCharacter(bad));
        }

        let chars: Vec<char> = text.chars().collect();

        // Build position map for fast lookup
        let mut letter_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            if ch != SPACE {
                letter_positions.entry(ch).or_default().push(i);
            }
        }

        Ok(Self {
            text,
            chars,
            letter_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as characters, spaces included
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of character positions, spaces included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Check if the word contains a specific (already normalized) letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Iterate over the distinct guessable letters in the word
    pub fn distinct_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letter_positions.keys().copied()
    }

    /// Number of distinct guessable letters
    #[inline]
    #[must_use]
    pub fn distinct_letter_count(&self) -> usize {
        self.letter_positions.len()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("cat").unwrap();
        assert_eq!(word.text(), "cat");
        assert_eq!(word.chars(), &['c', 'a', 't']);
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn word_creation_case_folded() {
        let word = Word::new("CaT").unwrap();
        assert_eq!(word.text(), "cat");

        let armenian = Word::new("ՇՈՒՆ").unwrap();
        assert_eq!(armenian.text(), "շուն");
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = Word::new("  lion \n").unwrap();
        assert_eq!(word.text(), "lion");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("c4t"), Err(WordError::InvalidCharacter('4')));
        assert!(Word::new("cat!").is_err());
        assert!(Word::new("ca-t").is_err());
    }

    #[test]
    fn phrase_keeps_spaces_out_of_letters() {
        let word = Word::new("ice cream").unwrap();
        assert_eq!(word.len(), 9);
        assert!(!word.has_letter(SPACE));
        assert_eq!(word.positions_of(SPACE), &[] as &[usize]);
        assert_eq!(word.positions_of('c'), &[1, 4]);
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("կատու").unwrap();
        assert!(word.has_letter('կ'));
        assert!(word.has_letter('ո'));
        assert!(!word.has_letter('շ'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("banana").unwrap();
        assert_eq!(word.positions_of('a'), &[1, 3, 5]);
        assert_eq!(word.positions_of('n'), &[2, 4]);
        assert_eq!(word.positions_of('b'), &[0]);
        assert_eq!(word.distinct_letter_count(), 3);
    }

    #[test]
    fn normalize_letter_folds_case() {
        assert_eq!(normalize_letter('A'), 'a');
        assert_eq!(normalize_letter('a'), 'a');
        assert_eq!(normalize_letter('Ք'), 'ք');
        assert_eq!(normalize_letter('և'), 'և');
    }

    #[test]
    fn word_display() {
        let word = Word::new("Մայր").unwrap();
        assert_eq!(format!("{word}"), "մայր");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("cat").unwrap();
        let word2 = Word::new("CAT").unwrap();
        let word3 = Word::new("dog").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}

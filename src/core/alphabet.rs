//! Guessable alphabets
//!
//! The game itself accepts any letter; an alphabet only decides which keys the
//! on-screen keyboard shows and which letters a word list may contain.

use super::word::normalize_letter;
use rustc_hash::FxHashSet;

/// Western Armenian letters in keyboard order (`ա` through `ֆ`, then the `և` ligature)
const ARMENIAN: &str = "աբգդեզէըթժիլխծկհձղճմյնշոչպջռսվտրցւփքօֆև";

const LATIN: &str = "abcdefghijklmnopqrstuvwxyz";

/// An ordered set of lowercase letters
#[derive(Debug, Clone)]
pub struct Alphabet {
    name: &'static str,
    letters: Vec<char>,
    lookup: FxHashSet<char>,
}

impl Alphabet {
    /// Build an alphabet from a string of letters (case-folded, duplicates dropped)
    #[must_use]
    pub fn new(name: &'static str, letters: &str) -> Self {
        let mut lookup = FxHashSet::default();
        let letters = letters
            .chars()
            .map(normalize_letter)
            .filter(|c| lookup.insert(*c))
            .collect();

        Self {
            name,
            letters,
            lookup,
        }
    }

    /// The 39-letter Western Armenian alphabet used by the embedded word list
    #[must_use]
    pub fn armenian() -> Self {
        Self::new("armenian", ARMENIAN)
    }

    /// Basic Latin, handy for test catalogs
    #[must_use]
    pub fn latin() -> Self {
        Self::new("latin", LATIN)
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check membership after case folding
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.lookup.contains(&normalize_letter(letter))
    }

    /// Split the letters into keyboard rows of at most `width` keys
    pub fn rows(&self, width: usize) -> impl Iterator<Item = &[char]> {
        self.letters.chunks(width.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armenian_has_thirty_nine_letters() {
        let alphabet = Alphabet::armenian();
        assert_eq!(alphabet.len(), 39);
        assert_eq!(alphabet.letters()[0], 'ա');
        assert_eq!(alphabet.letters()[38], 'և');
    }

    #[test]
    fn contains_is_case_insensitive() {
        let alphabet = Alphabet::armenian();
        assert!(alphabet.contains('Ա'));
        assert!(alphabet.contains('ֆ'));
        assert!(!alphabet.contains('a'));

        let latin = Alphabet::latin();
        assert!(latin.contains('Q'));
        assert!(!latin.contains('ա'));
    }

    #[test]
    fn duplicates_are_dropped() {
        let alphabet = Alphabet::new("tiny", "aAbBa");
        assert_eq!(alphabet.letters(), &['a', 'b']);
    }

    #[test]
    fn rows_split_evenly() {
        let alphabet = Alphabet::latin();
        let rows: Vec<_> = alphabet.rows(10).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].len(), 6);
    }
}

//! Letter-guessing strategies used to auto-play rounds
//!
//! A strategy sees only what a player sees: the board, the guessed letters and
//! the pool of words the target could be drawn from.

use crate::core::{Alphabet, GuessSession, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// Picks the next letter to guess
pub trait LetterStrategy {
    /// Next letter, or `None` when the strategy has nothing left to try
    fn next_letter(&self, session: &GuessSession, candidates: &[&Word]) -> Option<char>;
}

/// Enum wrapper so the strategy can be chosen at runtime
pub enum StrategyType {
    /// Most common letter among the remaining candidates
    Frequency(FrequencyStrategy),
    /// Letters in alphabet order, ignoring the board
    Alphabetical(AlphabeticalStrategy),
}

impl LetterStrategy for StrategyType {
    fn next_letter(&self, session: &GuessSession, candidates: &[&Word]) -> Option<char> {
        match self {
            Self::Frequency(s) => s.next_letter(session, candidates),
            Self::Alphabetical(s) => s.next_letter(session, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "alphabetical". Defaults to frequency.
    #[must_use]
    pub fn from_name(name: &str, alphabet: Alphabet) -> Self {
        match name {
            "alphabetical" | "abc" => Self::Alphabetical(AlphabeticalStrategy::new(alphabet)),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }
}

/// Check whether `candidate` could be the hidden word given the board
///
/// Revealed cells must match, and no blank cell may hold a letter that was
/// already guessed (it would have been revealed).
#[must_use]
pub fn matches_board(candidate: &Word, session: &GuessSession) -> bool {
    let revealed = session.revealed();
    if candidate.chars().len() != revealed.len() {
        return false;
    }

    candidate
        .chars()
        .iter()
        .zip(&revealed)
        .all(|(&c, cell)| match cell {
            Some(shown) => c == *shown,
            None => !session.is_guessed(c),
        })
}

/// Words from `pool` still consistent with the board
#[must_use]
pub fn filter_candidates<'a>(pool: &[&'a Word], session: &GuessSession) -> Vec<&'a Word> {
    pool.iter()
        .copied()
        .filter(|w| matches_board(w, session))
        .collect()
}

/// Number of words containing each letter (each word counts a letter once)
#[must_use]
pub fn letter_frequencies(words: &[&Word]) -> FxHashMap<char, usize> {
    words
        .par_iter()
        .fold(FxHashMap::default, |mut counts, word| {
            for letter in word.distinct_letters() {
                *counts.entry(letter).or_insert(0) += 1;
            }
            counts
        })
        .reduce(FxHashMap::default, |mut a, b| {
            for (letter, count) in b {
                *a.entry(letter).or_insert(0) += count;
            }
            a
        })
}

/// Guess the unguessed letter found in the most candidates
///
/// Ties go to the lower code point so results are reproducible.
pub struct FrequencyStrategy;

impl LetterStrategy for FrequencyStrategy {
    fn next_letter(&self, session: &GuessSession, candidates: &[&Word]) -> Option<char> {
        letter_frequencies(candidates)
            .into_iter()
            .filter(|&(letter, _)| !session.is_guessed(letter))
            .max_by_key(|&(letter, count)| (count, Reverse(letter)))
            .map(|(letter, _)| letter)
    }
}

/// Walk the alphabet from the start
pub struct AlphabeticalStrategy {
    alphabet: Alphabet,
}

impl AlphabeticalStrategy {
    #[must_use]
    pub const fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }
}

impl LetterStrategy for AlphabeticalStrategy {
    fn next_letter(&self, session: &GuessSession, _candidates: &[&Word]) -> Option<char> {
        self.alphabet
            .letters()
            .iter()
            .copied()
            .find(|&letter| !session.is_guessed(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn board_filters_candidates() {
        let pool = words_from_slice(&["cat", "cot", "dog", "cart"]);
        let refs: Vec<&Word> = pool.iter().collect();

        let mut session = GuessSession::new(Word::new("cat").unwrap());
        session.guess('c');
        session.guess('o');

        let remaining: Vec<&str> = filter_candidates(&refs, &session)
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(remaining, vec!["cat"]);
    }

    #[test]
    fn blank_cells_exclude_guessed_letters() {
        let mut session = GuessSession::new(Word::new("tat").unwrap());
        session.guess('t');
        // "tot" would need 'o' unguessed; "ttt" would have shown every t
        assert!(matches_board(&Word::new("tot").unwrap(), &session));
        assert!(!matches_board(&Word::new("ttt").unwrap(), &session));
    }

    #[test]
    fn frequencies_count_words_not_occurrences() {
        let pool = words_from_slice(&["lala", "lid"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let counts = letter_frequencies(&refs);
        assert_eq!(counts[&'l'], 2);
        assert_eq!(counts[&'a'], 1);
    }

    #[test]
    fn frequency_picks_most_common_unguessed() {
        let pool = words_from_slice(&["bat", "cat", "hat", "dog"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let mut session = GuessSession::new(Word::new("cat").unwrap());

        assert_eq!(FrequencyStrategy.next_letter(&session, &refs), Some('a'));
        session.guess('a');
        session.guess('t');
        let candidates = filter_candidates(&refs, &session);
        // b, c, h tie on one word each; lowest code point wins
        assert_eq!(FrequencyStrategy.next_letter(&session, &candidates), Some('b'));
    }

    #[test]
    fn alphabetical_skips_guessed() {
        let strategy = AlphabeticalStrategy::new(Alphabet::latin());
        let mut session = GuessSession::new(Word::new("cab").unwrap());
        session.guess('a');
        assert_eq!(strategy.next_letter(&session, &[]), Some('b'));
    }

    #[test]
    fn strategy_from_name() {
        assert!(matches!(
            StrategyType::from_name("alphabetical", Alphabet::latin()),
            StrategyType::Alphabetical(_)
        ));
        assert!(matches!(
            StrategyType::from_name("anything", Alphabet::latin()),
            StrategyType::Frequency(_)
        ));
    }
}

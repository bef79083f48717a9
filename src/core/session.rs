//! Guess session state machine
//!
//! One `GuessSession` is one round of hangman: a fixed target word, the set of
//! letters guessed so far and a countdown of allowed wrong guesses.
//!
//! ```text
//!              correct guess completes word
//!   InProgress ─────────────────────────────▶ Won
//!       │
//!       │ wrong guess drops attempts to 0
//!       └───────────────────────────────────▶ Lost
//! ```
//!
//! Terminal states never change again; guesses made after the round ended are
//! ignored rather than rejected.

use super::word::{SPACE, Word, normalize_letter};
use rustc_hash::FxHashSet;

/// Wrong guesses allowed per round; one per figure part (head, body, two arms, two legs)
pub const DEFAULT_MAX_ATTEMPTS: u8 = 6;

/// Marker shown for letters that have not been revealed yet
pub const PLACEHOLDER: char = '_';

/// Round status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// How a single guess was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessKind {
    /// New letter that occurs in the word
    Correct,
    /// New letter that does not occur in the word; one attempt consumed
    Wrong,
    /// Letter was already guessed; nothing changed
    Repeated,
    /// Round already over, or the input was whitespace; nothing changed
    Ignored,
}

/// Result of [`GuessSession::guess`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// The normalized letter that was evaluated
    pub letter: char,
    pub kind: GuessKind,
    /// Status after the guess
    pub status: SessionStatus,
    /// Figure part to draw (1-based, `max_attempts - remaining_attempts`) after a wrong guess
    pub figure_part: Option<u8>,
}

impl GuessOutcome {
    /// True when the guess revealed at least one new position
    #[inline]
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self.kind, GuessKind::Correct)
    }

    /// True when the guess changed the session
    #[inline]
    #[must_use]
    pub const fn changed_state(&self) -> bool {
        matches!(self.kind, GuessKind::Correct | GuessKind::Wrong)
    }
}

/// State of one hangman round
#[derive(Debug, Clone)]
pub struct GuessSession {
    word: Word,
    guessed: FxHashSet<char>,
    guess_order: Vec<char>,
    revealed_letters: usize,
    remaining_attempts: u8,
    max_attempts: u8,
    status: SessionStatus,
}

impl GuessSession {
    /// Start a round with the default six attempts
    #[must_use]
    pub fn new(word: Word) -> Self {
        Self::with_max_attempts(word, DEFAULT_MAX_ATTEMPTS)
    }

    /// Start a round with a custom attempt budget (at least one)
    #[must_use]
    pub fn with_max_attempts(word: Word, max_attempts: u8) -> Self {
        let max_attempts = max_attempts.max(1);
        Self {
            word,
            guessed: FxHashSet::default(),
            guess_order: Vec::new(),
            revealed_letters: 0,
            remaining_attempts: max_attempts,
            max_attempts,
            status: SessionStatus::InProgress,
        }
    }

    /// Submit one letter
    ///
    /// The letter is case-folded first. Repeated letters and guesses made after the
    /// round ended are no-ops. A wrong guess consumes one attempt and the round is lost
    /// in the same call that uses up the last attempt.
    ///
    /// # Examples
    /// ```
    /// use hangman_armenian::core::{GuessSession, SessionStatus, Word};
    ///
    /// let mut session = GuessSession::new(Word::new("cat").unwrap());
    /// session.guess('c');
    /// session.guess('A');
    /// let outcome = session.guess('t');
    ///
    /// assert_eq!(outcome.status, SessionStatus::Won);
    /// assert_eq!(session.revealed_display(), "cat");
    /// ```
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let letter = normalize_letter(letter);

        if self.status.is_terminal() || letter.is_whitespace() {
            return self.outcome(letter, GuessKind::Ignored, None);
        }

        if !self.guessed.insert(letter) {
            return self.outcome(letter, GuessKind::Repeated, None);
        }
        self.guess_order.push(letter);

        if self.word.has_letter(letter) {
            self.revealed_letters += 1;
            if self.revealed_letters == self.word.distinct_letter_count() {
                self.status = SessionStatus::Won;
            }
            return self.outcome(letter, GuessKind::Correct, None);
        }

        self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
        if self.remaining_attempts == 0 {
            self.status = SessionStatus::Lost;
        }
        let part = self.attempts_used();
        self.outcome(letter, GuessKind::Wrong, Some(part))
    }

    const fn outcome(&self, letter: char, kind: GuessKind, figure_part: Option<u8>) -> GuessOutcome {
        GuessOutcome {
            letter,
            kind,
            status: self.status,
            figure_part,
        }
    }

    /// Per-position view of the word: `Some(letter)` when revealed, `None` for a blank
    ///
    /// Spaces are always revealed.
    #[must_use]
    pub fn revealed(&self) -> Vec<Option<char>> {
        self.word
            .chars()
            .iter()
            .map(|&c| (c == SPACE || self.guessed.contains(&c)).then_some(c))
            .collect()
    }

    /// The word with unrevealed letters replaced by [`PLACEHOLDER`]
    #[must_use]
    pub fn revealed_display(&self) -> String {
        self.revealed()
            .into_iter()
            .map(|cell| cell.unwrap_or(PLACEHOLDER))
            .collect()
    }

    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> u8 {
        self.remaining_attempts
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    /// Wrong guesses so far, equal to the number of figure parts drawn
    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> u8 {
        self.max_attempts - self.remaining_attempts
    }

    /// Check whether a letter (any case) has been guessed
    #[must_use]
    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&normalize_letter(letter))
    }

    /// Guessed letters in the order they were submitted
    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guess_order
    }

    /// Guessed letters that are not in the word, in submission order
    pub fn wrong_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.guess_order
            .iter()
            .copied()
            .filter(|&c| !self.word.has_letter(c))
    }
}

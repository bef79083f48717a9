//! Error types surfaced by the game library.

use chrono::NaiveDate;
use thiserror::Error;

use crate::core::WordError;

/// Errors raised by catalog lookups, round orchestration and persistence.
///
/// Guesses after a round has ended and repeated guesses are never errors;
/// they are reported as no-op outcomes by [`crate::core::GuessSession`].
#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("the word catalog is empty")]
    EmptyCatalog,

    #[error("the daily challenge for {0} has already been played")]
    AlreadyPlayedToday(NaiveDate),

    #[error("daily rounds cannot be restarted")]
    UnsupportedInDailyMode,

    #[error("no round is in progress")]
    NoActiveRound,

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("word {word:?} contains {letter:?}, which is not in the {alphabet} alphabet")]
    ForeignLetter {
        word: String,
        letter: char,
        alphabet: &'static str,
    },

    #[error("catalog format error on line {line}: {message}")]
    CatalogFormat { line: usize, message: String },

    #[error("storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

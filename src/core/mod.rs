//! Core domain types for hangman
//!
//! Pure, synchronous types with no I/O: words, alphabets and the per-round
//! guess state machine.

mod alphabet;
mod session;
mod word;

pub use alphabet::Alphabet;
pub use session::{
    DEFAULT_MAX_ATTEMPTS, GuessKind, GuessOutcome, GuessSession, PLACEHOLDER, SessionStatus,
};
pub use word::{SPACE, Word, WordError, normalize_letter};

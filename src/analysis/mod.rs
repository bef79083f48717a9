//! Offline analysis of a word catalog
//!
//! Auto-plays rounds with a letter strategy to estimate how hard each word is.

pub mod difficulty;
pub mod strategy;

pub use difficulty::{
    CategorySummary, DifficultyReport, WordDifficulty, run_difficulty, simulate_round,
};
pub use strategy::{
    AlphabeticalStrategy, FrequencyStrategy, LetterStrategy, StrategyType, filter_candidates,
    letter_frequencies, matches_board,
};

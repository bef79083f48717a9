//! Catalog difficulty report
//!
//! Auto-plays every word of a catalog (or one category) with a letter strategy
//! and summarizes how many wrong guesses each word costs.

use super::strategy::{LetterStrategy, filter_candidates};
use crate::core::{GuessSession, SessionStatus, Word};
use crate::error::Result;
use crate::wordlists::WordCatalog;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::cmp::Reverse;
use std::time::{Duration, Instant};

/// Result of auto-playing a single word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDifficulty {
    pub word: String,
    pub category: String,
    pub won: bool,
    pub wrong_guesses: u8,
    pub total_guesses: usize,
}

/// Per-category totals
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: String,
    pub words: usize,
    pub solved: usize,
    pub average_wrong: f64,
}

/// Aggregated results over a set of words
#[derive(Debug)]
pub struct DifficultyReport {
    pub results: Vec<WordDifficulty>,
    pub max_attempts: u8,
    pub total_time: Duration,
}

impl DifficultyReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn solved(&self) -> usize {
        self.results.iter().filter(|r| r.won).count()
    }

    /// Share of words solved, 0.0 to 100.0
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        self.solved() as f64 / self.total() as f64 * 100.0
    }

    /// Mean wrong guesses over all words
    #[must_use]
    pub fn average_wrong(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        let sum: usize = self
            .results
            .iter()
            .map(|r| usize::from(r.wrong_guesses))
            .sum();
        sum as f64 / self.total() as f64
    }

    /// Word count per number of wrong guesses, index 0 to `max_attempts`
    #[must_use]
    pub fn wrong_distribution(&self) -> Vec<usize> {
        let mut distribution = vec![0; usize::from(self.max_attempts) + 1];
        for result in &self.results {
            let slot = usize::from(result.wrong_guesses).min(distribution.len() - 1);
            distribution[slot] += 1;
        }
        distribution
    }

    /// Totals per category, in the order categories first appear in the results
    #[must_use]
    pub fn by_category(&self) -> Vec<CategorySummary> {
        let mut summaries: Vec<CategorySummary> = Vec::new();
        let mut wrong_sums: Vec<usize> = Vec::new();

        for result in &self.results {
            let index = summaries
                .iter()
                .position(|s| s.category == result.category)
                .unwrap_or_else(|| {
                    summaries.push(CategorySummary {
                        category: result.category.clone(),
                        words: 0,
                        solved: 0,
                        average_wrong: 0.0,
                    });
                    wrong_sums.push(0);
                    summaries.len() - 1
                });
            summaries[index].words += 1;
            summaries[index].solved += usize::from(result.won);
            wrong_sums[index] += usize::from(result.wrong_guesses);
        }

        for (summary, sum) in summaries.iter_mut().zip(wrong_sums) {
            summary.average_wrong = sum as f64 / summary.words as f64;
        }
        summaries
    }

    /// Words that cost the most wrong guesses, lost rounds first
    #[must_use]
    pub fn hardest(&self, n: usize) -> Vec<&WordDifficulty> {
        let mut sorted: Vec<&WordDifficulty> = self.results.iter().collect();
        sorted.sort_by_key(|r| (r.won, Reverse(r.wrong_guesses), r.word.clone()));
        sorted.truncate(n);
        sorted
    }
}

/// Auto-play one word against a pool of possible targets
///
/// Returns whether the round was won, the wrong guesses and the total guesses.
#[must_use]
pub fn simulate_round<S: LetterStrategy + ?Sized>(
    strategy: &S,
    target: &Word,
    pool: &[&Word],
    max_attempts: u8,
) -> (bool, u8, usize) {
    let mut session = GuessSession::with_max_attempts(target.clone(), max_attempts);
    let mut candidates = filter_candidates(pool, &session);

    while !session.is_terminal() {
        let Some(letter) = strategy.next_letter(&session, &candidates) else {
            break;
        };
        session.guess(letter);
        candidates = filter_candidates(&candidates, &session);
    }

    (
        session.status() == SessionStatus::Won,
        session.attempts_used(),
        session.guessed_letters().len(),
    )
}

/// Auto-play every word of `category` (or the whole catalog) in parallel
///
/// The candidate pool is the same set of words the target is drawn from, as a
/// player who knows the category would reason.
///
/// # Errors
///
/// Returns `GameError::UnknownCategory` for an unknown category.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_difficulty<S: LetterStrategy + Sync>(
    catalog: &WordCatalog,
    category: Option<&str>,
    strategy: &S,
    max_attempts: u8,
    show_progress: bool,
) -> Result<DifficultyReport> {
    let targets: Vec<(&str, &Word)> = match category {
        Some(name) => {
            let words = catalog.words_in(name)?;
            words.iter().map(|w| (name, w)).collect()
        }
        None => catalog
            .category_entries()
            .iter()
            .flat_map(|c| c.words().iter().map(move |w| (c.name(), w)))
            .collect(),
    };
    let pool: Vec<&Word> = targets.iter().map(|&(_, w)| w).collect();

    tracing::info!(
        words = targets.len(),
        category = category.unwrap_or("*"),
        "Analyzing catalog difficulty"
    );

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("constant template")
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let results: Vec<WordDifficulty> = targets
        .par_iter()
        .map(|&(category, word)| {
            let (won, wrong_guesses, total_guesses) =
                simulate_round(strategy, word, &pool, max_attempts);
            pb.inc(1);
            WordDifficulty {
                word: word.text().to_string(),
                category: category.to_string(),
                won,
                wrong_guesses,
                total_guesses,
            }
        })
        .collect();
    pb.finish_with_message("Complete!");

    Ok(DifficultyReport {
        results,
        max_attempts,
        total_time: start.elapsed(),
    })
}

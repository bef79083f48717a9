//! Catalog commands: category listing and the difficulty report

use crate::analysis::{StrategyType, run_difficulty};
use crate::error::Result;
use crate::output::{print_categories, print_difficulty_report};
use crate::wordlists::WordCatalog;

/// List categories with their word counts
pub fn run_categories(catalog: &WordCatalog) {
    print_categories(catalog);
}

/// Auto-play the catalog and print how hard each part of it is
///
/// # Errors
///
/// Returns `GameError::UnknownCategory` for an unknown category.
pub fn run_analyze(
    catalog: &WordCatalog,
    category: Option<&str>,
    strategy: &str,
    max_attempts: u8,
) -> Result<()> {
    let alphabet = catalog.alphabet();
    tracing::debug!("Analyzing with the {} alphabet", alphabet.name());

    let strategy = StrategyType::from_name(strategy, alphabet);
    let words = match category {
        Some(name) => catalog.words_in(name)?.len(),
        None => catalog.len(),
    };
    println!("🎯 Auto-playing {words} words...");

    let report = run_difficulty(catalog, category, &strategy, max_attempts, true)?;
    print_difficulty_report(&report);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::wordlists::embedded_catalog;

    #[test]
    fn analyze_embedded_category() {
        let catalog = embedded_catalog();
        let first = catalog.categories().next().unwrap().to_string();
        assert!(run_analyze(&catalog, Some(&first), "frequency", 6).is_ok());
    }

    #[test]
    fn analyze_unknown_category() {
        let catalog = embedded_catalog();
        let err = run_analyze(&catalog, Some("nope"), "frequency", 6).unwrap_err();
        assert!(matches!(err, GameError::UnknownCategory(_)));
    }
}

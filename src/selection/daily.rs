//! Word of the day
//!
//! The daily word is `all_words()[ordinal_day % word_count]`, where the ordinal day
//! counts from 1 on January 1st (proleptic Gregorian calendar, leap years included).
//! Every player with the same catalog gets the same word on the same date.

use crate::core::Word;
use crate::error::{GameError, Result};
use crate::storage::{KeyValueStore, keys};
use crate::wordlists::WordCatalog;
use chrono::{Datelike, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// 1-based day number within the date's year
#[inline]
#[must_use]
pub fn day_index(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Deterministic word-of-the-day selection with a one-day memo
///
/// The memo is keyed by date only; a selector must be used with a single catalog.
#[derive(Debug, Default, Clone)]
pub struct DailyWordSelector {
    cache: Option<(NaiveDate, Word)>,
}

impl DailyWordSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the word for `date`
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyCatalog` if the catalog holds no words.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use hangman_armenian::selection::DailyWordSelector;
    /// use hangman_armenian::wordlists::loader::parse_catalog;
    ///
    /// let catalog = parse_catalog("[Animals]\ncat\ndog\nowl\n").unwrap();
    /// let mut daily = DailyWordSelector::new();
    ///
    /// // January 2nd is day 2, and 2 % 3 == 2
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    /// assert_eq!(daily.word_of_day(&catalog, date).unwrap().text(), "owl");
    /// ```
    pub fn word_of_day(&mut self, catalog: &WordCatalog, date: NaiveDate) -> Result<Word> {
        if let Some((cached_date, word)) = &self.cache
            && *cached_date == date
        {
            return Ok(word.clone());
        }

        let count = catalog.len();
        if count == 0 {
            return Err(GameError::EmptyCatalog);
        }

        let index = day_index(date) as usize % count;
        let word = catalog
            .word_at(index)
            .cloned()
            .ok_or(GameError::EmptyCatalog)?;

        tracing::debug!("Daily word for {date} is index {index} of {count}");
        self.cache = Some((date, word.clone()));
        Ok(word)
    }

    /// The date currently memoized, if any
    #[must_use]
    pub fn cached_date(&self) -> Option<NaiveDate> {
        self.cache.as_ref().map(|(date, _)| *date)
    }

    /// True when the daily challenge was last played on `today`
    #[must_use]
    pub fn has_played_today(last_played: Option<NaiveDate>, today: NaiveDate) -> bool {
        last_played == Some(today)
    }
}

/// Date the daily challenge was last started, from the store
#[must_use]
pub fn last_played(store: &dyn KeyValueStore) -> Option<NaiveDate> {
    let raw = store.get(keys::DAILY_LAST_PLAYED)?;
    match NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!("Ignoring unreadable daily date {raw:?}: {e}");
            None
        }
    }
}

/// Record `today` as the last daily challenge date
///
/// A later stored date is kept, so playing a past day never reopens today's round.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn mark_played(store: &dyn KeyValueStore, today: NaiveDate) -> Result<()> {
    if let Some(last) = last_played(store)
        && last >= today
    {
        tracing::debug!("Keeping later daily date {last}, not {today}");
        return Ok(());
    }
    store.set(
        keys::DAILY_LAST_PLAYED,
        &today.format(DATE_FORMAT).to_string(),
    )
}

//! Word selection
//!
//! Two ways to choose the target word: the deterministic word of the day and a
//! uniform random pick for practice rounds.

pub mod daily;
pub mod picker;

pub use daily::{DailyWordSelector, day_index};
pub use picker::{FALLBACK_WORD, MIXED_CATEGORY, PickerConfig, WordPicker};

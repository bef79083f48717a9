//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_categories, print_difficulty_report, print_guess_feedback,
    print_round_summary, print_settings, print_stats,
};
pub use formatters::{format_duration, gallows, share_text};

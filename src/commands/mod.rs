//! Command implementations

pub mod analyze;
pub mod profile;
pub mod round;

pub use analyze::{run_analyze, run_categories};
pub use profile::{run_settings, run_stats};
pub use round::{RoundInput, run_daily, run_practice};

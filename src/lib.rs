//! Western Armenian Hangman
//!
//! A hangman word game for practicing Western Armenian vocabulary: categorized
//! words, a once-a-day challenge shared by every player, practice rounds, and
//! persistent statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_armenian::game::PlaySessionCoordinator;
//! use hangman_armenian::storage::MemoryStore;
//! use hangman_armenian::wordlists::embedded_catalog;
//!
//! let mut game = PlaySessionCoordinator::new(embedded_catalog(), MemoryStore::shared());
//! game.start_practice(None).unwrap();
//!
//! let report = game.submit_guess('ա').unwrap();
//! println!("{} ({} attempts left)", report.display, report.remaining_attempts);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Daily and practice word selection
pub mod selection;

// Statistics and preferences
pub mod profile;

// Key-value persistence
pub mod storage;

// Round orchestration
pub mod game;

// Catalog difficulty analysis
pub mod analysis;

// Runtime configuration
pub mod config;

// Error types
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{GameError, Result};

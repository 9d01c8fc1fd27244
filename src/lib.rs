//! Bulls and Cows
//!
//! A digit-guessing game: find the secret code from bulls (right digit, right
//! place) and cows (right digit, wrong place).
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_and_cows::core::{Code, Difficulty};
//! use bulls_and_cows::{calculate_feedback, generate_secret_code};
//!
//! let secret = generate_secret_code(Difficulty::Hard);
//! assert_eq!(secret.len(), 4);
//!
//! let score = calculate_feedback(&Code::parse("1325").unwrap(), &Code::parse("1234").unwrap());
//! assert_eq!(score.correct_positions(), 1);
//! assert_eq!(score.correct_numbers(), 2);
//! ```

// Core domain types
pub mod core;

// Secret code generation
pub mod generator;

// Rounds, input buffer and session state
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;

pub use generator::generate_secret_code;

use crate::core::{Code, Score};

/// Score `guess` against `secret`
///
/// Thin entry point over [`Score::calculate`].
#[must_use]
pub fn calculate_feedback(guess: &Code, secret: &Code) -> Score {
    Score::calculate(guess, secret)
}

//! Terminal output formatting
//!
//! Display utilities for CLI results and player-facing messages.

pub mod display;
pub mod formatters;

pub use display::{print_codes, print_sample_result, print_score_result};

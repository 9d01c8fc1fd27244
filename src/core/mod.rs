//! Core domain types for bulls and cows
//!
//! Digits, codes, difficulty rules and scoring. Everything here is pure and
//! holds no state between calls.

mod code;
mod difficulty;
mod digit;
mod score;

pub use code::{Code, CodeError, MAX_CODE_LEN};
pub use difficulty::{Difficulty, GuessError};
pub use digit::Digit;
pub use score::Score;

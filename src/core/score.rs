//! Bulls and cows scoring
//!
//! A score counts, for one guess against the secret:
//! - bulls: digits in the correct position
//! - cows: digits present in the secret but in a different position
//!
//! Repeated digits are matched at most as many times as they occur in the secret,
//! so `bulls + cows` never exceeds the code length.

use super::Code;
use std::fmt;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    bulls: u8,
    cows: u8,
}

impl Score {
    /// Create a score from raw counts
    #[inline]
    #[must_use]
    pub const fn new(bulls: u8, cows: u8) -> Self {
        Self { bulls, cows }
    }

    /// Digits in the correct position
    #[inline]
    #[must_use]
    pub const fn bulls(self) -> u8 {
        self.bulls
    }

    /// Digits present but misplaced
    #[inline]
    #[must_use]
    pub const fn cows(self) -> u8 {
        self.cows
    }

    /// Alias for [`bulls`](Self::bulls)
    #[inline]
    #[must_use]
    pub const fn correct_positions(self) -> u8 {
        self.bulls
    }

    /// Alias for [`cows`](Self::cows)
    #[inline]
    #[must_use]
    pub const fn correct_numbers(self) -> u8 {
        self.cows
    }

    /// Whether every position matched
    #[inline]
    #[must_use]
    pub const fn is_win(self, code_length: usize) -> bool {
        self.bulls as usize == code_length
    }

    /// Whether nothing in the guess appears in the secret
    #[inline]
    #[must_use]
    pub const fn is_blank(self) -> bool {
        self.bulls == 0 && self.cows == 0
    }

    /// Calculate the score when `guess` is submitted against `secret`
    ///
    /// # Algorithm
    /// 1. Count occurrences of each digit in the secret
    /// 2. First pass: mark exact matches (bulls) and remove them from the counts
    /// 3. Second pass: for unmatched positions, take a cow from the remaining counts
    ///
    /// Both codes must have the same length; this is checked in debug builds only.
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::{Code, Score};
    ///
    /// let secret = Code::parse("1234").unwrap();
    /// let guess = Code::parse("1325").unwrap();
    /// let score = Score::calculate(&guess, &secret);
    ///
    /// assert_eq!(score.bulls(), 1);
    /// assert_eq!(score.cows(), 2);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        debug_assert_eq!(
            guess.len(),
            secret.len(),
            "Guess and secret must have the same length"
        );

        let mut secret_available = secret.digit_counts();
        let mut consumed = vec![false; guess.len()];
        let mut bulls = 0u8;
        let mut cows = 0u8;

        // First pass: bulls
        for (i, (&guessed, &hidden)) in guess.digits().iter().zip(secret.digits()).enumerate() {
            if guessed == hidden {
                bulls += 1;
                consumed[i] = true;

                if let Some(count) = secret_available.get_mut(&guessed) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: cows from what the bulls left over
        for (&guessed, _) in guess
            .digits()
            .iter()
            .zip(&consumed)
            .filter(|&(_, &used)| !used)
        {
            if let Some(count) = secret_available.get_mut(&guessed)
                && *count > 0
            {
                cows += 1;
                *count -= 1;
            }
        }

        Self { bulls, cows }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bulls-{} Cows-{}", self.bulls, self.cows)
    }
}

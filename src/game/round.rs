//! A single round: one secret code and the guesses made against it

use crate::core::{Code, Difficulty, GuessError, Score};
use crate::generator::generate;
use rand::Rng;
use std::fmt;

/// One submitted guess and its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Code,
    pub score: Score,
}

/// Result of submitting a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The guess matched; `attempts` counts every guess of the round
    Won { attempts: usize },
    Miss(Score),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    AlreadyWon,
    InvalidGuess(GuessError),
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyWon => write!(f, "This round is already won - start a new game"),
            Self::InvalidGuess(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RoundError {}

impl From<GuessError> for RoundError {
    fn from(e: GuessError) -> Self {
        Self::InvalidGuess(e)
    }
}

/// State of one round
#[derive(Debug, Clone)]
pub struct Round {
    difficulty: Difficulty,
    secret: Code,
    attempts: Vec<Attempt>,
    won: bool,
}

impl Round {
    /// Start a round with a freshly generated secret
    pub fn start<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        let secret = generate(difficulty, rng);
        tracing::debug!(%difficulty, %secret, "secret code generated");
        Self::new(difficulty, secret)
    }

    /// Start a round with a known secret
    #[must_use]
    pub const fn new(difficulty: Difficulty, secret: Code) -> Self {
        Self {
            difficulty,
            secret,
            attempts: Vec::new(),
            won: false,
        }
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    /// Guesses so far, oldest first
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// Score a guess and record it
    ///
    /// # Errors
    /// Returns `RoundError::AlreadyWon` after a winning guess, or
    /// `RoundError::InvalidGuess` if the guess breaks the difficulty rules.
    pub fn submit(&mut self, guess: Code) -> Result<Outcome, RoundError> {
        if self.won {
            return Err(RoundError::AlreadyWon);
        }
        self.difficulty.validate(&guess)?;

        let score = Score::calculate(&guess, &self.secret);
        tracing::trace!(%guess, %score, "guess scored");
        self.attempts.push(Attempt { guess, score });

        if score.is_win(self.difficulty.code_length()) {
            self.won = true;
            tracing::info!(attempts = self.attempts.len(), "round won");
            Ok(Outcome::Won {
                attempts: self.attempts.len(),
            })
        } else {
            Ok(Outcome::Miss(score))
        }
    }
}

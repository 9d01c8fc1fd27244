//! Game session
//!
//! Holds everything a front end needs between key presses: the random source,
//! the current difficulty and round, the guess being typed and running
//! statistics.

use super::input::{GuessInput, InputError};
use super::round::{Outcome, Round, RoundError};
use crate::core::{Code, Difficulty, Digit};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::fmt;

/// Settings for a new session
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    pub difficulty: Difficulty,
    /// Fixed seed for reproducible secrets; OS entropy when `None`
    pub seed: Option<u64>,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            seed: None,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Win/loss tracking across rounds
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Attempts needed -> number of games won with that many
    pub guess_distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    #[must_use]
    pub fn average_attempts(&self) -> Option<f64> {
        if self.games_won == 0 {
            return None;
        }
        let total: usize = self
            .guess_distribution
            .iter()
            .map(|(attempts, games)| attempts * games)
            .sum();
        Some(total as f64 / self.games_won as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    IncompleteGuess,
    Input(InputError),
    Round(RoundError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteGuess => write!(f, "Fill in every digit before submitting"),
            Self::Input(e) => write!(f, "{e}"),
            Self::Round(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<InputError> for SessionError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

impl From<RoundError> for SessionError {
    fn from(e: RoundError) -> Self {
        Self::Round(e)
    }
}

/// A sequence of rounds played at a chosen difficulty
pub struct Session {
    rng: StdRng,
    difficulty: Difficulty,
    round: Round,
    input: GuessInput,
    stats: Statistics,
}

impl Session {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let round = Round::start(config.difficulty, &mut rng);

        Self {
            rng,
            difficulty: config.difficulty,
            round,
            input: GuessInput::new(config.difficulty),
            stats: Statistics::default(),
        }
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn input(&self) -> &GuessInput {
        &self.input
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.round.is_won()
    }

    /// Discard the current round and start another at the same difficulty
    ///
    /// A round abandoned after at least one guess counts as a lost game.
    pub fn new_round(&mut self) {
        if !self.round.is_won() && self.round.attempt_count() > 0 {
            self.stats.total_games += 1;
        }
        self.round = Round::start(self.difficulty, &mut self.rng);
        self.input = GuessInput::new(self.difficulty);
    }

    /// Switch difficulty and start a new round
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.new_round();
    }

    /// Type a digit into the guess; ignored once the round is won
    ///
    /// # Errors
    /// Returns `InputError::DuplicateDigit` for a repeated digit in Hard mode.
    pub fn enter_digit(&mut self, digit: Digit) -> Result<(), InputError> {
        if self.is_won() {
            return Ok(());
        }
        self.input.enter(digit)
    }

    pub fn backspace(&mut self) {
        if !self.is_won() {
            self.input.backspace();
        }
    }

    pub fn move_left(&mut self) {
        if !self.is_won() {
            self.input.move_left();
        }
    }

    pub fn move_right(&mut self) {
        if !self.is_won() {
            self.input.move_right();
        }
    }

    pub fn focus(&mut self, index: usize) {
        if !self.is_won() {
            self.input.focus(index);
        }
    }

    /// Submit the typed guess
    ///
    /// The input is cleared after a miss so the next guess starts fresh.
    ///
    /// # Errors
    /// Returns `SessionError::IncompleteGuess` while any slot is empty, or the
    /// round's error if the guess cannot be scored.
    pub fn submit(&mut self) -> Result<Outcome, SessionError> {
        let guess = self.input.to_code().ok_or(SessionError::IncompleteGuess)?;
        let outcome = self.submit_code(guess)?;
        if matches!(outcome, Outcome::Miss(_)) {
            self.input.clear();
        }
        Ok(outcome)
    }

    /// Submit a whole guess, bypassing the input buffer
    ///
    /// # Errors
    /// Returns the round's error if the guess breaks the difficulty rules or the
    /// round is already won.
    pub fn submit_code(&mut self, guess: Code) -> Result<Outcome, SessionError> {
        let outcome = self.round.submit(guess)?;

        if let Outcome::Won { attempts } = outcome {
            self.stats.total_games += 1;
            self.stats.games_won += 1;
            *self.stats.guess_distribution.entry(attempts).or_insert(0) += 1;
        }

        Ok(outcome)
    }
}

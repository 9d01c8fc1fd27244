//! Game state
//!
//! Rounds, the guess entry buffer and the session that ties them together.

mod input;
mod round;
mod session;

pub use input::{GuessInput, InputError};
pub use round::{Attempt, Outcome, Round, RoundError};
pub use session::{Session, SessionConfig, SessionError, Statistics};

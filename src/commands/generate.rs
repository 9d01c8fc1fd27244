//! Generate command
//!
//! Produces secret codes without starting a game.

use crate::core::{Code, Difficulty};
use crate::generator::generate;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generate `count` secret codes
///
/// With a seed the sequence is reproducible.
#[must_use]
pub fn generate_codes(difficulty: Difficulty, count: usize, seed: Option<u64>) -> Vec<Code> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    (0..count).map(|_| generate(difficulty, &mut rng)).collect()
}

//! Secret code generation
//!
//! Hard codes are distinct digits taken from a Fisher-Yates shuffle of 0-9.
//! Easy codes draw each digit independently, so repeats are possible.

use crate::core::{Code, Difficulty, Digit};
use rand::Rng;

/// Generate a secret code for `difficulty` using the given random source
///
/// # Examples
/// ```
/// use bulls_and_cows::core::Difficulty;
/// use bulls_and_cows::generator::generate;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let secret = generate(Difficulty::Hard, &mut rng);
/// assert_eq!(secret.len(), 4);
/// assert!(!secret.has_duplicates());
/// ```
pub fn generate<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Code {
    let length = difficulty.code_length();

    let digits = if difficulty.allows_duplicates() {
        (0..length)
            .map(|_| Digit::ALL[rng.random_range(0..Digit::ALL.len())])
            .collect()
    } else {
        let mut pool = Digit::ALL;
        shuffle(&mut pool, rng);
        pool[..length].to_vec()
    };

    Code::new(digits)
}

/// Generate a secret code using the thread-local random source
#[must_use]
pub fn generate_secret_code(difficulty: Difficulty) -> Code {
    generate(difficulty, &mut rand::rng())
}

/// In-place Fisher-Yates shuffle
fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    #[test]
    fn hard_codes_are_four_distinct_digits() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1_000 {
            let code = generate(Difficulty::Hard, &mut rng);
            assert_eq!(code.len(), 4);
            assert!(!code.has_duplicates(), "Hard code {code} repeats a digit");
        }
    }

    #[test]
    fn easy_codes_are_three_digits() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1_000 {
            let code = generate(Difficulty::Easy, &mut rng);
            assert_eq!(code.len(), 3);
            assert!(code.digits().iter().all(|d| d.value() <= 9));
        }
    }

    #[test]
    fn easy_codes_repeat_digits_sometimes() {
        // P(no repeat) = 0.72 per code, so 500 codes without one is practically impossible
        let mut rng = StdRng::seed_from_u64(3);
        let repeats = (0..500)
            .filter(|_| generate(Difficulty::Easy, &mut rng).has_duplicates())
            .count();
        assert!(repeats > 0);
        assert!(repeats < 500);
    }

    #[test]
    fn same_seed_same_code() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for difficulty in [Difficulty::Easy, Difficulty::Hard] {
            assert_eq!(generate(difficulty, &mut a), generate(difficulty, &mut b));
        }
    }

    #[test]
    fn hard_codes_cover_every_digit_and_position() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut seen = [[false; 10]; 4];
        for _ in 0..2_000 {
            let code = generate(Difficulty::Hard, &mut rng);
            for (position, digit) in code.digits().iter().enumerate() {
                seen[position][usize::from(digit.value())] = true;
            }
        }
        assert!(seen.iter().flatten().all(|&hit| hit));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut items: Vec<u8> = (0..10).collect();
        shuffle(&mut items, &mut rng);
        let unique: FxHashSet<u8> = items.iter().copied().collect();
        assert_eq!(unique.len(), 10);
        assert_eq!(items.len(), 10);
    }

    #[test]
    fn shuffle_handles_tiny_slices() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);

        let mut single = [9u8];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, [9]);
    }

    #[test]
    fn thread_rng_generation() {
        let code = generate_secret_code(Difficulty::Hard);
        assert!(Difficulty::Hard.validate(&code).is_ok());
        let code = generate_secret_code(Difficulty::Easy);
        assert!(Difficulty::Easy.validate(&code).is_ok());
    }
}

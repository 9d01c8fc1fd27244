//! Sample command - statistical check of the code generator
//!
//! Generates many secret codes in parallel and tallies how often each digit
//! appears, how many codes repeat a digit, and how many distinct codes came up.

use crate::core::{Code, Difficulty};
use crate::generator::generate;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Codes generated per worker chunk (each chunk has its own rng)
const CHUNK_SIZE: usize = 4096;

/// Configuration for a sampling run
pub struct SampleConfig {
    pub difficulty: Difficulty,
    pub count: usize,
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl SampleConfig {
    #[must_use]
    pub const fn new(difficulty: Difficulty, count: usize) -> Self {
        Self {
            difficulty,
            count,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a sampling run
pub struct SampleResult {
    pub difficulty: Difficulty,
    pub total_codes: usize,
    pub digit_frequency: [usize; 10],
    pub codes_with_duplicates: usize,
    pub distinct_codes: usize,
    /// Number of distinct codes the difficulty can produce
    pub possible_codes: usize,
    pub duration: Duration,
    pub codes_per_second: f64,
}

impl SampleResult {
    /// Share of codes that repeat a digit (0.0-1.0)
    #[must_use]
    pub fn duplicate_rate(&self) -> f64 {
        if self.total_codes == 0 {
            0.0
        } else {
            self.codes_with_duplicates as f64 / self.total_codes as f64
        }
    }
}

#[derive(Default)]
struct Tally {
    digit_frequency: [usize; 10],
    codes_with_duplicates: usize,
    distinct: FxHashSet<Code>,
}

impl Tally {
    fn record(&mut self, code: Code) {
        for digit in code.digits() {
            self.digit_frequency[usize::from(digit.value())] += 1;
        }
        if code.has_duplicates() {
            self.codes_with_duplicates += 1;
        }
        self.distinct.insert(code);
    }

    fn merge(mut self, other: Self) -> Self {
        for (total, count) in self.digit_frequency.iter_mut().zip(other.digit_frequency) {
            *total += count;
        }
        self.codes_with_duplicates += other.codes_with_duplicates;
        self.distinct.extend(other.distinct);
        self
    }
}

/// Number of codes a difficulty can produce
#[must_use]
pub fn possible_codes(difficulty: Difficulty) -> usize {
    let length = difficulty.code_length();
    if difficulty.allows_duplicates() {
        10usize.pow(length as u32)
    } else {
        // 10 * 9 * ... for `length` factors
        (0..length).map(|i| 10 - i).product()
    }
}

/// Generate `config.count` codes and tally them
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_sample(config: &SampleConfig) -> SampleResult {
    let base_seed = config.seed.unwrap_or_else(rand::random);
    tracing::debug!(base_seed, count = config.count, "sampling generator");

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let chunks = config.count.div_ceil(CHUNK_SIZE);

    let tally = (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(chunk as u64));
            let size = CHUNK_SIZE.min(config.count - chunk * CHUNK_SIZE);

            let mut tally = Tally::default();
            for _ in 0..size {
                tally.record(generate(config.difficulty, &mut rng));
            }
            pb.inc(size as u64);
            tally
        })
        .reduce(Tally::default, Tally::merge);

    pb.finish_and_clear();
    let duration = start.elapsed();

    SampleResult {
        difficulty: config.difficulty,
        total_codes: config.count,
        digit_frequency: tally.digit_frequency,
        codes_with_duplicates: tally.codes_with_duplicates,
        distinct_codes: tally.distinct.len(),
        possible_codes: possible_codes(config.difficulty),
        duration,
        codes_per_second: config.count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(difficulty: Difficulty, count: usize, seed: u64) -> SampleConfig {
        SampleConfig {
            difficulty,
            count,
            seed: Some(seed),
            show_progress: false,
        }
    }

    #[test]
    fn possible_code_counts() {
        assert_eq!(possible_codes(Difficulty::Easy), 1000);
        assert_eq!(possible_codes(Difficulty::Hard), 5040);
    }

    #[test]
    fn hard_sample_never_repeats() {
        let result = run_sample(&quiet(Difficulty::Hard, 10_000, 1));

        assert_eq!(result.total_codes, 10_000);
        assert_eq!(result.codes_with_duplicates, 0);
        assert_eq!(result.digit_frequency.iter().sum::<usize>(), 40_000);
        assert!(result.distinct_codes <= result.possible_codes);
    }

    #[test]
    fn easy_sample_repeats_about_28_percent() {
        // 1 - (10 * 9 * 8) / 1000 = 0.28
        let result = run_sample(&quiet(Difficulty::Easy, 20_000, 2));
        let rate = result.duplicate_rate();
        assert!((0.25..0.31).contains(&rate), "duplicate rate {rate}");
    }

    #[test]
    fn digits_roughly_uniform() {
        let result = run_sample(&quiet(Difficulty::Hard, 20_000, 3));
        let expected = 80_000.0 / 10.0;
        for (digit, &count) in result.digit_frequency.iter().enumerate() {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "digit {digit} seen {count} times");
        }
    }

    #[test]
    fn easy_digits_roughly_uniform() {
        let result = run_sample(&quiet(Difficulty::Easy, 20_000, 6));
        let expected = 60_000.0 / 10.0;
        for (digit, &count) in result.digit_frequency.iter().enumerate() {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "digit {digit} seen {count} times");
        }
    }

    #[test]
    fn sample_is_reproducible_with_seed() {
        let a = run_sample(&quiet(Difficulty::Easy, 9_000, 4));
        let b = run_sample(&quiet(Difficulty::Easy, 9_000, 4));
        assert_eq!(a.digit_frequency, b.digit_frequency);
        assert_eq!(a.codes_with_duplicates, b.codes_with_duplicates);
        assert_eq!(a.distinct_codes, b.distinct_codes);
    }

    #[test]
    fn empty_sample() {
        let result = run_sample(&quiet(Difficulty::Hard, 0, 5));
        assert_eq!(result.total_codes, 0);
        assert_eq!(result.distinct_codes, 0);
        assert!((result.duplicate_rate() - 0.0).abs() < f64::EPSILON);
    }
}

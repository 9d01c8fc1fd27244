//! Command implementations

pub mod generate;
pub mod sample;
pub mod score;
pub mod simple;

pub use generate::generate_codes;
pub use sample::{SampleConfig, SampleResult, run_sample};
pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;

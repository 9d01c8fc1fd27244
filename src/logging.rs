//! Tracing subscriber setup
//!
//! Logs go to stderr. `RUST_LOG` wins when set; otherwise the `-v` count picks
//! the level for this crate.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count
#[must_use]
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("bulls_and_cows={}", level_for_verbosity(verbosity)))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

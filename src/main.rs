//! Bulls and Cows - CLI
//!
//! Digit-guessing game with TUI and simple line modes, plus scoring and
//! generator utilities.

use anyhow::Result;
use bulls_and_cows::{
    commands::{SampleConfig, generate_codes, run_sample, run_simple, score_guess},
    core::Difficulty,
    game::{Session, SessionConfig},
    logging,
    output::{print_codes, print_sample_result, print_score_result},
};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bulls_and_cows",
    about = "Bulls and cows: guess the secret digit code",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: hard (default, 4 different digits) or easy (3 digits, repeats allowed)
    #[arg(short, long, global = true, default_value = "hard")]
    difficulty: Difficulty,

    /// Seed for reproducible secret codes
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type whole guesses line by line)
    Simple,

    /// Score a guess against a secret code
    Score {
        /// The guessed digits
        guess: String,

        /// The secret digits
        secret: String,
    },

    /// Print freshly generated secret codes
    Generate {
        /// Number of codes to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Sample the code generator and report digit statistics
    Sample {
        /// Number of codes to generate
        #[arg(short = 'n', long, default_value = "100000")]
        count: usize,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = SessionConfig::new(cli.difficulty);
    config.seed = cli.seed;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => {
            let mut session = Session::new(config);
            run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score { guess, secret } => {
            let result = score_guess(&guess, &secret).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Generate { count } => {
            print_codes(&generate_codes(cli.difficulty, count, cli.seed));
            Ok(())
        }
        Commands::Sample { count, quiet } => {
            let sample_config = SampleConfig {
                difficulty: cli.difficulty,
                count,
                seed: cli.seed,
                show_progress: !quiet,
            };
            println!("Sampling {count} {} codes...", cli.difficulty.name());
            print_sample_result(&run_sample(&sample_config));
            Ok(())
        }
    }
}

fn run_play_command(config: SessionConfig) -> Result<()> {
    use bulls_and_cows::interactive::{App, run_tui};

    let app = App::new(Session::new(config));
    run_tui(app)
}

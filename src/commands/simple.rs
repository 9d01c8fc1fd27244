//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line is a whole guess or a command.

use crate::core::Code;
use crate::game::{Outcome, Session};
use crate::output::formatters::{feedback_message, win_message};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple(session: &mut Session) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(session, stdin.lock(), stdout.lock()).map_err(|e| e.to_string())
}

/// Drive a session from any line source
///
/// Stops on `quit`, on end of input, or when the player declines another game.
///
/// # Errors
///
/// Returns any I/O error from `input` or `output`.
pub fn play_lines<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                 Bulls and Cows - Simple Mode                 ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(output, "Guess the secret code. After each guess you get:")?;
    writeln!(output, "  - {} for each digit in the right place", "bulls".red().bold())?;
    writeln!(output, "  - {} for each right digit in the wrong place", "cows".blue().bold())?;
    writeln!(
        output,
        "\nCommands: 'quit', 'new', 'easy', 'hard', 'history', 'stats'\n"
    )?;
    announce_round(session, &mut output)?;

    loop {
        let prompt = format!("Round {} guess", session.round().attempt_count() + 1);
        let Some(line) = read_line(&mut input, &mut output, &prompt)? else {
            writeln!(output)?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                session.new_round();
                announce_round(session, &mut output)?;
            }
            "easy" | "hard" => {
                if let Ok(difficulty) = line.parse() {
                    session.set_difficulty(difficulty);
                    announce_round(session, &mut output)?;
                }
            }
            "history" => print_history(session, &mut output)?,
            "stats" => print_stats(session, &mut output)?,
            _ => {
                let guess = match Code::parse(&line) {
                    Ok(guess) => guess,
                    Err(e) => {
                        writeln!(output, "{}\n", format!("❌ {e}").red())?;
                        continue;
                    }
                };

                match session.submit_code(guess) {
                    Ok(Outcome::Miss(score)) => {
                        let round = session.round().attempt_count();
                        writeln!(output, "   {score}")?;
                        writeln!(output, "{}\n", feedback_message(score, round).yellow())?;
                    }
                    Ok(Outcome::Won { attempts }) => {
                        let message = win_message(session.round().secret(), attempts);
                        writeln!(output, "\n{}", "═".repeat(62).bright_cyan())?;
                        writeln!(output, "  🎉 {}", message.bright_green().bold())?;
                        writeln!(output, "{}", "═".repeat(62).bright_cyan())?;
                        print_history(session, &mut output)?;

                        let again = read_line(&mut input, &mut output, "Play again? (yes/no)")?;
                        match again.as_deref().map(str::to_lowercase).as_deref() {
                            Some("yes" | "y") => {
                                session.new_round();
                                announce_round(session, &mut output)?;
                            }
                            _ => {
                                writeln!(output, "\n👋 Thanks for playing!\n")?;
                                return Ok(());
                            }
                        }
                    }
                    Err(e) => writeln!(output, "{}\n", format!("❌ {e}").red())?,
                }
            }
        }
    }
}

fn announce_round<W: Write>(session: &Session, output: &mut W) -> io::Result<()> {
    let difficulty = session.difficulty();
    let rule = if difficulty.allows_duplicates() {
        "repeats allowed"
    } else {
        "all different"
    };
    writeln!(output, "{}", "─".repeat(62))?;
    writeln!(
        output,
        "New game ({}): {} digits, {rule}",
        difficulty.name().bright_yellow().bold(),
        difficulty.code_length()
    )?;
    writeln!(output, "{}", "─".repeat(62))
}

fn print_history<W: Write>(session: &Session, output: &mut W) -> io::Result<()> {
    let attempts = session.round().attempts();
    if attempts.is_empty() {
        return writeln!(output, "No guesses yet.\n");
    }

    writeln!(output, "\n  Guess history:")?;
    for (i, attempt) in attempts.iter().enumerate() {
        writeln!(
            output,
            "    {}. {}  {} {}",
            (i + 1).to_string().bright_black(),
            attempt.guess.to_string().bright_white().bold(),
            format!("Bulls-{}", attempt.score.bulls()).red().bold(),
            format!("Cows-{}", attempt.score.cows()).blue().bold()
        )?;
    }
    writeln!(output)
}

fn print_stats<W: Write>(session: &Session, output: &mut W) -> io::Result<()> {
    let stats = session.stats();
    writeln!(
        output,
        "Games: {} | Won: {} | Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    )?;
    if let Some(average) = stats.average_attempts() {
        writeln!(output, "Average rounds to win: {average:.2}")?;
    }
    writeln!(output)
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

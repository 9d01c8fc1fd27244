//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{SampleResult, ScoreResult};
use crate::core::Code;
use colored::Colorize;

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}   Guess: {}",
        result.secret.to_string().bright_yellow().bold(),
        result.guess.to_string().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  {}  {}",
        format!("Bulls-{}", result.score.bulls()).red().bold(),
        format!("Cows-{}", result.score.cows()).blue().bold()
    );

    println!();
    if result.is_win {
        println!("{}", "✅ Exact match!".green().bold());
    } else {
        println!(
            "{}",
            format!(
                "❌ {} of {} digits in place",
                result.score.bulls(),
                result.secret.len()
            )
            .red()
        );
    }
}

/// Print generated codes, one per line
pub fn print_codes(codes: &[Code]) {
    for code in codes {
        println!("{code}");
    }
}

/// Print the result of a sampling run
pub fn print_sample_result(result: &SampleResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({}) ",
        "GENERATOR SAMPLE".bright_cyan().bold(),
        result.difficulty.name().bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Codes generated:  {}", result.total_codes);
    println!(
        "   Distinct codes:   {} of {} possible",
        result.distinct_codes.to_string().bright_yellow().bold(),
        result.possible_codes
    );
    println!(
        "   Repeated digits:  {} ({:.1}%)",
        result.codes_with_duplicates,
        result.duplicate_rate() * 100.0
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.0}", result.codes_per_second);

    let total: usize = result.digit_frequency.iter().sum();
    if total == 0 {
        return;
    }

    println!("\n📈 {}", "Digit frequency:".bright_cyan().bold());
    let max = result.digit_frequency.iter().copied().max().unwrap_or(0) as f64;
    for (digit, &count) in result.digit_frequency.iter().enumerate() {
        let pct = count as f64 / total as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max, 40);
        println!("   {digit}: {} {count:8} ({pct:5.2}%)", bar.green());
    }
}

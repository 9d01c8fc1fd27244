//! Formatting utilities for player-facing text

use crate::core::{Code, Score};

/// `"1 cow"`, `"2 cows"`
#[must_use]
pub fn plural(count: u8, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Message shown after a guess that did not win
#[must_use]
pub fn feedback_message(score: Score, round: usize) -> String {
    if score.is_blank() {
        format!("No correct digits. Keep trying! (Round {round})")
    } else {
        format!(
            "You have {} and {}. (Round {round})",
            plural(score.cows(), "cow"),
            plural(score.bulls(), "bull")
        )
    }
}

/// Message shown after the winning guess
#[must_use]
pub fn win_message(secret: &Code, attempts: usize) -> String {
    format!("Congratulations! You guessed the code {secret} in {attempts} rounds!")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_forms() {
        assert_eq!(plural(0, "cow"), "0 cows");
        assert_eq!(plural(1, "cow"), "1 cow");
        assert_eq!(plural(2, "bull"), "2 bulls");
    }

    #[test]
    fn feedback_blank() {
        assert_eq!(
            feedback_message(Score::new(0, 0), 3),
            "No correct digits. Keep trying! (Round 3)"
        );
    }

    #[test]
    fn feedback_mixed() {
        assert_eq!(
            feedback_message(Score::new(1, 2), 1),
            "You have 2 cows and 1 bull. (Round 1)"
        );
        assert_eq!(
            feedback_message(Score::new(0, 1), 4),
            "You have 1 cow and 0 bulls. (Round 4)"
        );
    }

    #[test]
    fn win_text() {
        let secret = Code::parse("0482").unwrap();
        assert_eq!(
            win_message(&secret, 5),
            "Congratulations! You guessed the code 0482 in 5 rounds!"
        );
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}

//! Score command
//!
//! Scores a single guess against a given secret.

use crate::core::{Code, Score};

/// Result of scoring one guess
#[derive(Debug)]
pub struct ScoreResult {
    pub guess: Code,
    pub secret: Code,
    pub score: Score,
    pub is_win: bool,
}

/// Score `guess` against `secret`
///
/// No difficulty rules apply here; any two digit strings of equal length, up to
/// [`MAX_CODE_LEN`] digits, are accepted.
///
/// [`MAX_CODE_LEN`]: crate::core::MAX_CODE_LEN
///
/// # Errors
///
/// Returns an error if:
/// - Either code is empty, contains a non-digit, or is too long
/// - The two codes differ in length
pub fn score_guess(guess: &str, secret: &str) -> Result<ScoreResult, String> {
    let guess = Code::parse(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let secret = Code::parse(secret).map_err(|e| format!("Invalid secret: {e}"))?;

    if guess.len() != secret.len() {
        return Err(format!(
            "Guess has {} digits but secret has {}",
            guess.len(),
            secret.len()
        ));
    }

    let score = Score::calculate(&guess, &secret);
    let is_win = score.is_win(secret.len());

    Ok(ScoreResult {
        guess,
        secret,
        score,
        is_win,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_valid_pair() {
        let result = score_guess("1325", "1234").unwrap();
        assert_eq!(result.score, Score::new(1, 2));
        assert!(!result.is_win);
        assert_eq!(result.guess.to_string(), "1325");
        assert_eq!(result.secret.to_string(), "1234");
    }

    #[test]
    fn score_exact_match_wins() {
        let result = score_guess("556", "556").unwrap();
        assert!(result.is_win);
        assert_eq!(result.score, Score::new(3, 0));
    }

    #[test]
    fn score_allows_any_length() {
        let result = score_guess("123456", "654321").unwrap();
        assert_eq!(result.score, Score::new(0, 6));
    }

    #[test]
    fn score_rejects_length_mismatch() {
        let err = score_guess("123", "1234").unwrap_err();
        assert!(err.contains("3 digits"));
    }

    #[test]
    fn score_rejects_overlong_codes() {
        let long = "0".repeat(256);
        let err = score_guess(&long, &long).unwrap_err();
        assert!(err.starts_with("Invalid guess"));
        assert!(err.contains("256 digits"));

        let result = score_guess("0123456789", "0123456789").unwrap();
        assert_eq!(result.score, Score::new(10, 0));
        assert!(result.is_win);
    }

    #[test]
    fn score_rejects_bad_input() {
        assert!(score_guess("12a", "123").unwrap_err().starts_with("Invalid guess"));
        assert!(score_guess("123", "").unwrap_err().starts_with("Invalid secret"));
    }
}

//! Difficulty levels
//!
//! Difficulty decides the code length and whether digits may repeat.

use super::{Code, Digit};
use std::fmt;

/// Game difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// 3 digits, repeats allowed
    Easy,
    /// 4 distinct digits
    #[default]
    Hard,
}

/// Error type for guesses that break the difficulty rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    WrongLength { expected: usize, actual: usize },
    RepeatedDigit(Digit),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "Guess must be exactly {expected} digits, got {actual}")
            }
            Self::RepeatedDigit(_) => write!(f, "Duplicate digits not allowed in Hard mode!"),
        }
    }
}

impl std::error::Error for GuessError {}

impl Difficulty {
    /// Number of digits in a code
    #[inline]
    #[must_use]
    pub const fn code_length(self) -> usize {
        match self {
            Self::Easy => 3,
            Self::Hard => 4,
        }
    }

    /// Whether a code may contain the same digit more than once
    #[inline]
    #[must_use]
    pub const fn allows_duplicates(self) -> bool {
        matches!(self, Self::Easy)
    }

    /// Lowercase name used on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Hard => "hard",
        }
    }

    /// Check a guess against this difficulty's length and duplicate rules
    ///
    /// # Errors
    /// Returns `GuessError` if the length differs from [`code_length`] or, in Hard
    /// mode, if a digit repeats.
    ///
    /// [`code_length`]: Self::code_length
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::{Code, Difficulty};
    ///
    /// let guess = Code::parse("1123").unwrap();
    /// assert!(Difficulty::Hard.validate(&guess).is_err());
    /// assert!(Difficulty::Easy.validate(&Code::parse("112").unwrap()).is_ok());
    /// ```
    pub fn validate(self, code: &Code) -> Result<(), GuessError> {
        if code.len() != self.code_length() {
            return Err(GuessError::WrongLength {
                expected: self.code_length(),
                actual: code.len(),
            });
        }

        if !self.allows_duplicates()
            && let Some(digit) = code.first_repeated()
        {
            return Err(GuessError::RepeatedDigit(digit));
        }

        Ok(())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "e" => Ok(Self::Easy),
            "hard" | "h" => Ok(Self::Hard),
            _ => Err(format!("Unknown difficulty '{s}' (expected 'easy' or 'hard')")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_code_lengths() {
        assert_eq!(Difficulty::Easy.code_length(), 3);
        assert_eq!(Difficulty::Hard.code_length(), 4);
    }

    #[test]
    fn difficulty_duplicate_policy() {
        assert!(Difficulty::Easy.allows_duplicates());
        assert!(!Difficulty::Hard.allows_duplicates());
    }

    #[test]
    fn difficulty_default_is_hard() {
        assert_eq!(Difficulty::default(), Difficulty::Hard);
    }

    #[test]
    fn difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" e ".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert!("medium".parse::<Difficulty>().is_err());
    }

    #[test]
    fn difficulty_display() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }

    #[test]
    fn validate_length() {
        let short = Code::parse("123").unwrap();
        assert_eq!(
            Difficulty::Hard.validate(&short),
            Err(GuessError::WrongLength {
                expected: 4,
                actual: 3
            })
        );

        let long = Code::parse("1234").unwrap();
        assert_eq!(
            Difficulty::Easy.validate(&long),
            Err(GuessError::WrongLength {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn validate_duplicates_only_in_hard() {
        let repeated = Code::parse("5565").unwrap();
        assert_eq!(
            Difficulty::Hard.validate(&repeated),
            Err(GuessError::RepeatedDigit(Digit::new(5).unwrap()))
        );

        let easy_repeated = Code::parse("555").unwrap();
        assert!(Difficulty::Easy.validate(&easy_repeated).is_ok());
    }
}

//! Digit code representation
//!
//! A `Code` is an ordered sequence of digits. Secret codes and submitted guesses
//! share this type; difficulty rules are checked separately by [`Difficulty`].
//!
//! [`Difficulty`]: super::Difficulty

use super::Digit;
use rustc_hash::FxHashMap;
use std::fmt;

/// Longest code `parse` accepts
pub const MAX_CODE_LEN: usize = 10;

/// An ordered sequence of digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    digits: Vec<Digit>,
}

/// Error type for unparseable codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    Empty,
    InvalidCharacter(char),
    TooLong(usize),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Code must contain at least one digit"),
            Self::InvalidCharacter(ch) => {
                write!(f, "Code may only contain digits 0-9, found '{ch}'")
            }
            Self::TooLong(len) => {
                write!(f, "Code has {len} digits; at most {MAX_CODE_LEN} allowed")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from digits
    #[must_use]
    pub const fn new(digits: Vec<Digit>) -> Self {
        Self { digits }
    }

    /// Parse a code from a string of ASCII digits
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `CodeError` if the string is empty, contains a non-digit, or has
    /// more than [`MAX_CODE_LEN`] digits.
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::Code;
    ///
    /// let code = Code::parse("0427").unwrap();
    /// assert_eq!(code.len(), 4);
    /// assert_eq!(code.to_string(), "0427");
    ///
    /// assert!(Code::parse("12a4").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(CodeError::Empty);
        }

        let digits = trimmed
            .chars()
            .map(|ch| Digit::from_char(ch).ok_or(CodeError::InvalidCharacter(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        if digits.len() > MAX_CODE_LEN {
            return Err(CodeError::TooLong(digits.len()));
        }

        Ok(Self { digits })
    }

    /// Get the digits as a slice
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Number of digits in the code
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Whether the code has no digits
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Get the digit at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn digit_at(&self, position: usize) -> Digit {
        self.digits[position]
    }

    /// Check if the code contains a specific digit
    #[inline]
    #[must_use]
    pub fn contains(&self, digit: Digit) -> bool {
        self.digits.contains(&digit)
    }

    /// First digit that occurs more than once, if any
    #[must_use]
    pub fn first_repeated(&self) -> Option<Digit> {
        let mut seen = [false; 10];
        self.digits.iter().copied().find(|digit| {
            let slot = &mut seen[usize::from(digit.value())];
            std::mem::replace(slot, true)
        })
    }

    /// Whether any digit occurs more than once
    #[inline]
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.first_repeated().is_some()
    }

    /// Get the count of each digit in the code
    ///
    /// Used for scoring with repeated digits.
    #[inline]
    pub(crate) fn digit_counts(&self) -> FxHashMap<Digit, u8> {
        let mut counts = FxHashMap::default();
        for &digit in &self.digits {
            *counts.entry(digit).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn code_parse_valid() {
        let code = Code::parse("1234").unwrap();
        assert_eq!(code.digits(), &[d(1), d(2), d(3), d(4)]);
        assert_eq!(code.len(), 4);
        assert!(!code.is_empty());
    }

    #[test]
    fn code_parse_keeps_leading_zero() {
        let code = Code::parse("007").unwrap();
        assert_eq!(code.digits(), &[d(0), d(0), d(7)]);
        assert_eq!(code.to_string(), "007");
    }

    #[test]
    fn code_parse_trims_whitespace() {
        let code = Code::parse("  561\n").unwrap();
        assert_eq!(code.to_string(), "561");
    }

    #[test]
    fn code_parse_invalid() {
        assert_eq!(Code::parse(""), Err(CodeError::Empty));
        assert_eq!(Code::parse("   "), Err(CodeError::Empty));
        assert_eq!(Code::parse("12a4"), Err(CodeError::InvalidCharacter('a')));
        assert_eq!(Code::parse("1 2"), Err(CodeError::InvalidCharacter(' ')));
        assert_eq!(Code::parse("-123"), Err(CodeError::InvalidCharacter('-')));
    }

    #[test]
    fn code_parse_length_limit() {
        assert_eq!(Code::parse("0123456789").unwrap().len(), MAX_CODE_LEN);
        assert_eq!(Code::parse("01234567890"), Err(CodeError::TooLong(11)));
        assert_eq!(Code::parse(&"0".repeat(256)), Err(CodeError::TooLong(256)));
    }

    #[test]
    fn code_from_str_matches_parse() {
        let parsed: Code = "9081".parse().unwrap();
        assert_eq!(parsed, Code::parse("9081").unwrap());
    }

    #[test]
    fn code_digit_at_and_contains() {
        let code = Code::parse("5806").unwrap();
        assert_eq!(code.digit_at(0), d(5));
        assert_eq!(code.digit_at(3), d(6));
        assert!(code.contains(d(8)));
        assert!(!code.contains(d(1)));
    }

    #[test]
    fn code_duplicates() {
        assert!(!Code::parse("1234").unwrap().has_duplicates());
        assert!(Code::parse("556").unwrap().has_duplicates());
        assert_eq!(Code::parse("1231").unwrap().first_repeated(), Some(d(1)));
        assert_eq!(Code::parse("1223").unwrap().first_repeated(), Some(d(2)));
        assert_eq!(Code::parse("0123").unwrap().first_repeated(), None);
    }

    #[test]
    fn code_digit_counts() {
        let code = Code::parse("5565").unwrap();
        let counts = code.digit_counts();
        assert_eq!(counts.get(&d(5)), Some(&3));
        assert_eq!(counts.get(&d(6)), Some(&1));
        assert_eq!(counts.get(&d(0)), None);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn code_digit_counts_all_unique() {
        let counts = Code::parse("0987").unwrap().digit_counts();
        assert_eq!(counts.len(), 4);
        assert!(counts.values().all(|&count| count == 1));
    }
}

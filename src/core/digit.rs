//! Single code digit
//!
//! A `Digit` is a validated value in the range 0-9.

use std::fmt;

/// A single digit of a secret code or guess (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Every digit in ascending order
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Create a digit from a numeric value
    ///
    /// Returns `None` if value > 9.
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value < 10 { Some(Self(value)) } else { None }
    }

    /// Parse a digit from an ASCII character ('0'-'9')
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::Digit;
    ///
    /// assert_eq!(Digit::from_char('7').map(Digit::value), Some(7));
    /// assert!(Digit::from_char('x').is_none());
    /// ```
    #[inline]
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|value| Self(value as u8))
    }

    /// Get the numeric value (0-9)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Get the digit as an ASCII character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

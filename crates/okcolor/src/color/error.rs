//! Error types for parsing color values

use std::fmt;

/// Error returned by `Rgb888::from_str` for malformed hex color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseColorError {
    /// Wrong number of hex digits after the optional `#` (3 or 6 expected)
    InvalidLength(usize),
    /// A character that is not a hex digit
    InvalidDigit(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength(len) => {
                write!(f, "expected 3 or 6 hex digits, found {}", len)
            }
            ParseColorError::InvalidDigit(c) => write!(f, "invalid hex digit {:?}", c),
        }
    }
}

impl std::error::Error for ParseColorError {}

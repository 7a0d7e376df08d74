//! Errors reported by the checked digit parsers.

use thiserror::Error;

/// Alias for a `Result` with the error type `sonic_atoi::ParseError`.
pub type Result<T> = core::result::Result<T, ParseError>;

/// The reasons a checked parse can reject its input.
///
/// Every variant is detected before a value is produced, so a failed parse
/// never leaves a partial result behind.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseError {
    /// The input slice was empty.
    #[error("empty input")]
    EmptyInput,

    /// The input holds more digits than a `u64` can ever need.
    #[error("length {len} is out of range, expected 1..=20 digits")]
    LengthOutOfRange { len: usize },

    /// A byte outside `'0'..='9'` was found. `index` is the position of the
    /// first such byte.
    #[error("invalid digit {byte:#04x} at index {index}")]
    InvalidDigit { index: usize, byte: u8 },

    /// Twenty digits whose value is larger than `u64::MAX`.
    #[error("number overflows u64")]
    Overflow,
}

impl ParseError {
    /// Stable numeric code for the error, used across the C ABI.
    /// `0` is reserved for success.
    pub const fn code(&self) -> i32 {
        match self {
            ParseError::EmptyInput => 1,
            ParseError::LengthOutOfRange { .. } => 2,
            ParseError::InvalidDigit { .. } => 3,
            ParseError::Overflow => 4,
        }
    }

    /// Returns true if the input was rejected because of its length alone.
    pub fn is_length(&self) -> bool {
        matches!(
            self,
            ParseError::EmptyInput | ParseError::LengthOutOfRange { .. }
        )
    }
}

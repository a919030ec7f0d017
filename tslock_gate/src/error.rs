//! Errors raised when raw values are turned into fixed-width bit vectors.
//!
//! The gate itself never fails; these only appear at the edges where
//! integers or text enter the model.

use thiserror::Error;

/// Failure to build a [`crate::BitVector`] from an integer or a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitVectorError {
    /// The integer has bits set above the vector width.
    #[error("value {value:#x} does not fit in {width} bits")]
    OutOfRange {
        /// Offending value.
        value: u64,
        /// Width of the target vector.
        width: usize,
    },
    /// The binary string has the wrong number of digits.
    #[error("expected {expected} binary digits, found {found}")]
    WrongLength {
        /// Width of the target vector.
        expected: usize,
        /// Digits present in the input.
        found: usize,
    },
    /// A character other than `0` or `1` appeared.
    #[error("invalid binary digit {digit:?} at position {position}")]
    InvalidDigit {
        /// The rejected character.
        digit: char,
        /// Zero-based digit position, MSB first.
        position: usize,
    },
}

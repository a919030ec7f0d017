//! Fixed-width multi-bit values carried on the gate's input and output.
//!
//! A [`BitVector<N>`] stores up to 64 bits in a `u64`. The width is a const
//! generic so every gate instance is tied to one bus width at compile time.

use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use contracts::*;
use serde::{Serialize, Serializer};

use crate::BitVectorError;

/// An unsigned value exactly `N` bits wide (`1 <= N <= 64`).
///
/// Bits above `N` are always clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitVector<const N: usize> {
    /// Raw storage, masked to `N` bits.
    bits: u64,
}

impl<const N: usize> BitVector<N> {
    /// Number of bits in the vector.
    pub const WIDTH: usize = N;

    /// Mask with the low `N` bits set.
    pub const MASK: u64 = if N >= 64 { u64::MAX } else { (1u64 << N) - 1 };

    /// Rejects widths that cannot be stored.
    const VALID_WIDTH: () = assert!(N >= 1 && N <= 64, "bit vector width must be in 1..=64");

    /// The all-zero vector.
    #[must_use]
    pub const fn zero() -> Self {
        let () = Self::VALID_WIDTH;
        Self { bits: 0 }
    }

    /// The all-ones vector.
    #[must_use]
    pub const fn ones() -> Self {
        let () = Self::VALID_WIDTH;
        Self { bits: Self::MASK }
    }

    /// Builds a vector from `value`, rejecting bits above the width.
    pub const fn new(value: u64) -> Result<Self, BitVectorError> {
        let () = Self::VALID_WIDTH;
        if value & !Self::MASK != 0 {
            return Err(BitVectorError::OutOfRange { value, width: N });
        }
        Ok(Self { bits: value })
    }

    /// Builds a vector from the low `N` bits of `value`, discarding the rest.
    #[must_use]
    #[ensures(ret.bits == value & Self::MASK)]
    pub fn truncate(value: u64) -> Self {
        let () = Self::VALID_WIDTH;
        Self {
            bits: value & Self::MASK,
        }
    }

    /// The value as an integer.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.bits
    }

    /// Bit `index`, counted from the least significant bit.
    ///
    /// Returns `None` past the width.
    #[must_use]
    pub const fn bit(&self, index: usize) -> Option<bool> {
        if index >= N {
            return None;
        }
        Some((self.bits >> index) & 1 == 1)
    }

    /// True when no bit is set.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.bits == 0
    }

    /// Number of set bits.
    #[must_use]
    pub const fn count_ones(&self) -> u32 {
        self.bits.count_ones()
    }
}

impl<const N: usize> Default for BitVector<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> Not for BitVector<N> {
    type Output = Self;

    /// Flips all `N` bits.
    fn not(self) -> Self::Output {
        let () = Self::VALID_WIDTH;
        Self {
            bits: !self.bits & Self::MASK,
        }
    }
}

impl<const N: usize> TryFrom<u64> for BitVector<N> {
    type Error = BitVectorError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const N: usize> From<BitVector<N>> for u64 {
    fn from(v: BitVector<N>) -> Self {
        v.bits
    }
}

impl<const N: usize> fmt::Display for BitVector<N> {
    /// Exactly `N` binary digits, most significant first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.bits, width = N)
    }
}

impl<const N: usize> fmt::Binary for BitVector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<const N: usize> FromStr for BitVector<N> {
    type Err = BitVectorError;

    /// Parses `N` binary digits, MSB first. A leading `0b` and `_`
    /// separators are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.strip_prefix("0b").unwrap_or(s);
        let digits: Vec<char> = body.chars().filter(|c| *c != '_').collect();

        if digits.len() != N {
            return Err(BitVectorError::WrongLength {
                expected: N,
                found: digits.len(),
            });
        }

        let mut bits = 0u64;
        for (position, digit) in digits.into_iter().enumerate() {
            let bit = match digit {
                '0' => 0,
                '1' => 1,
                _ => return Err(BitVectorError::InvalidDigit { digit, position }),
            };
            bits = (bits << 1) | bit;
        }
        Self::new(bits)
    }
}

impl<const N: usize> Serialize for BitVector<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

//! Errors raised while building or dividing a [`BigNat`](crate::BigNat).

use thiserror::Error;

use crate::big_nat_constants::{MAX_RADIX, MIN_RADIX, RADIX};

/// The two broad classes every [`BigNatError`] falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value, limb, divisor or radix outside its domain.
    Range,
    /// Text containing a character that is not a digit of the radix.
    Format,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BigNatError {
    #[error("limb {0} is out of range [0, {})", RADIX)]
    LimbOutOfRange(u32),

    #[error("negative value {0} is not a natural number")]
    Negative(i128),

    #[error("radix {0} is out of range [{}, {}]", MIN_RADIX, MAX_RADIX)]
    RadixOutOfRange(u32),

    #[error("digit {digit} is out of range for radix {radix}")]
    DigitOutOfRange { digit: u32, radix: u32 },

    #[error("divisor {0} is out of range (0, {})", RADIX)]
    DivisorOutOfRange(u32),

    #[error("value does not fit in {0}")]
    ValueTooLarge(&'static str),

    #[error("invalid digit {ch:?} at position {pos} for radix {radix}")]
    InvalidDigit { ch: char, pos: usize, radix: u32 },

    #[error("cannot parse a natural number from an empty string")]
    Empty,
}

impl BigNatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BigNatError::InvalidDigit { .. } | BigNatError::Empty => ErrorKind::Format,
            _ => ErrorKind::Range,
        }
    }
}

pub type Result<T> = std::result::Result<T, BigNatError>;

use thiserror::Error;

/// Errors surfaced by the fallible public operations.
///
/// Kernel routines never fail on well-formed inputs; everything reported here
/// is detectable at the public boundary (parsing, formatting, division).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A character in the input is not a digit of the requested base.
    #[error("invalid digit {digit:?} for base {base}")]
    InvalidDigit { digit: char, base: u16 },
    /// The input held no digits at all.
    #[error("cannot parse an integer from an empty string")]
    EmptyInput,
    /// Division or remainder by a zero value.
    #[error("division by zero")]
    DivisionByZero,
    /// Requested base outside `2..=64`.
    #[error("base {0} is outside the supported range 2..=64")]
    UnsupportedBase(u16),
}

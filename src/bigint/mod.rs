//! The signed arbitrary-precision integer type and its companions.

mod arith;
mod div;
mod fib;
mod kernel;
mod math;
mod mul;
mod radix;

pub use fib::{fibonacci, fibonacci_with};
pub use math::{binomial, factorial, gcd, is_prime, lcm, power, sqrt};

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

use kernel::Limb;

/// Sign of a [`BigInt`]; zero is always `Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub(crate) fn combine(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    pub(crate) fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// A signed integer of unbounded magnitude.
///
/// Stored as a sign plus a little-endian sequence of 64-bit limbs in
/// canonical form: no trailing zero limb unless the value is zero, and zero
/// always carries a positive sign. Values are plain data; cloning deep-copies
/// the magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    magnitude: Vec<Limb>,
}

impl BigInt {
    /// Build from raw parts, normalizing the sign of zero.
    pub(crate) fn from_parts(sign: Sign, magnitude: Vec<Limb>) -> Self {
        debug_assert!(!magnitude.is_empty());
        debug_assert!(magnitude.len() == 1 || magnitude.last() != Some(&0));
        let sign = if kernel::is_zero(&magnitude) {
            Sign::Positive
        } else {
            sign
        };
        BigInt { sign, magnitude }
    }

    /// Non-negative value from a window of limbs; tolerates an empty slice
    /// and trailing zeros.
    pub(crate) fn from_slice(limbs: &[Limb]) -> Self {
        let mut magnitude = limbs.to_vec();
        if magnitude.is_empty() {
            magnitude.push(0);
        }
        kernel::trim(&mut magnitude);
        BigInt {
            sign: Sign::Positive,
            magnitude,
        }
    }

    pub(crate) fn magnitude(&self) -> &[Limb] {
        &self.magnitude
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        kernel::is_zero(&self.magnitude)
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive && !self.is_zero()
    }

    pub fn is_even(&self) -> bool {
        self.magnitude[0] & 1 == 0
    }

    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// The number of bits required to represent the magnitude; 0 for zero.
    pub fn bit_length(&self) -> usize {
        kernel::bit_length(&self.magnitude)
    }

    /// The absolute value.
    pub fn abs(&self) -> BigInt {
        BigInt {
            sign: Sign::Positive,
            magnitude: self.magnitude.clone(),
        }
    }

    /// Quotient and remainder in one pass, truncating toward zero: the
    /// quotient sign is the product of the operand signs and a non-zero
    /// remainder takes the sign of `self`.
    pub fn divmod(&self, rhs: &BigInt) -> Result<(BigInt, BigInt), Error> {
        let (quotient, remainder) = div::divide(&self.magnitude, &rhs.magnitude)?;
        Ok((
            BigInt::from_parts(self.sign.combine(rhs.sign), quotient),
            BigInt::from_parts(self.sign, remainder),
        ))
    }

    /// In-place `self += 1`, crossing zero correctly and growing the
    /// magnitude when the carry passes the top limb.
    pub fn increment(&mut self) {
        match self.sign {
            Sign::Positive => {
                for s in self.magnitude.iter_mut() {
                    if *s < Limb::MAX {
                        *s += 1;
                        return;
                    }
                    *s = 0;
                }
                self.magnitude.push(1);
            }
            Sign::Negative => {
                if self.magnitude.len() == 1 && self.magnitude[0] == 1 {
                    self.magnitude[0] = 0;
                    self.sign = Sign::Positive;
                    return;
                }
                for s in self.magnitude.iter_mut() {
                    if *s > 0 {
                        *s -= 1;
                        break;
                    }
                    *s = Limb::MAX;
                }
                kernel::trim(&mut self.magnitude);
            }
        }
    }

    /// In-place `self -= 1`, the mirror image of [`BigInt::increment`].
    pub fn decrement(&mut self) {
        if self.is_zero() {
            self.magnitude[0] = 1;
            self.sign = Sign::Negative;
            return;
        }
        match self.sign {
            Sign::Negative => {
                for s in self.magnitude.iter_mut() {
                    if *s < Limb::MAX {
                        *s += 1;
                        return;
                    }
                    *s = 0;
                }
                self.magnitude.push(1);
            }
            Sign::Positive => {
                for s in self.magnitude.iter_mut() {
                    if *s > 0 {
                        *s -= 1;
                        break;
                    }
                    *s = Limb::MAX;
                }
                kernel::trim(&mut self.magnitude);
            }
        }
    }

    /// Parse from text in any base `2..=64` using the alphabet
    /// `0-9 A-Z a-z - _`, with an optional leading `-` sign.
    pub fn from_str_radix(input: &str, base: u16) -> Result<BigInt, Error> {
        radix::parse(input, base)
    }

    /// Render in any base `2..=64`; negative values get a leading `-`.
    pub fn to_string_radix(&self, base: u16) -> Result<String, Error> {
        if !(2..=64).contains(&base) {
            return Err(Error::UnsupportedBase(base));
        }
        Ok(radix::emit(self, base))
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt {
            sign: Sign::Positive,
            magnitude: vec![0],
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($uX:ty),+) => {$(
        impl From<$uX> for BigInt {
            fn from(value: $uX) -> Self {
                BigInt {
                    sign: Sign::Positive,
                    magnitude: vec![value as Limb],
                }
            }
        }
    )+};
}

macro_rules! impl_from_signed {
    ($($iX:ty),+) => {$(
        impl From<$iX> for BigInt {
            fn from(value: $iX) -> Self {
                let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
                BigInt {
                    sign,
                    magnitude: vec![value.unsigned_abs() as Limb],
                }
            }
        }
    )+};
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

impl From<u128> for BigInt {
    fn from(value: u128) -> Self {
        let mut magnitude = vec![value as Limb, (value >> kernel::LIMB_BITS) as Limb];
        kernel::trim(&mut magnitude);
        BigInt {
            sign: Sign::Positive,
            magnitude,
        }
    }
}

impl From<i128> for BigInt {
    fn from(value: i128) -> Self {
        let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
        let abs = value.unsigned_abs();
        let mut magnitude = vec![abs as Limb, (abs >> kernel::LIMB_BITS) as Limb];
        kernel::trim(&mut magnitude);
        BigInt { sign, magnitude }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => kernel::compare(&self.magnitude, &other.magnitude),
            (Sign::Negative, Sign::Negative) => kernel::compare(&other.magnitude, &self.magnitude),
        }
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        radix::parse(s, 10)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&radix::emit(self, 10))
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&radix::emit(self, 2))
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&radix::emit(self, 8))
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = radix::emit(self, 16);
        digits.make_ascii_lowercase();
        f.write_str(&digits)
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&radix::emit(self, 16))
    }
}

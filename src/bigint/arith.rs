//! Operator implementations for [`BigInt`].
//!
//! Signed operations decompose into a sign decision plus an unsigned
//! magnitude operation: equal signs add magnitudes, opposite signs subtract
//! the smaller magnitude from the larger one and take the larger operand's
//! sign, and a zero result always normalizes to positive.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

use super::kernel::{self, Limb};
use super::{mul, BigInt, Sign};

fn add_magnitudes(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let mut sum = vec![0; a.len().max(b.len()) + 1];
    kernel::add(&mut sum, a, b);
    kernel::trim(&mut sum);
    sum
}

fn sub_magnitudes(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let mut delta = vec![0; a.len().max(b.len())];
    kernel::sub(&mut delta, a, b);
    kernel::trim(&mut delta);
    delta
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        if self.sign == rhs.sign {
            let magnitude = add_magnitudes(&self.magnitude, &rhs.magnitude);
            BigInt::from_parts(self.sign, magnitude)
        } else {
            match kernel::compare(&self.magnitude, &rhs.magnitude) {
                Ordering::Equal => BigInt::default(),
                Ordering::Greater => BigInt::from_parts(
                    self.sign,
                    sub_magnitudes(&self.magnitude, &rhs.magnitude),
                ),
                Ordering::Less => BigInt::from_parts(
                    rhs.sign,
                    sub_magnitudes(&rhs.magnitude, &self.magnitude),
                ),
            }
        }
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        if self.sign != rhs.sign {
            let magnitude = add_magnitudes(&self.magnitude, &rhs.magnitude);
            BigInt::from_parts(self.sign, magnitude)
        } else {
            match kernel::compare(&self.magnitude, &rhs.magnitude) {
                Ordering::Equal => BigInt::default(),
                Ordering::Greater => BigInt::from_parts(
                    self.sign,
                    sub_magnitudes(&self.magnitude, &rhs.magnitude),
                ),
                Ordering::Less => BigInt::from_parts(
                    self.sign.flip(),
                    sub_magnitudes(&rhs.magnitude, &self.magnitude),
                ),
            }
        }
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        let magnitude = mul::multiply(&self.magnitude, &rhs.magnitude);
        BigInt::from_parts(self.sign.combine(rhs.sign), magnitude)
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> BigInt {
        match self.divmod(rhs) {
            Ok((quotient, _)) => quotient,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> BigInt {
        match self.divmod(rhs) {
            Ok((_, remainder)) => remainder,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                (&self).$method(rhs)
            }
        }

        impl $trait<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                self.$method(&rhs)
            }
        }
    };
}

macro_rules! forward_binop_assign {
    ($trait:ident, $method:ident, $op:ident) => {
        impl $trait<BigInt> for BigInt {
            fn $method(&mut self, rhs: BigInt) {
                *self = (&*self).$op(&rhs);
            }
        }

        impl $trait<&BigInt> for BigInt {
            fn $method(&mut self, rhs: &BigInt) {
                *self = (&*self).$op(rhs);
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);
forward_binop!(Rem, rem);

forward_binop_assign!(AddAssign, add_assign, add);
forward_binop_assign!(SubAssign, sub_assign, sub);
forward_binop_assign!(MulAssign, mul_assign, mul);
forward_binop_assign!(DivAssign, div_assign, div);
forward_binop_assign!(RemAssign, rem_assign, rem);

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_parts(self.sign.flip(), self.magnitude.clone())
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_parts(self.sign.flip(), self.magnitude)
    }
}

impl Shl<usize> for &BigInt {
    type Output = BigInt;

    fn shl(self, rhs: usize) -> BigInt {
        let mut magnitude = self.magnitude.clone();
        kernel::shift_left(&mut magnitude, rhs);
        BigInt::from_parts(self.sign, magnitude)
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    fn shl(mut self, rhs: usize) -> BigInt {
        kernel::shift_left(&mut self.magnitude, rhs);
        self
    }
}

impl ShlAssign<usize> for BigInt {
    fn shl_assign(&mut self, rhs: usize) {
        kernel::shift_left(&mut self.magnitude, rhs);
    }
}

impl Shr<usize> for &BigInt {
    type Output = BigInt;

    fn shr(self, rhs: usize) -> BigInt {
        let mut magnitude = self.magnitude.clone();
        kernel::shift_right(&mut magnitude, rhs);
        BigInt::from_parts(self.sign, magnitude)
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    fn shr(self, rhs: usize) -> BigInt {
        &self >> rhs
    }
}

impl ShrAssign<usize> for BigInt {
    fn shr_assign(&mut self, rhs: usize) {
        kernel::shift_right(&mut self.magnitude, rhs);
        if kernel::is_zero(&self.magnitude) {
            self.sign = Sign::Positive;
        }
    }
}

impl Mul<Limb> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Limb) -> BigInt {
        let mut magnitude = self.magnitude.clone();
        kernel::mul_add_limb(&mut magnitude, rhs, 0);
        kernel::trim(&mut magnitude);
        BigInt::from_parts(self.sign, magnitude)
    }
}

impl Mul<Limb> for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Limb) -> BigInt {
        &self * rhs
    }
}

/// Truncating single-limb division; used where the division is known exact.
impl Div<Limb> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: Limb) -> BigInt {
        let (quotient, _) = kernel::short_divide(&self.magnitude, rhs);
        BigInt::from_parts(self.sign, quotient)
    }
}

impl Div<Limb> for BigInt {
    type Output = BigInt;

    fn div(self, rhs: Limb) -> BigInt {
        &self / rhs
    }
}

//! Magnitude long division.
//!
//! Knuth, The Art of Computer Programming vol. 2, section 4.3.1, Algorithm D:
//! both operands are shifted left until the divisor's top bit is set, which
//! bounds the two-limb trial digit's error at two, fixed by the add-back
//! loop. Single-limb divisors take a one-pass short division instead.

use std::cmp::Ordering;

use crate::error::Error;

use super::kernel::{self, Limb, WideLimb, LIMB_BITS};

/// `(quotient, remainder)` with `a = q * b + r` and `0 <= r < b`, both
/// trimmed. Fails only when `b` is zero.
pub(crate) fn divide(a: &[Limb], b: &[Limb]) -> Result<(Vec<Limb>, Vec<Limb>), Error> {
    if kernel::is_zero(b) {
        return Err(Error::DivisionByZero);
    }
    if b.len() == 1 {
        let (quotient, remainder) = kernel::short_divide(a, b[0]);
        return Ok((quotient, vec![remainder]));
    }
    if kernel::compare(a, b) == Ordering::Less {
        let mut remainder = a.to_vec();
        kernel::trim(&mut remainder);
        return Ok((vec![0], remainder));
    }

    // normalize so the divisor's top bit is set
    let shift = b[b.len() - 1].leading_zeros() as usize;
    let mut dividend = a.to_vec();
    kernel::shift_left(&mut dividend, shift);
    dividend.resize(a.len() + 1, 0);
    let mut divisor = b.to_vec();
    kernel::shift_left(&mut divisor, shift);
    debug_assert_eq!(divisor.len(), b.len());

    let n = divisor.len();
    let m = dividend.len() - 1 - n;
    let mut quotient = vec![0; m + 1];
    let top = divisor[n - 1] as WideLimb;

    for j in (0..=m).rev() {
        let head =
            ((dividend[j + n] as WideLimb) << LIMB_BITS) | dividend[j + n - 1] as WideLimb;
        let mut digit = (head / top).min(Limb::MAX as WideLimb) as Limb;
        if digit > 0 {
            let mut short = mul_sub(&mut dividend[j..=j + n], &divisor, digit);
            while short {
                digit -= 1;
                short = !add_back(&mut dividend[j..=j + n], &divisor);
            }
        }
        quotient[j] = digit;
    }

    let mut remainder = dividend;
    remainder.truncate(n);
    kernel::shift_right(&mut remainder, shift);
    kernel::trim(&mut quotient);
    Ok((quotient, remainder))
}

/// Subtract `digit * divisor` from the window; returns whether the window
/// went negative (the trial digit was too large).
fn mul_sub(window: &mut [Limb], divisor: &[Limb], digit: Limb) -> bool {
    debug_assert_eq!(window.len(), divisor.len() + 1);
    let mut mul_carry: Limb = 0;
    let mut borrow = false;
    for (w, &d) in window.iter_mut().zip(divisor) {
        let (low, high) = kernel::carrying_mul(d, digit, mul_carry);
        mul_carry = high;
        let (diff, b) = kernel::borrowing_sub(*w, low, borrow);
        *w = diff;
        borrow = b;
    }
    let last = window.len() - 1;
    let (diff, b) = kernel::borrowing_sub(window[last], mul_carry, borrow);
    window[last] = diff;
    b
}

/// Add the divisor back into the window; a carry out of the top limb cancels
/// the earlier borrow.
fn add_back(window: &mut [Limb], divisor: &[Limb]) -> bool {
    let mut carry = false;
    for (w, &d) in window.iter_mut().zip(divisor) {
        let (sum, c) = kernel::carrying_add(*w, d, carry);
        *w = sum;
        carry = c;
    }
    let last = window.len() - 1;
    let (sum, c) = kernel::carrying_add(window[last], 0, carry);
    window[last] = sum;
    c
}

//! Magnitude multiplication: schoolbook, Karatsuba and Toom-3, selected by
//! operand size.
//!
//! Every routine here accumulates into a pre-zeroed destination window, so
//! sub-products can be placed directly at their offsets without temporaries
//! for the aligned parts.

use super::kernel::{self, Limb};
use super::BigInt;

const KARATSUBA_THRESHOLD: usize = 128;
const TOOM3_THRESHOLD: usize = 10_000;

/// Allocate and fill `a * b`, trimmed to canonical form.
pub(crate) fn multiply(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let mut product = vec![0; a.len() + b.len()];
    mult(&mut product, a, b);
    kernel::trim(&mut product);
    product
}

/// Dispatch on the shorter operand's length. Toom-3 additionally requires the
/// lengths to be within a 5:6 ratio of each other.
pub(crate) fn mult(product: &mut [Limb], a: &[Limb], b: &[Limb]) {
    debug_assert!(product.len() >= a.len() + b.len());
    let short = a.len().min(b.len());
    if short >= TOOM3_THRESHOLD && a.len() * 6 >= b.len() * 5 && a.len() * 5 <= b.len() * 6 {
        mult_toom3(product, a, b);
    } else if short >= KARATSUBA_THRESHOLD {
        mult_karatsuba(product, a, b);
    } else {
        mult_vanilla(product, a, b);
    }
}

/// Classical O(n*m) row accumulation with a 128-bit product window.
pub(crate) fn mult_vanilla(product: &mut [Limb], a: &[Limb], b: &[Limb]) {
    for (i, &factor) in b.iter().enumerate() {
        let mut carry: Limb = 0;
        for (j, &x) in a.iter().enumerate() {
            let (low, high) = kernel::carrying_mul(x, factor, carry);
            let (sum, overflowed) = product[i + j].overflowing_add(low);
            product[i + j] = sum;
            carry = high + Limb::from(overflowed);
        }
        product[i + a.len()] += carry;
    }
}

/// 2-way split. With `s = ceil(min(|a|, |b|) / 2)` and `B = 2^64`:
///
/// ```text
/// a = a_hi * B^s + a_lo,  b = b_hi * B^s + b_lo
/// a * b = lo + ((a_lo + a_hi)(b_lo + b_hi) - lo - hi) * B^s + hi * B^2s
/// ```
///
/// `lo` and `hi` land directly in the output; the middle term is added at
/// offset `s` and then `lo + hi` is subtracted back out at the same offset.
pub(crate) fn mult_karatsuba(product: &mut [Limb], a: &[Limb], b: &[Limb]) {
    let short = a.len().min(b.len());
    let split = short - short / 2;
    let split_p = 2 * split;

    let (a_lo, a_hi) = a.split_at(split);
    let (b_lo, b_hi) = b.split_at(split);

    {
        let (low_part, high_part) = product.split_at_mut(split_p);
        mult(low_part, a_lo, b_lo);
        mult(high_part, a_hi, b_hi);
    }

    let mut a_sum = vec![0; a_lo.len().max(a_hi.len()) + 1];
    let mut b_sum = vec![0; b_lo.len().max(b_hi.len()) + 1];
    kernel::add(&mut a_sum, a_lo, a_hi);
    kernel::add(&mut b_sum, b_lo, b_hi);
    let mut middle = vec![0; a_sum.len() + b_sum.len()];
    mult(&mut middle, &a_sum, &b_sum);

    // lo + hi, read out of the product before the middle lands on top
    let mut outer = {
        let (low_part, high_part) = product.split_at(split_p);
        let mut outer = vec![0; low_part.len().max(high_part.len()) + 1];
        kernel::add(&mut outer, low_part, high_part);
        outer
    };
    kernel::trim(&mut outer);

    kernel::add_into(&mut product[split..], &middle);
    kernel::sub_from(&mut product[split..], &outer);
}

/// 3-way split (Toom-Cook). The operands become degree-2 polynomials in
/// `B^t`, evaluated at {0, 1, -1, 2, inf}; the five pointwise products
/// interpolate the five coefficients of the result polynomial. The
/// interpolation runs on signed values since `P(-1)` can be negative.
pub(crate) fn mult_toom3(product: &mut [Limb], a: &[Limb], b: &[Limb]) {
    let part = (a.len().min(b.len()) + 2) / 3;
    debug_assert!(a.len() > 2 * part && b.len() > 2 * part);

    let a0 = BigInt::from_slice(&a[..part]);
    let a1 = BigInt::from_slice(&a[part..2 * part]);
    let a2 = BigInt::from_slice(&a[2 * part..]);
    let b0 = BigInt::from_slice(&b[..part]);
    let b1 = BigInt::from_slice(&b[part..2 * part]);
    let b2 = BigInt::from_slice(&b[2 * part..]);

    // A and B evaluated at 1, -1 and 2
    let at1_a = &a2 + &a1 + &a0;
    let at1_b = &b2 + &b1 + &b0;
    let atm1_a = &a2 + &a0 - &a1;
    let atm1_b = &b2 + &b0 - &b1;
    let at2_a = (&a2 << 2) + (&a1 << 1) + &a0;
    let at2_b = (&b2 << 2) + (&b1 << 1) + &b0;

    let p1 = &at1_a * &at1_b;
    let pm1 = &atm1_a * &atm1_b;
    let p2 = &at2_a * &at2_b;
    let c0 = &a0 * &b0;
    let c4 = &a2 * &b2;

    let ends = &c0 + &c4;
    let c2 = ((&pm1 + &p1) >> 1) - &ends;
    let c3 = {
        let mut t = &p2 + &c0;
        t -= &c4 * 14;
        t -= (&c2 + &p1) << 1;
        t / 6
    };
    let c1 = &p1 - &ends - &c2 - &c3;

    debug_assert!(!c1.is_negative() && !c2.is_negative() && !c3.is_negative());

    kernel::add_into(product, c0.magnitude());
    kernel::add_into(&mut product[part..], c1.magnitude());
    kernel::add_into(&mut product[2 * part..], c2.magnitude());
    kernel::add_into(&mut product[3 * part..], c3.magnitude());
    kernel::add_into(&mut product[4 * part..], c4.magnitude());
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn random_limbs(rng: &mut StdRng, len: usize) -> Vec<Limb> {
        let mut limbs: Vec<Limb> = (0..len).map(|_| rng.gen()).collect();
        if let Some(top) = limbs.last_mut() {
            *top |= 1 << 63; // keep the operand canonical
        }
        limbs
    }

    fn vanilla(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
        let mut product = vec![0; a.len() + b.len()];
        mult_vanilla(&mut product, a, b);
        kernel::trim(&mut product);
        product
    }

    #[test]
    fn test_multiply_small() {
        assert_eq!(multiply(&[6], &[7]), vec![42]);
        assert_eq!(multiply(&[0], &[7]), vec![0]);
        assert_eq!(multiply(&[u64::MAX], &[u64::MAX]), vec![1, u64::MAX - 1]);
        assert_eq!(multiply(&[0, 1], &[10]), vec![0, 10]);
    }

    #[test]
    fn test_multiply_known_square() {
        let a = [
            0xb4830d2b3cc4b4bb,
            0x4d847515b57d26be,
            0xf140fe29591db8b1,
            0xbfc2c416d5e95510,
            0xc1c04b03907d23ff,
        ];
        let square = [
            0x623e80aee5ef8099,
            0xfe31042acea40485,
            0xa735be994a362d0d,
            0x592dc17e83bc9097,
            0x88fcd2b34c5b6749,
            0xa546f4d2292c911a,
            0xf623a0ab548f8545,
            0xe6b64acd44e6d989,
            0xa65707d712ccf8de,
            0x92a3818bfb3082b3,
        ];
        assert_eq!(multiply(&a, &a), square.to_vec());
    }

    #[test]
    fn test_karatsuba_matches_vanilla() {
        let mut rng = StdRng::seed_from_u64(0x5eed_0001);
        for (len_a, len_b) in [(150, 150), (151, 150), (130, 400), (333, 200)] {
            let a = random_limbs(&mut rng, len_a);
            let b = random_limbs(&mut rng, len_b);
            let mut karatsuba = vec![0; len_a + len_b];
            mult_karatsuba(&mut karatsuba, &a, &b);
            kernel::trim(&mut karatsuba);
            assert_eq!(karatsuba, vanilla(&a, &b), "{len_a} x {len_b}");
        }
    }

    #[test]
    fn test_toom3_matches_vanilla() {
        let mut rng = StdRng::seed_from_u64(0x5eed_0002);
        for (len_a, len_b) in [(240, 240), (241, 239), (250, 300), (300, 250)] {
            let a = random_limbs(&mut rng, len_a);
            let b = random_limbs(&mut rng, len_b);
            let mut toom3 = vec![0; len_a + len_b];
            mult_toom3(&mut toom3, &a, &b);
            kernel::trim(&mut toom3);
            assert_eq!(toom3, vanilla(&a, &b), "{len_a} x {len_b}");
        }
    }

    #[test]
    fn test_dispatcher_above_karatsuba_threshold() {
        let mut rng = StdRng::seed_from_u64(0x5eed_0003);
        let a = random_limbs(&mut rng, KARATSUBA_THRESHOLD + 5);
        let b = random_limbs(&mut rng, KARATSUBA_THRESHOLD + 2);
        assert_eq!(multiply(&a, &b), vanilla(&a, &b));
    }

    #[test]
    fn test_unbalanced_operands() {
        let mut rng = StdRng::seed_from_u64(0x5eed_0004);
        let a = random_limbs(&mut rng, 600);
        let b = random_limbs(&mut rng, 3);
        assert_eq!(multiply(&a, &b), vanilla(&a, &b));
        assert_eq!(multiply(&b, &a), vanilla(&b, &a));
    }
}

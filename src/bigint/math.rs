//! Number-theoretic helpers layered on the arithmetic core.

use super::kernel::{self, Limb};
use super::{mul, BigInt, Sign};

/// `n!` for every `n` where the result still fits in 64 bits.
const SMALL_FACTORIALS: [u64; 21] = [
    1,
    1,
    2,
    6,
    24,
    120,
    720,
    5040,
    40320,
    362880,
    3628800,
    39916800,
    479001600,
    6227020800,
    87178291200,
    1307674368000,
    20922789888000,
    355687428096000,
    6402373705728000,
    121645100408832000,
    2432902008176640000,
];

/// `n^p` by binary exponentiation; `0^0 = 1`. The result is negative exactly
/// when `n` is negative and `p` is odd.
pub fn power(n: &BigInt, p: u64) -> BigInt {
    let sign = if p & 1 == 1 { n.sign } else { Sign::Positive };
    let mut result = vec![1];
    let mut square = n.magnitude.clone();
    let mut exponent = p;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mul::multiply(&result, &square);
        }
        exponent >>= 1;
        if exponent > 0 {
            square = mul::multiply(&square, &square);
        }
    }
    BigInt::from_parts(sign, result)
}

/// `n!`.
///
/// Values through 20! come from a table. Above that the factorial splits as
/// `n! = odd * 2^(n - popcount(n))` where `odd` is the product of the odd
/// factor ladders `O(floor(n / 2^k))`, accumulated smallest range first so
/// the partial products that get multiplied are of similar size.
pub fn factorial(n: u64) -> BigInt {
    if n <= 20 {
        return BigInt::from(SMALL_FACTORIALS[n as usize]);
    }

    let mut limits = Vec::new();
    let mut m = n;
    while m >= 3 {
        limits.push(m);
        m >>= 1;
    }

    let mut result = vec![1];
    let mut cache = vec![1];
    let mut odd: u64 = 3;
    for &limit in limits.iter().rev() {
        let mut fresh = vec![1];
        while odd <= limit {
            kernel::mul_add_limb(&mut fresh, odd, 0);
            odd += 2;
        }
        cache = mul::multiply(&cache, &fresh);
        result = mul::multiply(&result, &cache);
    }

    kernel::shift_left(&mut result, (n - u64::from(n.count_ones())) as usize);
    BigInt::from_parts(Sign::Positive, result)
}

/// Binomial coefficient `C(n, k)`, computed over `min(k, n - k)` steps with
/// an exact division at each step to keep intermediates small.
pub fn binomial(n: u64, k: u64) -> BigInt {
    if k > n {
        return BigInt::default();
    }
    let k = k.min(n - k);
    let mut result = BigInt::from(1u64);
    for i in 1..=k {
        result = result * (n - k + i);
        result = result / i;
    }
    result
}

/// Greatest common divisor of the magnitudes, by Euclid's algorithm.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut x = a.abs();
    let mut y = b.abs();
    while !y.is_zero() {
        let r = &x % &y;
        x = y;
        y = r;
    }
    x
}

/// Least common multiple; `lcm(0, 0)` is defined as 0.
pub fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() && b.is_zero() {
        return BigInt::default();
    }
    let product = (a * b).abs();
    product / gcd(a, b)
}

/// Floor integer square root by Newton iteration, or `None` for negative
/// input. Starting above the root, the iteration decreases strictly until it
/// lands on the floor.
pub fn sqrt(n: &BigInt) -> Option<BigInt> {
    if n.is_negative() {
        return None;
    }
    if n.is_zero() {
        return Some(BigInt::default());
    }
    let mut guess = BigInt::from(1u64) << (n.bit_length() / 2 + 1);
    loop {
        let next = (&guess + &(n / &guess)) >> 1;
        if next >= guess {
            return Some(guess);
        }
        guess = next;
    }
}

/// Trial division by 2, 3 and then candidates of the form 6k +- 1 up to the
/// square root. Meant for small-to-moderate values.
pub fn is_prime(n: &BigInt) -> bool {
    if n.is_negative() {
        return false;
    }
    let two = BigInt::from(2u64);
    let three = BigInt::from(3u64);
    if *n < two {
        return false;
    }
    if *n == two || *n == three {
        return true;
    }
    if n.is_even() || remainder_by(n, 3) == 0 {
        return false;
    }
    let Some(limit) = sqrt(n) else {
        return false;
    };
    let mut candidate: u64 = 5;
    while BigInt::from(candidate) <= limit {
        if remainder_by(n, candidate) == 0 || remainder_by(n, candidate + 2) == 0 {
            return false;
        }
        candidate += 6;
    }
    true
}

fn remainder_by(n: &BigInt, divisor: Limb) -> Limb {
    let (_, remainder) = kernel::short_divide(&n.magnitude, divisor);
    remainder
}

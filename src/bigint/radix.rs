//! Text conversion in any base from 2 to 64.
//!
//! Digits come from the 64-character alphabet `0-9 A-Z a-z - _` (so `-` is
//! both the sign marker and digit 62; a leading `-` is always the sign).
//! Power-of-two bases walk the magnitude bit-wise from the top; other bases
//! go through chunks of `base^L` with `L` the largest power fitting a limb.

use crate::error::Error;

use super::kernel::{self, Limb, LIMB_BITS};
use super::{BigInt, Sign};

pub(crate) const DIGITS: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

pub(crate) fn parse(input: &str, base: u16) -> Result<BigInt, Error> {
    if !(2..=64).contains(&base) {
        return Err(Error::UnsupportedBase(base));
    }
    let (sign, digits) = match input.strip_prefix('-') {
        Some(rest) => (Sign::Negative, rest),
        None => (Sign::Positive, input),
    };
    if digits.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut magnitude = vec![0];
    for digit in digits.chars() {
        let value = digit_value(digit, base)?;
        kernel::mul_add_limb(&mut magnitude, base as Limb, value);
    }
    Ok(BigInt::from_parts(sign, magnitude))
}

fn digit_value(digit: char, base: u16) -> Result<Limb, Error> {
    let value = match digit {
        '0'..='9' => digit as u16 - '0' as u16,
        'A'..='Z' => digit as u16 - 'A' as u16 + 10,
        'a'..='z' => digit as u16 - 'a' as u16 + 36,
        '-' => 62,
        '_' => 63,
        _ => return Err(Error::InvalidDigit { digit, base }),
    };
    if value >= base {
        return Err(Error::InvalidDigit { digit, base });
    }
    Ok(value as Limb)
}

/// Render `n` in `base`; the base must already be validated.
pub(crate) fn emit(n: &BigInt, base: u16) -> String {
    debug_assert!((2..=64).contains(&base));
    if base.is_power_of_two() {
        return emit_pow2(n, base);
    }

    let mut out = String::new();
    if n.is_negative() {
        out.push('-');
    }

    let (big_base, chunk_len) = chunk_parameters(base);
    let mut chunks = Vec::new();
    let mut magnitude = n.magnitude.clone();
    while !kernel::is_zero(&magnitude) {
        let (rest, chunk) = kernel::short_divide(&magnitude, big_base);
        chunks.push(chunk);
        magnitude = rest;
    }
    if chunks.is_empty() {
        out.push('0');
        return out;
    }
    // top chunk unpadded, the rest zero-padded to the full chunk width
    for (i, &chunk) in chunks.iter().rev().enumerate() {
        let width = if i == 0 { 1 } else { chunk_len };
        push_chunk(&mut out, chunk, base, width);
    }
    out
}

/// Largest `base^L` that fits in a limb, together with `L`.
fn chunk_parameters(base: u16) -> (Limb, usize) {
    let mut power = base as Limb;
    let mut len = 1;
    while let Some(next) = power.checked_mul(base as Limb) {
        power = next;
        len += 1;
    }
    (power, len)
}

fn push_chunk(out: &mut String, chunk: Limb, base: u16, min_width: usize) {
    let mut digits = [0u8; 64];
    let mut len = 0;
    let mut rest = chunk;
    while rest > 0 || len < min_width {
        digits[len] = DIGITS[(rest % base as Limb) as usize];
        rest /= base as Limb;
        len += 1;
    }
    for &d in digits[..len].iter().rev() {
        out.push(d as char);
    }
}

/// Fast path for power-of-two bases: groups of `log2(base)` bits from the
/// most significant digit down, skipping leading zeros.
fn emit_pow2(n: &BigInt, base: u16) -> String {
    let bits = base.trailing_zeros() as usize;
    let mut out = String::new();
    if n.is_negative() {
        out.push('-');
    }
    let total = kernel::bit_length(&n.magnitude);
    if total == 0 {
        out.push('0');
        return out;
    }
    let count = (total + bits - 1) / bits;
    for i in (0..count).rev() {
        let value = extract_bits(&n.magnitude, i * bits, bits);
        out.push(DIGITS[value as usize] as char);
    }
    out
}

/// Read `count` bits starting at `position`, crossing one limb boundary at
/// most (`count` never exceeds 6).
fn extract_bits(m: &[Limb], position: usize, count: usize) -> Limb {
    let index = position / LIMB_BITS;
    let offset = position % LIMB_BITS;
    let mut value = m[index] >> offset;
    if offset + count > LIMB_BITS && index + 1 < m.len() {
        value |= m[index + 1] << (LIMB_BITS - offset);
    }
    value & ((1 << count) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(n("0"), BigInt::default());
        assert_eq!(n("42"), BigInt::from(42u64));
        assert_eq!(n("-42"), BigInt::from(-42i64));
        assert_eq!(n("18446744073709551616"), BigInt::from(1u128 << 64));
        // leading zeros are plain digits
        assert_eq!(n("000123"), BigInt::from(123u64));
        assert_eq!(n("-0"), BigInt::default());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            "12a4".parse::<BigInt>(),
            Err(Error::InvalidDigit {
                digit: 'a',
                base: 10
            })
        );
        assert_eq!("".parse::<BigInt>(), Err(Error::EmptyInput));
        assert_eq!("-".parse::<BigInt>(), Err(Error::EmptyInput));
        assert_eq!(
            "1 2".parse::<BigInt>(),
            Err(Error::InvalidDigit {
                digit: ' ',
                base: 10
            })
        );
    }

    #[test]
    fn test_parse_radix() {
        assert_eq!(BigInt::from_str_radix("ff", 16), Ok(BigInt::from(255u64)));
        assert_eq!(BigInt::from_str_radix("FF", 16), Ok(BigInt::from(255u64)));
        assert_eq!(BigInt::from_str_radix("101", 2), Ok(BigInt::from(5u64)));
        assert_eq!(BigInt::from_str_radix("-12", 3), Ok(BigInt::from(-5i64)));
        assert_eq!(
            BigInt::from_str_radix("z", 36),
            Err(Error::InvalidDigit {
                digit: 'z',
                base: 36
            })
        );
        assert_eq!(BigInt::from_str_radix("Z", 36), Ok(BigInt::from(35u64)));
        assert_eq!(BigInt::from_str_radix("z", 62), Ok(BigInt::from(61u64)));
        assert_eq!(BigInt::from_str_radix("_", 64), Ok(BigInt::from(63u64)));
        assert_eq!(BigInt::from_str_radix("1", 1), Err(Error::UnsupportedBase(1)));
        assert_eq!(BigInt::from_str_radix("1", 65), Err(Error::UnsupportedBase(65)));
    }

    #[test]
    fn test_emit_decimal() {
        assert_eq!(BigInt::default().to_string(), "0");
        assert_eq!(BigInt::from(-7i64).to_string(), "-7");
        assert_eq!(BigInt::from(1u128 << 64).to_string(), "18446744073709551616");
        // chunk boundary: exactly one full chunk of zeros after the top digit
        assert_eq!(
            n("10000000000000000000").to_string(),
            "10000000000000000000"
        );
        assert_eq!(
            n("123456789012345678901234567890").to_string(),
            "123456789012345678901234567890"
        );
    }

    #[test]
    fn test_emit_known_bases() {
        let value = n("123456789123456789123456789");
        assert_eq!(value.to_string_radix(36).unwrap(), "FIFVTHRV1MZT79EZ9");
        assert_eq!(value.to_string_radix(62).unwrap(), "9xC8wGNLFt2zTbJ");
        assert_eq!(
            value.to_string_radix(7).unwrap(),
            "5322513423516131053262320340301"
        );
        assert_eq!(BigInt::from(4095u64).to_string_radix(64).unwrap(), "__");
        assert_eq!(BigInt::from(62u64).to_string_radix(63).unwrap(), "-");
        assert_eq!(BigInt::from(5u64).to_string_radix(3).unwrap(), "12");
    }

    #[test]
    fn test_emit_pow2_bases() {
        let value = BigInt::from(255u64);
        assert_eq!(value.to_string_radix(2).unwrap(), "11111111");
        assert_eq!(value.to_string_radix(4).unwrap(), "3333");
        assert_eq!(value.to_string_radix(8).unwrap(), "377");
        assert_eq!(value.to_string_radix(16).unwrap(), "FF");
        assert_eq!(value.to_string_radix(32).unwrap(), "7V");

        let big = BigInt::from(1u128 << 64);
        assert_eq!(big.to_string_radix(16).unwrap(), "10000000000000000");
        assert_eq!(BigInt::default().to_string_radix(2).unwrap(), "0");
        assert_eq!(BigInt::from(-5i64).to_string_radix(2).unwrap(), "-101");
    }

    #[test]
    fn test_emit_base_bounds() {
        let value = BigInt::from(10u64);
        assert_eq!(value.to_string_radix(1), Err(Error::UnsupportedBase(1)));
        assert_eq!(value.to_string_radix(0), Err(Error::UnsupportedBase(0)));
        assert_eq!(value.to_string_radix(65), Err(Error::UnsupportedBase(65)));
    }

    #[test]
    fn test_round_trip_all_bases() {
        let samples = [
            "0",
            "1",
            "63",
            "64",
            "123456789123456789123456789",
            "-987654321987654321987654321987654321",
            "340282366920938463463374607431768211456",
        ];
        for base in 2..=62u16 {
            for sample in samples {
                let value = n(sample);
                let text = value.to_string_radix(base).unwrap();
                assert_eq!(
                    BigInt::from_str_radix(&text, base),
                    Ok(value),
                    "base {base}, sample {sample}"
                );
            }
        }
    }

    #[test]
    fn test_round_trip_top_bases_without_sign_digit() {
        // in bases 63 and 64 the digit `-` can only collide when it leads
        for base in [63u16, 64] {
            let value = n("123456789123456789123456789");
            let text = value.to_string_radix(base).unwrap();
            assert_eq!(BigInt::from_str_radix(&text, base), Ok(value));
        }
    }
}

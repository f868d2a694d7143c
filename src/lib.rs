//! Arbitrary-precision signed integer arithmetic.
//!
//! [`BigInt`] is a sign/magnitude value type over 64-bit limbs. Multiplication
//! dispatches between schoolbook, Karatsuba and Toom-3 by operand size,
//! division is normalized long division, and values convert to and from text
//! in any base from 2 to 64. A handful of number-theoretic helpers (power,
//! factorial, binomial, gcd/lcm, primality, generalized Fibonacci) sit on top
//! of the kernel.

pub mod bigint;
pub mod error;

pub use bigint::{
    binomial, factorial, fibonacci, fibonacci_with, gcd, is_prime, lcm, power, sqrt, BigInt, Sign,
};
pub use error::Error;

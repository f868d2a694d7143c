//! Generalized Fibonacci sequences of arbitrary order.
//!
//! An order-`r` sequence satisfies `f(n+r) = f(n+r-1) + ... + f(n)` from `r`
//! initial values. Small windows iterate the recurrence directly; far-out
//! windows raise the `r x r` companion matrix to the starting index by
//! repeated squaring and extend consecutively from there.

use super::BigInt;

type Matrix = Vec<Vec<BigInt>>;

/// `f(from)..=f(to)` with the default initial values `0, 0, ..., 0, 1`.
pub fn fibonacci<const ORDER: usize>(from: usize, to: usize) -> Vec<BigInt> {
    let mut initial: [BigInt; ORDER] = std::array::from_fn(|_| BigInt::default());
    initial[ORDER - 1] = BigInt::from(1u64);
    fibonacci_with(from, to, initial)
}

/// `f(from)..=f(to)` with caller-provided values for `f(0)..=f(ORDER - 1)`.
pub fn fibonacci_with<const ORDER: usize>(
    from: usize,
    to: usize,
    initial: [BigInt; ORDER],
) -> Vec<BigInt> {
    assert!(ORDER >= 2, "the recurrence needs at least two previous values");
    assert!(from <= to, "the requested window is reversed");

    // Below this point the matrix engine costs more than iterating.
    if from <= 8 * ORDER * ORDER {
        let mut sequence: Vec<BigInt> = initial.into_iter().collect();
        while sequence.len() <= to {
            sequence.push(tail_sum(&sequence, ORDER));
        }
        return sequence[from..=to].to_vec();
    }

    let lifted = matrix_power(companion(ORDER), from, ORDER);
    let mut window: Vec<BigInt> = (0..ORDER)
        .map(|r| {
            let mut value = BigInt::default();
            for (c, start) in initial.iter().enumerate() {
                value += &lifted[r][c] * start;
            }
            value
        })
        .collect();
    while window.len() < to - from + 1 {
        window.push(tail_sum(&window, ORDER));
    }
    window.truncate(to - from + 1);
    window
}

fn tail_sum(values: &[BigInt], order: usize) -> BigInt {
    let mut sum = BigInt::default();
    for value in &values[values.len() - order..] {
        sum += value;
    }
    sum
}

/// Companion matrix: ones on the superdiagonal, ones across the last row, so
/// that `M * (f(n), ..., f(n+r-1)) = (f(n+1), ..., f(n+r))`.
fn companion(order: usize) -> Matrix {
    let mut matrix = zero_matrix(order);
    for r in 0..order - 1 {
        matrix[r][r + 1] = BigInt::from(1u64);
    }
    for c in 0..order {
        matrix[order - 1][c] = BigInt::from(1u64);
    }
    matrix
}

fn zero_matrix(order: usize) -> Matrix {
    (0..order)
        .map(|_| (0..order).map(|_| BigInt::default()).collect())
        .collect()
}

fn identity(order: usize) -> Matrix {
    let mut matrix = zero_matrix(order);
    for r in 0..order {
        matrix[r][r] = BigInt::from(1u64);
    }
    matrix
}

fn matrix_power(mut base: Matrix, mut exponent: usize, order: usize) -> Matrix {
    let mut result = identity(order);
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = matrix_multiply(&result, &base, order);
        }
        exponent >>= 1;
        if exponent > 0 {
            base = matrix_multiply(&base, &base, order);
        }
    }
    result
}

fn matrix_multiply(a: &Matrix, b: &Matrix, order: usize) -> Matrix {
    let mut out = zero_matrix(order);
    for r in 0..order {
        for c in 0..order {
            let mut sum = BigInt::default();
            for i in 0..order {
                sum += &a[r][i] * &b[i][c];
            }
            out[r][c] = sum;
        }
    }
    out
}

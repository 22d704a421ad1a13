//! Series approximations of the trigonometric functions.
//!
//! Both series are truncated at [`NUM_TERMS`] terms, which pins them to the exact value
//! within double-precision rounding for arguments within a few multiples of pi. Far outside
//! that range the series converge too slowly to promise anything.

use rayon::prelude::*;

/// The number of series terms summed by [`sin`] and [`cos`].
const NUM_TERMS: u32 = 100;

/// `n!` as an `f64`. Saturates to infinity once the product leaves `f64` range, which zeroes
/// the corresponding series term.
fn factorial(n: u32) -> f64 {
    (1..=n).map(f64::from).product()
}

/// Approximates `sin(x)` with the Maclaurin series `Σ (-1)^i x^(2i+1) / (2i+1)!`. The terms
/// are independent of each other, so they are summed with a parallel reduction.
pub fn sin(x: f64) -> f64 {
    (0..NUM_TERMS)
        .into_par_iter()
        .map(|i| {
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            sign * x.powi(2 * i as i32 + 1) / factorial(2 * i + 1)
        })
        .sum()
}

/// Approximates `cos(x)` with its Maclaurin series, carrying each term into the next: term
/// `n` is term `n - 1` scaled by `-x^2 / (2n(2n-1))`. The running product makes the sum
/// inherently sequential.
pub fn cos(x: f64) -> f64 {
    let x_squared = x * x;
    let mut term = 1.0;
    let mut result = 1.0;

    for n in 1..NUM_TERMS {
        term *= -x_squared / f64::from(2 * n * (2 * n - 1));
        result += term;
    }

    result
}

/// `sin(x) / cos(x)`, or [`None`] when the cosine approximation is exactly zero and the
/// quotient is undefined.
pub fn tan(x: f64) -> Option<f64> {
    let cos = cos(x);
    if cos == 0.0 {
        None
    } else {
        Some(sin(x) / cos)
    }
}

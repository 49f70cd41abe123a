//! Coefficient-window arithmetic used by the block-recursive algorithm.

use num_traits::Float;

/// Adds two coefficient windows of equal length into a new buffer.
///
/// # Panics
///
/// Panics if the windows differ in length.
#[must_use]
pub fn sum_windows<F: Float>(left: &[F], right: &[F]) -> Vec<F> {
    assert_eq!(left.len(), right.len(), "windows must have equal length");
    left.iter().zip(right).map(|(&l, &r)| l + r).collect()
}

/// Combines the three partial products of one recursion level.
///
/// With `half = n / 2`, the result holds
/// `p0 + (p1 - p0 - p2) * x^half + p2 * x^n` in a zero-initialised buffer
/// of length `2n + 1`. Each partial product must have at least `n`
/// entries; only the first `n` are read.
#[must_use]
pub fn combine_products<F: Float>(p0: &[F], p1: &[F], p2: &[F], n: usize) -> Vec<F> {
    debug_assert!(p0.len() >= n && p1.len() >= n && p2.len() >= n);

    let half = n / 2;
    let mut result = vec![F::zero(); 2 * n + 1];

    for i in 0..n {
        result[i] = result[i] + p0[i];
        result[i + n] = result[i + n] + p2[i];
        result[i + half] = result[i + half] + (p1[i] - p2[i] - p0[i]);
    }

    result
}

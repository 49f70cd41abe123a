//! Direct convolution.

use num_traits::Float;

/// Schoolbook multiplication: O(n·m).
///
/// Returns `a.len() + b.len() - 1` coefficients, or an empty vector if
/// either input is empty.
#[must_use]
pub fn schoolbook_mul<F: Float>(a: &[F], b: &[F]) -> Vec<F> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![F::zero(); a.len() + b.len() - 1];
    schoolbook_mul_into(a, b, &mut result);
    result
}

/// Accumulates the product of `a` and `b` into `out`.
///
/// `out` must hold at least `a.len() + b.len() - 1` entries; existing
/// values are added to, not overwritten.
pub fn schoolbook_mul_into<F: Float>(a: &[F], b: &[F], out: &mut [F]) {
    debug_assert!(a.is_empty() || b.is_empty() || out.len() + 1 >= a.len() + b.len());

    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            out[i + j] = out[i + j] + ai * bj;
        }
    }
}

//! Power-of-two padding of coefficient sequences.
//!
//! The block-recursive algorithm halves its operands at every level, so
//! both operands are zero-extended once, at the top level, to the next
//! power of two.

use std::borrow::Cow;

use num_traits::Float;

/// Returns the smallest power of two that is at least `len`.
///
/// An empty sequence still pads to a single slot.
#[must_use]
pub fn padded_len(len: usize) -> usize {
    len.max(1).next_power_of_two()
}

/// Returns `true` if `len` needs no padding.
#[must_use]
pub fn is_padded(len: usize) -> bool {
    len.is_power_of_two()
}

/// Zero-extends `coeffs` to exactly `len` slots.
///
/// # Panics
///
/// Panics if `len` is smaller than `coeffs.len()`.
#[must_use]
pub fn pad_to<F: Float>(coeffs: &[F], len: usize) -> Vec<F> {
    assert!(
        len >= coeffs.len(),
        "cannot pad {} coefficients down to {len}",
        coeffs.len()
    );
    let mut padded = Vec::with_capacity(len);
    padded.extend_from_slice(coeffs);
    padded.resize(len, F::zero());
    padded
}

/// Pads `coeffs` to the next power of two.
///
/// Sequences whose length is already a power of two are borrowed as-is.
#[must_use]
pub fn pad_to_power_of_two<F: Float>(coeffs: &[F]) -> Cow<'_, [F]> {
    if is_padded(coeffs.len()) {
        Cow::Borrowed(coeffs)
    } else {
        Cow::Owned(pad_to(coeffs, padded_len(coeffs.len())))
    }
}

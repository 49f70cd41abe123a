//! Block-recursive (Karatsuba) multiplication.
//!
//! Operands are split into low and high coefficient windows and the
//! product is assembled from three half-size products:
//!
//! ```text
//! p0 = lo_a * lo_b
//! p1 = (lo_a + hi_a) * (lo_b + hi_b)
//! p2 = hi_a * hi_b
//! a * b = p0 + (p1 - p0 - p2) x^half + p2 x^n
//! ```
//!
//! Every level returns a buffer of `2n + 1` coefficients so that the
//! combine step can address all three partial products uniformly; entries
//! past the true product degree stay zero.

use num_traits::Float;
use tracing::trace;

use crate::algorithms::combine::{combine_products, sum_windows};
use crate::algorithms::schoolbook::schoolbook_mul_into;
use crate::padding::{pad_to_power_of_two, padded_len};

/// Default base-case size: recurse all the way down to single coefficients.
pub const DEFAULT_THRESHOLD: usize = 1;

/// Block-recursive multiplier with a configurable base case.
///
/// Windows of `threshold` coefficients or fewer are multiplied by direct
/// convolution instead of being split further.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockMultiplier {
    threshold: usize,
}

impl Default for BlockMultiplier {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl BlockMultiplier {
    /// Creates a multiplier that recurses down to single coefficients.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a multiplier with the given base-case size (at least 1).
    #[must_use]
    pub fn with_threshold(threshold: usize) -> Self {
        Self {
            threshold: threshold.max(1),
        }
    }

    /// Returns the base-case size.
    #[must_use]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Multiplies two coefficient sequences of equal length `k`.
    ///
    /// Both sequences are zero-extended to `k' = padded_len(k)` and the
    /// returned buffer holds `2k' + 1` coefficients.
    ///
    /// # Panics
    ///
    /// Panics if the sequences differ in length.
    #[must_use]
    pub fn mul_padded<F: Float>(&self, a: &[F], b: &[F]) -> Vec<F> {
        assert_eq!(a.len(), b.len(), "operands must have equal length");

        let left = pad_to_power_of_two(a);
        let right = pad_to_power_of_two(b);
        trace!(
            len = a.len(),
            padded = padded_len(a.len()),
            threshold = self.threshold,
            "block-recursive multiply"
        );

        self.karatsuba(&left, &right)
    }

    /// One recursion level on windows of power-of-two length `n`.
    fn karatsuba<F: Float>(&self, left: &[F], right: &[F]) -> Vec<F> {
        let n = left.len();
        debug_assert!(n.is_power_of_two());
        debug_assert_eq!(n, right.len());

        if n <= self.threshold {
            let mut result = vec![F::zero(); 2 * n + 1];
            if n == 1 {
                result[0] = left[0] * right[0];
            } else {
                schoolbook_mul_into(left, right, &mut result);
            }
            return result;
        }

        let half = n / 2;
        let (left_lo, left_hi) = left.split_at(half);
        let (right_lo, right_hi) = right.split_at(half);

        let p0 = self.karatsuba(left_lo, right_lo);
        let p1 = {
            let left_sum = sum_windows(left_lo, left_hi);
            let right_sum = sum_windows(right_lo, right_hi);
            self.karatsuba(&left_sum, &right_sum)
        };
        let p2 = self.karatsuba(left_hi, right_hi);

        combine_products(&p0, &p1, &p2, n)
    }
}

/// Block-recursive multiplication with the default base case.
///
/// See [`BlockMultiplier::mul_padded`].
#[must_use]
pub fn karatsuba_mul<F: Float>(a: &[F], b: &[F]) -> Vec<F> {
    BlockMultiplier::default().mul_padded(a, b)
}

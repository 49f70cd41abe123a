//! Errors raised by polynomial construction and multiplication.

use thiserror::Error;

/// Errors that can occur when building or multiplying polynomials.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The coefficient count does not match the declared degree.
    #[error("declared degree {degree} requires {} coefficients, got {len}", .degree.saturating_add(1))]
    InvalidDegree {
        /// Declared degree.
        degree: usize,
        /// Number of coefficients supplied.
        len: usize,
    },

    /// Block-recursive multiplication needs operands of equal degree.
    #[error("block-recursive multiplication needs equal degrees, got {left} and {right}")]
    DegreeMismatch {
        /// Degree of the left operand.
        left: usize,
        /// Degree of the right operand.
        right: usize,
    },

    /// Coefficient index outside `[0, degree]`.
    #[error("coefficient index {index} out of range for degree {degree}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Degree of the polynomial.
        degree: usize,
    },
}

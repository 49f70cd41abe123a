//! Reader errors.

use std::io;

use polymul_poly::PolyError;
use thiserror::Error;

/// Errors that can occur while reading a polynomial.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input ended before a degree was read.
    #[error("missing polynomial degree")]
    MissingDegree,

    /// The degree token is not a non-negative integer.
    #[error("invalid polynomial degree: {0:?}")]
    InvalidDegree(String),

    /// A coefficient token is not a finite real number.
    #[error("invalid coefficient {index}: {token:?}")]
    InvalidCoefficient {
        /// Position of the coefficient (its exponent).
        index: usize,
        /// The offending token.
        token: String,
    },

    /// The number of coefficients does not match the degree.
    #[error("expected {expected} coefficients, found {found}")]
    CoefficientCount {
        /// `degree + 1`.
        expected: usize,
        /// Number of coefficient tokens actually present.
        found: usize,
    },

    /// The parsed values do not form a valid polynomial.
    #[error(transparent)]
    Polynomial(#[from] PolyError),

    /// The underlying reader failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

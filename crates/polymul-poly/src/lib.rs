//! # polymul-poly
//!
//! Dense real-coefficient polynomial multiplication.
//!
//! This crate provides:
//! - Dense univariate polynomials with a declared degree
//! - Schoolbook (direct convolution) multiplication
//! - Block-recursive Karatsuba multiplication on coefficient windows
//! - Power-of-two padding for balanced recursive splits
//!
//! ## Algorithm Selection
//!
//! Both strategies are exposed side by side so they can be compared:
//! - [`multiply_direct`]: O(n·m), any two degrees
//! - [`multiply_block_recursive`]: O(n^1.58), equal degrees only

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;
pub mod error;
pub mod padding;

#[cfg(test)]
mod proptests;

pub use algorithms::BlockMultiplier;
pub use dense::Polynomial;
pub use error::PolyError;

use num_traits::Float;

/// Multiplies two polynomials by direct convolution.
#[must_use]
pub fn multiply_direct<F: Float>(a: &Polynomial<F>, b: &Polynomial<F>) -> Polynomial<F> {
    a.mul_direct(b)
}

/// Multiplies two equal-degree polynomials by block recursion.
///
/// # Errors
///
/// Returns [`PolyError::DegreeMismatch`] if the degrees differ.
pub fn multiply_block_recursive<F: Float>(
    a: &Polynomial<F>,
    b: &Polynomial<F>,
) -> Result<Polynomial<F>, PolyError> {
    a.mul_block_recursive(b)
}

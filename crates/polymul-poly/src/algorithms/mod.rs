//! Polynomial multiplication algorithms.
//!
//! This module contains:
//! - Schoolbook (direct convolution) multiplication
//! - Block-recursive Karatsuba multiplication
//! - The window sum and combine steps the recursion is built from

pub mod combine;
pub mod karatsuba;
pub mod schoolbook;

pub use combine::{combine_products, sum_windows};
pub use karatsuba::{karatsuba_mul, BlockMultiplier, DEFAULT_THRESHOLD};
pub use schoolbook::{schoolbook_mul, schoolbook_mul_into};

//! # polymul
//!
//! Side-by-side comparison of direct and block-recursive (Karatsuba)
//! multiplication of dense real-coefficient polynomials.
//!
//! ## Features
//!
//! - **Two strategies**: O(n·m) direct convolution and O(n^1.58)
//!   block recursion on power-of-two padded coefficient windows
//! - **Text I/O**: degree-then-coefficients reader and term-wise writer
//! - **Run configuration**: environment variables with CLI overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use polymul::prelude::*;
//!
//! let a = Polynomial::new(vec![1.0, 1.0], 1).unwrap();
//! let direct = multiply_direct(&a, &a);
//! let block = multiply_block_recursive(&a, &a).unwrap();
//! assert_eq!(direct.coefficients(), &[1.0, 2.0, 1.0]);
//! assert!(direct.approx_eq(&block, 1e-12));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod logging;
pub mod runner;
pub mod strategy;

pub use polymul_io as io;
pub use polymul_poly as poly;

pub use config::RunConfig;
pub use runner::{Product, Runner};
pub use strategy::{Method, Strategy};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polymul_io::{parse_polynomial, ParseError, TokenReader};
    pub use polymul_poly::{
        multiply_block_recursive, multiply_direct, BlockMultiplier, PolyError, Polynomial,
    };

    pub use crate::{Method, RunConfig, Runner, Strategy};
}

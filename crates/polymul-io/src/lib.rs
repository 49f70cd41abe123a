//! # polymul-io
//!
//! Text input and output for dense polynomials.
//!
//! The textual form of a polynomial is its degree followed by
//! `degree + 1` whitespace-separated coefficients in ascending order,
//! for example a file of two lines:
//!
//! ```text
//! 2
//! 2 0 3
//! ```
//!
//! Parsing is kept apart from the multiplication core: everything here
//! produces or consumes [`Polynomial`](polymul_poly::Polynomial) values and nothing else.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod reader;
pub mod writer;

pub use error::ParseError;
pub use reader::{parse_polynomial, read_polynomial_file, TokenReader};
pub use writer::{write_labeled, write_polynomial};

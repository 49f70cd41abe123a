//! Polynomial writer.

use std::io::{self, Write};

use polymul_poly::Polynomial;

/// Writes `label: polynomial` on its own line.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_labeled<W: Write>(out: &mut W, label: &str, poly: &Polynomial) -> io::Result<()> {
    writeln!(out, "{label}: {poly}")
}

/// Writes a polynomial in the form the reader accepts: the degree on one
/// line, the coefficients space-separated on the next.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_polynomial<W: Write>(out: &mut W, poly: &Polynomial) -> io::Result<()> {
    writeln!(out, "{}", poly.degree())?;
    let coeffs: Vec<String> = poly.coefficients().iter().map(f64::to_string).collect();
    writeln!(out, "{}", coeffs.join(" "))
}

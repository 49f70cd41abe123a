//! Polynomial reader.
//!
//! Accepts a degree token followed by `degree + 1` coefficient tokens.
//! Tokens are separated by any whitespace, so line breaks carry no
//! meaning.

use std::collections::VecDeque;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use polymul_poly::Polynomial;
use tracing::debug;

use crate::error::ParseError;

/// Prompt written before the degree in interactive mode.
pub const DEGREE_PROMPT: &str = "Degree of polynomial: ";

/// Prompt written before the coefficients in interactive mode.
pub const COEFFICIENTS_PROMPT: &str = "Ascending polynomial's constants: ";

/// Parses a degree token: ASCII digits only.
fn parse_degree(token: &str) -> Result<usize, ParseError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidDegree(token.to_string()));
    }
    token
        .parse::<usize>()
        .ok()
        .filter(|d| d.checked_add(1).is_some())
        .ok_or_else(|| ParseError::InvalidDegree(token.to_string()))
}

/// Parses a coefficient token as a finite real number.
fn parse_coefficient(index: usize, token: &str) -> Result<f64, ParseError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|c| c.is_finite())
        .ok_or_else(|| ParseError::InvalidCoefficient {
            index,
            token: token.to_string(),
        })
}

/// Parses a polynomial from text.
///
/// The first token is the degree, the remaining tokens are exactly
/// `degree + 1` coefficients in ascending order.
///
/// # Errors
///
/// Returns a [`ParseError`] if the degree is missing or malformed, a
/// coefficient is malformed, or there are too few or too many
/// coefficients.
pub fn parse_polynomial(text: &str) -> Result<Polynomial, ParseError> {
    let mut tokens = text.split_whitespace();
    let degree = parse_degree(tokens.next().ok_or(ParseError::MissingDegree)?)?;

    let coeffs = tokens
        .enumerate()
        .map(|(i, token)| parse_coefficient(i, token))
        .collect::<Result<Vec<_>, _>>()?;

    let expected = degree + 1;
    if coeffs.len() != expected {
        return Err(ParseError::CoefficientCount {
            expected,
            found: coeffs.len(),
        });
    }

    Ok(Polynomial::new(coeffs, degree)?)
}

/// Reads a polynomial from a file of the form `degree` then coefficients.
///
/// # Errors
///
/// Returns [`ParseError::Io`] if the file cannot be read, or any error
/// [`parse_polynomial`] reports.
pub fn read_polynomial_file(path: impl AsRef<Path>) -> Result<Polynomial, ParseError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let poly = parse_polynomial(&text)?;
    debug!(path = %path.display(), degree = poly.degree(), "read polynomial");
    Ok(poly)
}

/// Reads polynomials one after another from a token stream.
///
/// Lines are pulled from the underlying reader only as tokens are needed;
/// tokens left over on a line stay queued for the next read, so several
/// polynomials may share a line.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    fn next_token(&mut self) -> Result<Option<String>, ParseError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    fn read_degree(&mut self) -> Result<usize, ParseError> {
        let token = self.next_token()?.ok_or(ParseError::MissingDegree)?;
        parse_degree(&token)
    }

    fn read_coefficients(&mut self, degree: usize) -> Result<Polynomial, ParseError> {
        let expected = degree + 1;
        let mut coeffs = Vec::with_capacity(expected.min(4096));

        for index in 0..expected {
            let Some(token) = self.next_token()? else {
                return Err(ParseError::CoefficientCount {
                    expected,
                    found: index,
                });
            };
            coeffs.push(parse_coefficient(index, &token)?);
        }

        Ok(Polynomial::new(coeffs, degree)?)
    }

    /// Reads the next polynomial.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on malformed tokens or if the input ends
    /// before all coefficients are read.
    pub fn read_polynomial(&mut self) -> Result<Polynomial, ParseError> {
        let degree = self.read_degree()?;
        self.read_coefficients(degree)
    }

    /// Reads the next polynomial, writing prompts to `out` first.
    ///
    /// # Errors
    ///
    /// As [`TokenReader::read_polynomial`], plus [`ParseError::Io`] if a
    /// prompt cannot be written.
    pub fn read_polynomial_prompted<W: Write>(
        &mut self,
        out: &mut W,
    ) -> Result<Polynomial, ParseError> {
        write!(out, "{DEGREE_PROMPT}")?;
        out.flush()?;
        let degree = self.read_degree()?;

        write!(out, "{COEFFICIENTS_PROMPT}")?;
        out.flush()?;
        self.read_coefficients(degree)
    }
}

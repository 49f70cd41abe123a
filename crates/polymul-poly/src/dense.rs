//! Dense univariate polynomials with real coefficients.
//!
//! A [`Polynomial`] stores exactly `degree + 1` coefficients in ascending
//! degree order. The degree is a declared bound: trailing zero
//! coefficients are kept, never normalized away.

use std::fmt;

use num_traits::Float;
use tracing::debug;

use crate::algorithms::karatsuba::BlockMultiplier;
use crate::algorithms::schoolbook::schoolbook_mul;
use crate::error::PolyError;
use crate::padding::padded_len;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order and are immutable
/// once constructed; every arithmetic operation returns a new value.
#[derive(Clone, PartialEq, Debug)]
pub struct Polynomial<F: Float = f64> {
    /// Coefficients in ascending degree order, `degree + 1` of them.
    coeffs: Vec<F>,
}

impl<F: Float> Polynomial<F> {
    /// Creates a polynomial of the given declared degree.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidDegree`] unless
    /// `coeffs.len() == degree + 1`.
    pub fn new(coeffs: Vec<F>, degree: usize) -> Result<Self, PolyError> {
        if degree.checked_add(1) != Some(coeffs.len()) {
            return Err(PolyError::InvalidDegree {
                degree,
                len: coeffs.len(),
            });
        }
        Ok(Self { coeffs })
    }

    /// Creates a polynomial whose degree is `coeffs.len() - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidDegree`] if `coeffs` is empty.
    pub fn from_coefficients(coeffs: Vec<F>) -> Result<Self, PolyError> {
        if coeffs.is_empty() {
            return Err(PolyError::InvalidDegree { degree: 0, len: 0 });
        }
        Ok(Self { coeffs })
    }

    /// Creates the all-zero polynomial of the given declared degree.
    ///
    /// # Panics
    ///
    /// Panics if `degree == usize::MAX`, which has no coefficient count.
    #[must_use]
    pub fn zero(degree: usize) -> Self {
        assert!(
            degree < usize::MAX,
            "degree {degree} has no coefficient count"
        );
        Self {
            coeffs: vec![F::zero(); degree + 1],
        }
    }

    /// Creates a degree-0 polynomial.
    #[must_use]
    pub fn constant(c: F) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Returns the declared degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the number of coefficient slots, `degree() + 1`.
    #[must_use]
    pub fn num_coefficients(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns the coefficient of x^i.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::IndexOutOfRange`] if `i > degree()`.
    pub fn coefficient_at(&self, i: usize) -> Result<F, PolyError> {
        self.coeffs
            .get(i)
            .copied()
            .ok_or(PolyError::IndexOutOfRange {
                index: i,
                degree: self.degree(),
            })
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coefficients(&self) -> &[F] {
        &self.coeffs
    }

    /// Consumes the polynomial and returns its coefficients.
    #[must_use]
    pub fn into_coefficients(self) -> Vec<F> {
        self.coeffs
    }

    /// Returns the smallest power of two that holds all coefficients.
    ///
    /// This is the operand size the block-recursive algorithm works on.
    #[must_use]
    pub fn degree_rounded_up_to_power_of_two(&self) -> usize {
        padded_len(self.num_coefficients())
    }

    /// Returns true if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: F) -> F {
        self.coeffs
            .iter()
            .rev()
            .fold(F::zero(), |acc, &c| acc * x + c)
    }

    /// Returns the polynomial cut down to the given degree.
    ///
    /// Used to drop the zero padding left by block-recursive products.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::IndexOutOfRange`] if `degree > self.degree()`.
    pub fn truncated(&self, degree: usize) -> Result<Self, PolyError> {
        if degree > self.degree() {
            return Err(PolyError::IndexOutOfRange {
                index: degree,
                degree: self.degree(),
            });
        }
        Ok(Self {
            coeffs: self.coeffs[..=degree].to_vec(),
        })
    }

    /// Returns a copy zero-extended to the given degree.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidDegree`] if `degree < self.degree()` or
    /// `degree + 1` overflows.
    pub fn extended(&self, degree: usize) -> Result<Self, PolyError> {
        let invalid = PolyError::InvalidDegree {
            degree,
            len: self.num_coefficients(),
        };
        if degree < self.degree() {
            return Err(invalid);
        }
        let len = degree.checked_add(1).ok_or(invalid)?;
        let mut coeffs = self.coeffs.clone();
        coeffs.resize(len, F::zero());
        Ok(Self { coeffs })
    }

    /// Compares two polynomials coefficient by coefficient.
    ///
    /// Coefficients present in only one of the two must be within
    /// `tolerance` of zero, so a padded product compares equal to its
    /// trimmed form.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: F) -> bool {
        let len = self.coeffs.len().max(other.coeffs.len());
        (0..len).all(|i| {
            let a = self.coeffs.get(i).copied().unwrap_or_else(F::zero);
            let b = other.coeffs.get(i).copied().unwrap_or_else(F::zero);
            (a - b).abs() <= tolerance
        })
    }

    /// Multiplies two polynomials by direct convolution: O(n·m).
    ///
    /// Accepts any two degrees; the product has degree
    /// `self.degree() + other.degree()`.
    #[must_use]
    pub fn mul_direct(&self, other: &Self) -> Self {
        Self {
            coeffs: schoolbook_mul(&self.coeffs, &other.coeffs),
        }
    }

    /// Multiplies two polynomials of equal degree by block recursion.
    ///
    /// With `k = num_coefficients()` and `k'` the next power of two, the
    /// product is reported at degree `2(k' - 1)`. Coefficients above the
    /// true degree `2(k - 1)` are zero; use [`Polynomial::truncated`] to
    /// drop them.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DegreeMismatch`] if the degrees differ.
    pub fn mul_block_recursive(&self, other: &Self) -> Result<Self, PolyError> {
        self.mul_block_recursive_with(other, &BlockMultiplier::default())
    }

    /// Block-recursive multiplication with an explicit multiplier.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DegreeMismatch`] if the degrees differ.
    pub fn mul_block_recursive_with(
        &self,
        other: &Self,
        multiplier: &BlockMultiplier,
    ) -> Result<Self, PolyError> {
        if self.degree() != other.degree() {
            debug!(
                left = self.degree(),
                right = other.degree(),
                "rejecting block-recursive multiply"
            );
            return Err(PolyError::DegreeMismatch {
                left: self.degree(),
                right: other.degree(),
            });
        }

        let padded = self.degree_rounded_up_to_power_of_two();
        let mut coeffs = multiplier.mul_padded(&self.coeffs, &other.coeffs);
        // The recursion buffer carries two spare slots past degree 2(k' - 1).
        coeffs.truncate(2 * padded - 1);

        Ok(Self { coeffs })
    }

    /// Renders the polynomial as a sum of terms, ascending by exponent.
    ///
    /// The constant term is always printed as is. Higher terms print as
    /// `+ x^i` / `- x^i` for coefficients of exactly 1 / -1, and as
    /// `+ cx^i` / `- |c|x^i` for coefficients above 1 / below -1. Every
    /// other coefficient, zero and those strictly between -1 and 1
    /// included, is left out. Terms are joined by single spaces and there
    /// is no trailing whitespace.
    #[must_use]
    pub fn to_display_string(&self) -> String
    where
        F: fmt::Display,
    {
        self.to_string()
    }
}

impl<F: Float + fmt::Display> fmt::Display for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let one = F::one();

        write!(f, "{}", self.coeffs[0])?;
        for (i, &c) in self.coeffs.iter().enumerate().skip(1) {
            if c == one {
                write!(f, " + x^{i}")?;
            } else if c == -one {
                write!(f, " - x^{i}")?;
            } else if c > one {
                write!(f, " + {c}x^{i}")?;
            } else if c < -one {
                write!(f, " - {}x^{i}", c.abs())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coeffs: &[f64]) -> Polynomial {
        Polynomial::from_coefficients(coeffs.to_vec()).unwrap()
    }

    #[test]
    fn test_new_checks_degree() {
        assert!(Polynomial::new(vec![1.0, 2.0, 3.0], 2).is_ok());
        assert_eq!(
            Polynomial::new(vec![1.0, 2.0], 2),
            Err(PolyError::InvalidDegree { degree: 2, len: 2 })
        );
        assert_eq!(
            Polynomial::<f64>::new(vec![], 0),
            Err(PolyError::InvalidDegree { degree: 0, len: 0 })
        );
        assert!(Polynomial::<f64>::from_coefficients(vec![]).is_err());
    }

    #[test]
    fn test_degree_is_declared() {
        // Trailing zeros are kept.
        let p = poly(&[1.0, 2.0, 0.0]);
        assert_eq!(p.degree(), 2);
        assert_eq!(p.num_coefficients(), 3);
    }

    #[test]
    fn test_coefficient_at() {
        let p = poly(&[1.0, 2.0, 3.0]);
        assert_eq!(p.coefficient_at(0), Ok(1.0));
        assert_eq!(p.coefficient_at(2), Ok(3.0));
        assert_eq!(
            p.coefficient_at(3),
            Err(PolyError::IndexOutOfRange { index: 3, degree: 2 })
        );
    }

    #[test]
    fn test_degree_rounded_up_to_power_of_two() {
        assert_eq!(poly(&[1.0]).degree_rounded_up_to_power_of_two(), 1);
        assert_eq!(poly(&[1.0, 1.0]).degree_rounded_up_to_power_of_two(), 2);
        assert_eq!(poly(&[1.0, 1.0, 1.0]).degree_rounded_up_to_power_of_two(), 4);
        assert_eq!(Polynomial::<f64>::zero(4).degree_rounded_up_to_power_of_two(), 8);
    }

    #[test]
    fn test_eval() {
        // p(x) = 1 + 2x + 3x^2, p(2) = 17
        assert_eq!(poly(&[1.0, 2.0, 3.0]).eval(2.0), 17.0);
    }

    #[test]
    fn test_mul_direct() {
        let p = poly(&[1.0, 1.0]);
        let prod = p.mul_direct(&p);
        assert_eq!(prod.coefficients(), &[1.0, 2.0, 1.0]);
        assert_eq!(prod.degree(), 2);

        let a = poly(&[2.0, 0.0, 3.0]);
        let b = poly(&[1.0, 1.0, 1.0]);
        assert_eq!(a.mul_direct(&b).coefficients(), &[2.0, 2.0, 5.0, 3.0, 3.0]);
    }

    #[test]
    fn test_mul_direct_unequal_degrees() {
        let a = poly(&[1.0, -1.0]);
        let b = poly(&[1.0, 1.0, 1.0]);
        // (1 - x)(1 + x + x^2) = 1 - x^3
        let prod = a.mul_direct(&b);
        assert_eq!(prod.degree(), 3);
        assert_eq!(prod.coefficients(), &[1.0, 0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_mul_block_recursive() {
        let p = poly(&[1.0, 1.0]);
        let prod = p.mul_block_recursive(&p).unwrap();
        assert_eq!(prod.degree(), 2);
        assert_eq!(prod.coefficients(), &[1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_mul_block_recursive_padded_degree() {
        let a = poly(&[2.0, 0.0, 3.0]);
        let b = poly(&[1.0, 1.0, 1.0]);
        let prod = a.mul_block_recursive(&b).unwrap();

        // k = 3 pads to k' = 4, reported degree 2 * (4 - 1).
        assert_eq!(prod.degree(), 6);
        assert_eq!(
            prod.coefficients(),
            &[2.0, 2.0, 5.0, 3.0, 3.0, 0.0, 0.0]
        );

        let trimmed = prod.truncated(a.degree() + b.degree()).unwrap();
        assert_eq!(trimmed, a.mul_direct(&b));
    }

    #[test]
    fn test_mul_block_recursive_degree_mismatch() {
        let a = poly(&[1.0, 2.0, 3.0]);
        let b = poly(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            a.mul_block_recursive(&b),
            Err(PolyError::DegreeMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn test_zero_polynomial() {
        let zero = Polynomial::constant(0.0);
        let prod = zero.mul_block_recursive(&zero).unwrap();
        assert_eq!(prod.degree(), 0);
        assert!(prod.is_zero());
    }

    #[test]
    fn test_truncated_and_extended() {
        let p = poly(&[1.0, 2.0, 0.0, 0.0]);
        assert_eq!(p.truncated(1).unwrap(), poly(&[1.0, 2.0]));
        assert!(p.truncated(4).is_err());

        let q = poly(&[1.0, 2.0]).extended(3).unwrap();
        assert_eq!(q, p);
        assert!(p.extended(1).is_err());
    }

    #[test]
    fn test_approx_eq_ignores_zero_padding() {
        let p = poly(&[1.0, 2.0, 1.0]);
        let padded = poly(&[1.0, 2.0 + 1e-12, 1.0, 0.0, 0.0]);
        assert!(p.approx_eq(&padded, 1e-9));
        assert!(!p.approx_eq(&poly(&[1.0, 2.0, 1.0, 0.5]), 1e-9));
    }

    #[test]
    fn test_display() {
        assert_eq!(poly(&[1.0, 2.0, 1.0]).to_string(), "1 + 2x^1 + x^2");
        assert_eq!(poly(&[-4.0, -1.0, -2.5]).to_string(), "-4 - x^1 - 2.5x^2");
        assert_eq!(poly(&[0.0]).to_display_string(), "0");
    }

    #[test]
    fn test_display_omits_small_coefficients() {
        // Anything strictly inside (-1, 1) is dropped past the constant term.
        assert_eq!(poly(&[0.5, 0.5, -3.0]).to_string(), "0.5 - 3x^2");
        assert_eq!(poly(&[2.0, 0.0, -0.25, 1.0]).to_string(), "2 + x^3");
        assert_eq!(poly(&[0.0, 0.0, 0.0]).to_string(), "0");
    }

    #[test]
    fn test_display_spacing() {
        assert_eq!(Polynomial::constant(7.0).to_string(), "7");
        assert_eq!(poly(&[-2.0, 3.0]).to_string(), "-2 + 3x^1");
        let s = poly(&[1.0, 2.0, 1.0, -1.0, -5.0]).to_string();
        assert_eq!(s, "1 + 2x^1 + x^2 - x^3 - 5x^4");
        assert!(!s.contains("  "));
    }

    #[test]
    fn test_zero_degree_bounds() {
        let z = Polynomial::<f64>::zero(3);
        assert_eq!(z.num_coefficients(), 4);
        assert!(z.is_zero());
    }

    #[test]
    #[should_panic(expected = "has no coefficient count")]
    fn test_zero_rejects_max_degree() {
        let _ = Polynomial::<f64>::zero(usize::MAX);
    }

    #[test]
    fn test_extended_rejects_max_degree() {
        let p = poly(&[1.0, 2.0]);
        assert_eq!(
            p.extended(usize::MAX),
            Err(PolyError::InvalidDegree {
                degree: usize::MAX,
                len: 2,
            })
        );
        assert_eq!(p.extended(3).unwrap(), poly(&[1.0, 2.0, 0.0, 0.0]));
    }
}

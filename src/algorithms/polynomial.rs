//! Polynomial model and evaluator.
//!
//! ## Purpose
//!
//! This module defines `Polynomial`, the owned coefficient vector produced by a
//! least-squares fit, and its evaluation with zero-snapping.
//!
//! ## Design notes
//!
//! * **Fixed degree**: The degree is set at creation and never changes; the
//!   coefficient vector always has `degree + 1` entries.
//! * **Validity flag**: A freshly created polynomial holds zeros and is not
//!   valid. A successful fit (or `from_coefficients`) marks it valid.
//! * **Atomic updates**: Coefficients are only replaced as a whole, from a
//!   solution computed elsewhere.
//! * **Horner evaluation**: `acc = acc * x + c_i` from the highest degree down.
//! * **Generics**: Generic over `Float` types, `f32` by default.
//!
//! ## Key concepts
//!
//! * **Zero-snapping**: With `M = max |c_i|`, a result is replaced by exactly
//!   zero when `|y| < absolute` or `|y| < relative * M`.
//!
//! ## Invariants
//!
//! * `coefficients.len() == degree + 1` and `degree <= MAX_DEGREE`.
//! * Coefficient index `i` multiplies `x^i`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::math::scalar::{abs_value, is_nearly_zero};
use crate::primitives::buffer::Slot;
use crate::primitives::errors::PolyfitError;
use crate::primitives::thresholds::Thresholds;

/// Largest supported polynomial degree.
pub const MAX_DEGREE: usize = 10;

/// Reject degrees outside `[0, MAX_DEGREE]`.
#[inline]
pub(crate) fn check_degree(degree: i64) -> Result<usize, PolyfitError> {
    match usize::try_from(degree) {
        Ok(d) if d <= MAX_DEGREE => Ok(d),
        _ => Err(PolyfitError::InvalidDegree {
            degree,
            max: MAX_DEGREE,
        }),
    }
}

// ============================================================================
// Polynomial
// ============================================================================

/// A polynomial `c_0 + c_1 x + ... + c_d x^d` of fixed degree `d`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawPolynomial<T>",
        bound(deserialize = "T: Float + serde::Deserialize<'de>")
    )
)]
pub struct Polynomial<T = f32> {
    coefficients: Vec<T>,
    degree: usize,
    is_valid: bool,
}

impl<T: Float> Polynomial<T> {
    /// Create an unfitted polynomial of the given degree with zero coefficients.
    pub fn new(degree: usize) -> Result<Self, PolyfitError> {
        let degree = check_degree(i64::try_from(degree).unwrap_or(i64::MAX))?;
        let coefficients = Slot::zeroed(degree + 1)?.into_inner();
        Ok(Self {
            coefficients,
            degree,
            is_valid: false,
        })
    }

    /// Create from a signed degree, rejecting negative values.
    pub fn try_from_signed(degree: i64) -> Result<Self, PolyfitError> {
        Self::new(check_degree(degree)?)
    }

    /// Build a valid polynomial from known coefficients (`c_0` first).
    pub fn from_coefficients(coefficients: Vec<T>) -> Result<Self, PolyfitError> {
        if coefficients.is_empty() {
            return Err(PolyfitError::EmptyInput);
        }
        let degree = check_degree(i64::try_from(coefficients.len() - 1).unwrap_or(i64::MAX))?;
        if let Some(i) = coefficients.iter().position(|c| !c.is_finite()) {
            return Err(PolyfitError::InvalidNumericValue(format!(
                "coefficients[{}]={}",
                i,
                coefficients[i].to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(Self {
            coefficients,
            degree,
            is_valid: true,
        })
    }

    /// Degree of the polynomial.
    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Coefficients, constant term first.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// `true` once the coefficients hold a fitted (or supplied) solution.
    pub fn is_valid(&self) -> bool {
        self.is_valid && self.degree <= MAX_DEGREE && self.coefficients.len() == self.degree + 1
    }

    /// Overwrite every coefficient from a solved system and mark valid.
    pub(crate) fn set_fitted(&mut self, solution: &[T]) -> Result<(), PolyfitError> {
        if solution.len() != self.degree + 1 || self.coefficients.len() != solution.len() {
            return Err(PolyfitError::InvalidInput(format!(
                "solution of length {} cannot fill a degree {} polynomial holding {} coefficients",
                solution.len(),
                self.degree,
                self.coefficients.len()
            )));
        }
        self.coefficients.copy_from_slice(solution);
        self.is_valid = true;
        Ok(())
    }

    fn ensure_valid(&self) -> Result<(), PolyfitError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(PolyfitError::InvalidInput(
                "polynomial has not been fitted".into(),
            ))
        }
    }

    /// Largest absolute coefficient.
    pub fn max_coefficient_magnitude(&self) -> Result<T, PolyfitError> {
        self.ensure_valid()?;
        Ok(self.max_magnitude())
    }

    fn max_magnitude(&self) -> T {
        self.coefficients.iter().fold(T::zero(), |m, &c| {
            let v = abs_value(c);
            if v > m { v } else { m }
        })
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Evaluate at `x` with the default thresholds.
    pub fn evaluate(&self, x: T) -> Result<T, PolyfitError> {
        self.evaluate_with(x, &Thresholds::default())
    }

    /// Evaluate at `x` using Horner's method, then zero-snap with `thresholds`.
    pub fn evaluate_with(&self, x: T, thresholds: &Thresholds<T>) -> Result<T, PolyfitError> {
        self.ensure_valid()?;
        Ok(self.horner_snapped(x, self.max_magnitude(), thresholds))
    }

    /// Evaluate at every point of `xs` with the default thresholds.
    pub fn evaluate_many(&self, xs: &[T]) -> Result<Vec<T>, PolyfitError> {
        self.evaluate_many_with(xs, &Thresholds::default())
    }

    /// Evaluate at every point of `xs`, zero-snapping with `thresholds`.
    pub fn evaluate_many_with(
        &self,
        xs: &[T],
        thresholds: &Thresholds<T>,
    ) -> Result<Vec<T>, PolyfitError> {
        self.ensure_valid()?;
        let max = self.max_magnitude();
        Ok(xs
            .iter()
            .map(|&x| self.horner_snapped(x, max, thresholds))
            .collect())
    }

    #[inline]
    fn horner_snapped(&self, x: T, max_magnitude: T, thresholds: &Thresholds<T>) -> T {
        let y = self
            .coefficients
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * x + c);

        if is_nearly_zero(y, thresholds.absolute)
            || is_nearly_zero(y, thresholds.relative * max_magnitude)
        {
            T::zero()
        } else {
            y
        }
    }
}

// ============================================================================
// Deserialization
// ============================================================================

/// Unchecked wire form; converted into `Polynomial` only after validation.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPolynomial<T> {
    coefficients: Vec<T>,
    degree: usize,
    is_valid: bool,
}

#[cfg(feature = "serde")]
impl<T: Float> TryFrom<RawPolynomial<T>> for Polynomial<T> {
    type Error = PolyfitError;

    fn try_from(raw: RawPolynomial<T>) -> Result<Self, Self::Error> {
        let degree = check_degree(i64::try_from(raw.degree).unwrap_or(i64::MAX))?;
        if raw.coefficients.len() != degree + 1 {
            return Err(PolyfitError::InvalidInput(format!(
                "degree {} needs {} coefficients, got {}",
                degree,
                degree + 1,
                raw.coefficients.len()
            )));
        }
        if raw.is_valid {
            if let Some(i) = raw.coefficients.iter().position(|c| !c.is_finite()) {
                return Err(PolyfitError::InvalidNumericValue(format!(
                    "coefficients[{}]={}",
                    i,
                    raw.coefficients[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(Self {
            coefficients: raw.coefficients,
            degree,
            is_valid: raw.is_valid,
        })
    }
}

impl<T: Float + Display> Display for Polynomial<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "y =")?;
        for (i, c) in self.coefficients.iter().enumerate() {
            let sep = if i == 0 { " " } else { " + " };
            match i {
                0 => write!(f, "{}{}", sep, c)?,
                1 => write!(f, "{}{}*x", sep, c)?,
                _ => write!(f, "{}{}*x^{}", sep, c, i)?,
            }
        }
        if !self.is_valid() {
            write!(f, " (unfitted)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_degree_bounds() {
        assert_eq!(check_degree(0), Ok(0));
        assert_eq!(check_degree(10), Ok(10));
        assert!(check_degree(-1).is_err());
        assert!(check_degree(11).is_err());
    }

    #[test]
    fn set_fitted_rejects_mismatched_storage() {
        let mut p = Polynomial::<f64> {
            coefficients: vec![1.0, 2.0, 3.0],
            degree: 1,
            is_valid: false,
        };
        let err = p.set_fitted(&[4.0, 5.0]).unwrap_err();
        assert!(matches!(err, PolyfitError::InvalidInput(_)));
        assert_eq!(p.coefficients(), &[1.0, 2.0, 3.0]);
        assert!(!p.is_valid());

        let mut q = Polynomial::<f64>::new(1).unwrap();
        assert!(q.set_fitted(&[1.0, 2.0, 3.0]).is_err());
        q.set_fitted(&[1.0, 2.0]).unwrap();
        assert!(q.is_valid());
    }

    #[test]
    fn display_lists_terms_in_ascending_order() {
        let p = Polynomial::from_coefficients(vec![1.0f64, -2.0, 3.0]).unwrap();
        assert_eq!(p.to_string(), "y = 1 + -2*x + 3*x^2");
        let q = Polynomial::<f64>::new(1).unwrap();
        assert_eq!(q.to_string(), "y = 0 + 0*x (unfitted)");
    }
}

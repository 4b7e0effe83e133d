//! Goodness-of-fit diagnostics on the training samples.
//!
//! ## Purpose
//!
//! This module measures how well a fitted polynomial reproduces the samples it
//! was fitted to: residuals, RMSE, MAE, the largest absolute residual, and R².
//!
//! ## Design notes
//!
//! * **Snapped predictions**: Residuals are taken against zero-snapped
//!   predictions, so they reflect exactly what callers observe.
//! * **Constant targets**: When every `y` is equal, R² is 1 for a perfect fit
//!   and 0 otherwise.
//!
//! ## Key concepts
//!
//! ```text
//! r_i  = y_i - p(x_i)
//! RMSE = sqrt(sum r_i^2 / n)
//! R^2  = 1 - SS_res / SS_tot
//! ```

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::polynomial::Polynomial;
use crate::math::scalar::abs_value;
use crate::primitives::errors::PolyfitError;
use crate::primitives::thresholds::Thresholds;

/// In-sample fit statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics<T> {
    /// Residuals `y_i - p(x_i)` in sample order.
    pub residuals: Vec<T>,
    /// Root mean squared error.
    pub rmse: T,
    /// Mean absolute error.
    pub mae: T,
    /// Largest absolute residual.
    pub max_abs_residual: T,
    /// Coefficient of determination.
    pub r_squared: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics for `poly` on the samples `(x, y)`.
    ///
    /// Predictions are zero-snapped with `thresholds`, the same value the
    /// polynomial is evaluated with elsewhere.
    pub fn compute(
        poly: &Polynomial<T>,
        x: &[T],
        y: &[T],
        thresholds: &Thresholds<T>,
    ) -> Result<Self, PolyfitError> {
        if x.len() != y.len() {
            return Err(PolyfitError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        let fitted = poly.evaluate_many_with(x, thresholds)?;
        Self::from_fitted(y, &fitted)
    }

    /// Compute diagnostics from observed values and matching predictions.
    pub fn from_fitted(y: &[T], fitted: &[T]) -> Result<Self, PolyfitError> {
        if y.is_empty() || fitted.is_empty() {
            return Err(PolyfitError::EmptyInput);
        }
        if y.len() != fitted.len() {
            return Err(PolyfitError::MismatchedInputs {
                x_len: fitted.len(),
                y_len: y.len(),
            });
        }

        let residuals: Vec<T> = y.iter().zip(fitted).map(|(&yi, &fi)| yi - fi).collect();

        let n = T::from(y.len()).unwrap_or_else(T::one);
        let ss_res = residuals.iter().fold(T::zero(), |acc, &r| acc + r * r);
        let abs_sum = residuals.iter().fold(T::zero(), |acc, &r| acc + abs_value(r));
        let max_abs_residual = residuals.iter().fold(T::zero(), |m, &r| {
            let a = abs_value(r);
            if a > m { a } else { m }
        });

        let mean_y = y.iter().fold(T::zero(), |acc, &v| acc + v) / n;
        let ss_tot = y.iter().fold(T::zero(), |acc, &v| {
            let d = v - mean_y;
            acc + d * d
        });

        let r_squared = if ss_tot > T::zero() {
            T::one() - ss_res / ss_tot
        } else if ss_res == T::zero() {
            T::one()
        } else {
            T::zero()
        };

        Ok(Self {
            residuals,
            rmse: (ss_res / n).sqrt(),
            mae: abs_sum / n,
            max_abs_residual,
            r_squared,
        })
    }
}

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Diagnostics:")?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        writeln!(f, "  Max residual: {:.6}", self.max_abs_residual)?;
        write!(f, "  R^2:          {:.6}", self.r_squared)
    }
}

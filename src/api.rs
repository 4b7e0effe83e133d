//! High-level API for polynomial fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent builder
//! that configures the degree and evaluation thresholds, validates them once,
//! and produces a reusable model that fits sample sets.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are checked when `.build()` is called.
//! * **Strict**: Setting a parameter twice is reported as an error at build time.
//! * **Type-Safe**: Generic over `Float` types, `f32` by default.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PolyFitBuilder`] via `PolyFit::new()`.
//! 2. Chain configuration methods (`.degree()`, `.absolute_threshold()`, etc.).
//! 3. Call `.build()` to obtain a [`PolyFitModel`], then `.fit(&x, &y)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::fit_least_squares_with;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::polynomial::{MAX_DEGREE, Polynomial};
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::errors::PolyfitError;
pub use crate::primitives::thresholds::Thresholds;

/// Default polynomial degree used when `.degree()` is not called.
pub const DEFAULT_DEGREE: usize = 2;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a polynomial fit.
#[derive(Debug, Clone)]
pub struct PolyFitBuilder<T: Float = f32> {
    /// Polynomial degree (default: 2).
    pub degree: Option<usize>,

    /// Absolute zero-snapping threshold (default: 1e-6).
    pub absolute_threshold: Option<T>,

    /// Relative zero-snapping threshold (default: 1e-6).
    pub relative_threshold: Option<T>,

    /// Run the singularity pre-check before elimination (default: true).
    pub pivot_check: Option<bool>,

    /// Compute in-sample diagnostics after fitting.
    pub return_diagnostics: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for PolyFitBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> PolyFitBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            degree: None,
            absolute_threshold: None,
            relative_threshold: None,
            pivot_check: None,
            return_diagnostics: None,
            duplicate_param: None,
        }
    }

    /// Set the polynomial degree.
    pub fn degree(mut self, degree: usize) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(degree);
        self
    }

    /// Set the absolute zero-snapping threshold.
    pub fn absolute_threshold(mut self, threshold: T) -> Self {
        if self.absolute_threshold.is_some() {
            self.duplicate_param = Some("absolute_threshold");
        }
        self.absolute_threshold = Some(threshold);
        self
    }

    /// Set the relative zero-snapping threshold.
    pub fn relative_threshold(mut self, threshold: T) -> Self {
        if self.relative_threshold.is_some() {
            self.duplicate_param = Some("relative_threshold");
        }
        self.relative_threshold = Some(threshold);
        self
    }

    /// Enable or disable the singularity pre-check.
    pub fn pivot_check(mut self, enabled: bool) -> Self {
        if self.pivot_check.is_some() {
            self.duplicate_param = Some("pivot_check");
        }
        self.pivot_check = Some(enabled);
        self
    }

    /// Include in-sample diagnostics (RMSE, R², residuals) in the result.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    /// Validate the configuration and produce a model.
    pub fn build(self) -> Result<PolyFitModel<T>, PolyfitError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let degree = self.degree.unwrap_or(DEFAULT_DEGREE);
        Validator::validate_degree(degree)?;

        let defaults = Thresholds::<T>::default();
        let thresholds = Thresholds {
            absolute: self.absolute_threshold.unwrap_or(defaults.absolute),
            relative: self.relative_threshold.unwrap_or(defaults.relative),
            pivot_check: self.pivot_check.unwrap_or(defaults.pivot_check),
        };
        Validator::validate_thresholds(&thresholds)?;

        Ok(PolyFitModel {
            degree,
            thresholds,
            return_diagnostics: self.return_diagnostics.unwrap_or(false),
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated fitting configuration, reusable across sample sets.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyFitModel<T: Float = f32> {
    degree: usize,
    thresholds: Thresholds<T>,
    return_diagnostics: bool,
}

impl<T: Float> PolyFitModel<T> {
    /// Degree fitted by this model.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Thresholds applied during fitting and evaluation.
    pub fn thresholds(&self) -> &Thresholds<T> {
        &self.thresholds
    }

    /// Fit the configured polynomial to `(x, y)`.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<FitResult<T>, PolyfitError> {
        let mut polynomial = Polynomial::new(self.degree)?;
        fit_least_squares_with(x, y, self.degree, &mut polynomial, &self.thresholds)?;

        let fitted = polynomial.evaluate_many_with(x, &self.thresholds)?;

        let diagnostics = if self.return_diagnostics {
            Some(Diagnostics::from_fitted(y, &fitted)?)
        } else {
            None
        };

        Ok(FitResult {
            polynomial,
            thresholds: self.thresholds,
            x: x.to_vec(),
            fitted,
            diagnostics,
        })
    }
}

// ============================================================================
// Result
// ============================================================================

/// Output of [`PolyFitModel::fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult<T: Float = f32> {
    /// The fitted polynomial.
    pub polynomial: Polynomial<T>,

    /// Thresholds the model was built with.
    pub thresholds: Thresholds<T>,

    /// Training x values, in input order.
    pub x: Vec<T>,

    /// Fitted values at the training x values.
    pub fitted: Vec<T>,

    /// In-sample diagnostics, if requested.
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float> FitResult<T> {
    /// Evaluate the fitted polynomial at `x` with the model's thresholds.
    pub fn evaluate(&self, x: T) -> Result<T, PolyfitError> {
        self.polynomial.evaluate_with(x, &self.thresholds)
    }
}

impl<T: Float + Display> Display for FitResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.x.len())?;
        writeln!(f, "  Degree: {}", self.polynomial.degree())?;
        writeln!(f, "  Model: {}", self.polynomial)?;
        writeln!(f)?;
        writeln!(f, "Fitted Data:")?;
        writeln!(f, "{:>10} {:>12}", "X", "Y_fit")?;
        writeln!(f, "  --------------------")?;
        for (xi, yi) in self.x.iter().zip(&self.fitted) {
            writeln!(f, "{:>10.2} {:>12.5}", xi, yi)?;
        }
        if let Some(diag) = &self.diagnostics {
            writeln!(f)?;
            write!(f, "{}", diag)?;
        }
        Ok(())
    }
}

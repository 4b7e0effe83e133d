//! Evaluation and solver thresholds.
//!
//! ## Purpose
//!
//! This module defines `Thresholds`, the configuration value that controls
//! zero-snapping during evaluation and the singularity pre-check during
//! fitting. It is passed explicitly to the operations that need it.
//!
//! ## Key concepts
//!
//! * **Absolute threshold**: results with `|y| < absolute` snap to zero.
//! * **Relative threshold**: results with `|y| < relative * max|c_i|` snap to zero.
//! * **Pivot check**: run the cheap column-magnitude scan before elimination.
//!
//! ## Invariants
//!
//! * Both thresholds are finite and non-negative (enforced by the validator).

// External dependencies
use num_traits::Float;

/// Default absolute zero-snapping threshold.
pub const DEFAULT_ABSOLUTE_THRESHOLD: f64 = 1e-6;

/// Default relative zero-snapping threshold.
pub const DEFAULT_RELATIVE_THRESHOLD: f64 = 1e-6;

/// Thresholds applied when evaluating a fitted polynomial.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thresholds<T> {
    /// Results smaller in magnitude than this are reported as exactly zero.
    pub absolute: T,

    /// Scaled by the largest coefficient magnitude before comparison.
    pub relative: T,

    /// Run the singularity pre-check before Gaussian elimination.
    pub pivot_check: bool,
}

impl<T: Float> Thresholds<T> {
    /// Create thresholds with the pivot pre-check enabled.
    pub fn new(absolute: T, relative: T) -> Self {
        Self {
            absolute,
            relative,
            pivot_check: true,
        }
    }

    /// Thresholds that never snap (both zero).
    pub fn disabled() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

impl<T: Float> Default for Thresholds<T> {
    fn default() -> Self {
        Self::new(
            T::from(DEFAULT_ABSOLUTE_THRESHOLD).unwrap_or_else(T::epsilon),
            T::from(DEFAULT_RELATIVE_THRESHOLD).unwrap_or_else(T::epsilon),
        )
    }
}

//! Input validation for polynomial fitting.
//!
//! ## Purpose
//!
//! This module checks sample arrays and configuration values before any
//! buffer is allocated or any coefficient is touched.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, filter, or repair input data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::polynomial::check_degree;
use crate::primitives::errors::PolyfitError;
use crate::primitives::thresholds::Thresholds;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fitting inputs and configuration.
pub struct Validator;

impl Validator {
    /// Validate sample arrays for a fit of the given degree.
    ///
    /// Order: emptiness, degree range, matching lengths, sample count, finiteness.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T], degree: usize) -> Result<(), PolyfitError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(PolyfitError::EmptyInput);
        }

        // Check 2: Supported degree
        Self::validate_degree(degree)?;

        // Check 3: Matching lengths
        if x.len() != y.len() {
            return Err(PolyfitError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        // Check 4: Strictly more samples than the degree
        if x.len() <= degree {
            return Err(PolyfitError::InsufficientPoints {
                got: x.len(),
                min: degree + 1,
            });
        }

        // Check 5: All values finite
        for (name, values) in [("x", x), ("y", y)] {
            if let Some(i) = values.iter().position(|v| !v.is_finite()) {
                return Err(PolyfitError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    values[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a polynomial degree.
    pub fn validate_degree(degree: usize) -> Result<(), PolyfitError> {
        check_degree(i64::try_from(degree).unwrap_or(i64::MAX)).map(|_| ())
    }

    /// Validate zero-snapping thresholds.
    pub fn validate_thresholds<T: Float>(thresholds: &Thresholds<T>) -> Result<(), PolyfitError> {
        for t in [thresholds.absolute, thresholds.relative] {
            if !t.is_finite() || t < T::zero() {
                return Err(PolyfitError::InvalidThreshold(
                    t.to_f64().unwrap_or(f64::NAN),
                ));
            }
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), PolyfitError> {
        if let Some(param) = duplicate_param {
            return Err(PolyfitError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}

//! Error types for polynomial fitting and evaluation.
//!
//! ## Purpose
//!
//! This module defines `PolyfitError`, the single error type returned by every
//! fallible operation in the crate: polynomial creation, normal-equation
//! assembly, the linear solver, and evaluation.
//!
//! ## Design notes
//!
//! * **Single taxonomy**: Every failure maps onto one of six categories
//!   (null/empty input, invalid degree, allocation, singular matrix,
//!   insufficient points, invalid input). See [`PolyfitError::as_str`].
//! * **Context-carrying**: Variants carry the offending values so that
//!   `Display` output is actionable.
//! * **no_std**: `std::error::Error` is only implemented with the `std` feature.
//!
//! ## Invariants
//!
//! * Every variant has exactly one category string.
//! * Display messages never end with a period.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt;

// ============================================================================
// PolyfitError
// ============================================================================

/// Errors produced while building, fitting, or evaluating a polynomial.
#[derive(Debug, Clone, PartialEq)]
pub enum PolyfitError {
    /// Sample arrays are empty (the null-pointer class of failure).
    EmptyInput,

    /// Requested degree is outside `[0, max]`, or does not match the target polynomial.
    InvalidDegree {
        /// Degree that was requested.
        degree: i64,
        /// Largest supported degree.
        max: usize,
    },

    /// A buffer of `requested` elements could not be allocated.
    MemoryAlloc {
        /// Number of elements requested.
        requested: usize,
    },

    /// No pivot above the singularity threshold was found in `column`.
    SingularMatrix {
        /// Column at which elimination broke down.
        column: usize,
    },

    /// Fewer samples than unknowns.
    InsufficientPoints {
        /// Number of samples supplied.
        got: usize,
        /// Minimum number of samples for the requested degree.
        min: usize,
    },

    /// Generic invalid input with a free-form explanation.
    InvalidInput(String),

    /// `x` and `y` have different lengths.
    MismatchedInputs {
        /// Length of the x array.
        x_len: usize,
        /// Length of the y array.
        y_len: usize,
    },

    /// A sample or parameter is NaN or infinite.
    InvalidNumericValue(String),

    /// Zero-snapping threshold is negative or not finite.
    InvalidThreshold(f64),

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

impl PolyfitError {
    /// Static description of the error category.
    ///
    /// Several variants share a category: all malformed-input variants report
    /// `"Invalid input parameters"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PolyfitError::EmptyInput => "Null pointer provided",
            PolyfitError::InvalidDegree { .. } => "Invalid polynomial degree",
            PolyfitError::MemoryAlloc { .. } => "Memory allocation failed",
            PolyfitError::SingularMatrix { .. } => "Matrix is singular",
            PolyfitError::InsufficientPoints { .. } => "Insufficient data points",
            PolyfitError::InvalidInput(_)
            | PolyfitError::MismatchedInputs { .. }
            | PolyfitError::InvalidNumericValue(_)
            | PolyfitError::InvalidThreshold(_)
            | PolyfitError::DuplicateParameter { .. } => "Invalid input parameters",
        }
    }
}

impl fmt::Display for PolyfitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyfitError::EmptyInput => write!(f, "Input arrays are empty"),
            PolyfitError::InvalidDegree { degree, max } => {
                write!(f, "Invalid degree: {} (must be in [0, {}])", degree, max)
            }
            PolyfitError::MemoryAlloc { requested } => {
                write!(f, "Memory allocation failed for {} elements", requested)
            }
            PolyfitError::SingularMatrix { column } => {
                write!(f, "Matrix is singular: no usable pivot in column {}", column)
            }
            PolyfitError::InsufficientPoints { got, min } => {
                write!(f, "Insufficient points: got {}, need at least {}", got, min)
            }
            PolyfitError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PolyfitError::MismatchedInputs { x_len, y_len } => {
                write!(
                    f,
                    "Length mismatch: x has {} points, y has {}",
                    x_len, y_len
                )
            }
            PolyfitError::InvalidNumericValue(msg) => {
                write!(f, "Invalid numeric value: {}", msg)
            }
            PolyfitError::InvalidThreshold(t) => {
                write!(f, "Invalid threshold: {} (must be >= 0 and finite)", t)
            }
            PolyfitError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PolyfitError {}

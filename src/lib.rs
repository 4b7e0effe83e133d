//! # polyfit-rs: Least-Squares Polynomial Fitting for Rust
//!
//! A small, `no_std`-friendly library that fits a polynomial of a chosen degree
//! to `(x, y)` samples and evaluates the fitted curve anywhere, for both
//! interpolation and extrapolation.
//!
//! ## How it works
//!
//! 1. Build the normal equations `A c = B` with `A = XᵀX` and `B = Xᵀy`, where
//!    `X` is the Vandermonde matrix of the samples.
//! 2. Solve the `(d+1) x (d+1)` system with Gaussian elimination and partial
//!    pivoting; a pivot below `1e-12` reports a singular system.
//! 3. Evaluate with Horner's method and snap tiny results to exactly zero.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! let x = [0.0f32, 2.0, 4.0, 5.0];
//! let y = [0.0f32, 8.0, 64.0, 125.0]; // y = x^3
//!
//! let model = PolyFit::new().degree(3).build()?;
//! let result = model.fit(&x, &y)?;
//!
//! let y20 = result.evaluate(20.0)?;
//! assert!((y20 - 8000.0).abs() < 1.0);
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! ### Low-level API
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! let x = [-1.0f64, 0.0, 1.0, 2.0, 3.0];
//! let y: Vec<f64> = x.iter().map(|v| 1.0 - 2.0 * v + 0.5 * v * v).collect();
//!
//! let mut poly = Polynomial::new(2)?;
//! fit_least_squares(&x, &y, 2, &mut poly)?;
//!
//! assert!((poly.coefficients()[1] + 2.0).abs() < 1e-9);
//! assert!(poly.evaluate(10.0)? > 0.0);
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! ## Zero-snapping
//!
//! Evaluation replaces a result `y` by exactly `0` when
//! `|y| < absolute` or `|y| < relative * max|c_i|`. Both thresholds default
//! to `1e-6` and can be changed per call with [`Thresholds`](prelude::Thresholds)
//! or per model through the builder.
//!
//! ## Errors
//!
//! Every fallible operation returns [`PolyfitError`](prelude::PolyfitError).
//! Fitting with too few samples, a degenerate x-set, or non-finite values never
//! modifies the target polynomial.
//!
//! ## Feature flags
//!
//! * `std` (default): implements `std::error::Error`. Without it the crate is
//!   `no_std` and needs only `alloc`.
//! * `serde`: `Serialize`/`Deserialize` for `Polynomial` and `Thresholds`.
//! * `dev`: exposes internal modules for testing.
//!
//! ## Limitations
//!
//! * Degree is limited to `MAX_DEGREE` (10).
//! * The singularity threshold is absolute, not scaled to the matrix.
//! * Normal equations square the condition number; high degrees over wide
//!   x-ranges lose precision quickly, especially in `f32`.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - errors, scratch buffers, thresholds.
mod primitives;

// Layer 2: Math - integer power, absolute value, Gaussian elimination.
mod math;

// Layer 3: Algorithms - normal equations and the polynomial model.
mod algorithms;

// Layer 4: Evaluation - in-sample diagnostics.
mod evaluation;

// Layer 5: Engine - validation and the fitting pipeline.
mod engine;

// High-level fluent API.
mod api;

// ============================================================================
// Public API
// ============================================================================

pub use crate::api::{
    DEFAULT_DEGREE, Diagnostics, FitResult, MAX_DEGREE, PolyFitBuilder, PolyFitModel, Polynomial,
    PolyfitError, Thresholds,
};
pub use crate::engine::executor::{fit_least_squares, fit_least_squares_with};
pub use crate::math::scalar::{abs_value, power};

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// ```
/// use polyfit_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Diagnostics, FitResult, MAX_DEGREE, PolyFitBuilder as PolyFit, PolyFitModel, Polynomial,
        PolyfitError, Thresholds,
    };
    pub use crate::engine::executor::{fit_least_squares, fit_least_squares_with};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// Only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal fitting engine.
    pub mod engine {
        pub use crate::engine::*;
    }
}

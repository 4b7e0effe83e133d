//! Least-squares fitting pipeline.
//!
//! ## Purpose
//!
//! This module runs a complete polynomial fit: validate the samples, assemble
//! the normal equations, optionally pre-check for singularity, solve, and
//! commit the coefficients to the target polynomial.
//!
//! ## Design notes
//!
//! * **All-or-nothing**: The solver writes into the workspace; the polynomial
//!   is only touched after a successful solve.
//! * **Scoped workspace**: The normal-equations buffer is created and dropped
//!   inside a single call, on success and error paths alike.
//! * **Logging**: Fit boundaries are traced through the `log` facade; singular
//!   systems are reported at `warn` level.
//!
//! ## Key concepts
//!
//! ```text
//! validate -> build A, B -> [pre-check] -> eliminate -> back-substitute -> commit
//! ```
//!
//! ## Non-goals
//!
//! * No retry with a lower degree after a singular system.

// External dependencies
use log::{debug, trace, warn};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::normal_equations::build_normal_equations;
use crate::algorithms::polynomial::{MAX_DEGREE, Polynomial};
use crate::engine::validator::Validator;
use crate::math::linalg::{gaussian_elimination, is_singular};
use crate::primitives::buffer::SystemBuffer;
use crate::primitives::errors::PolyfitError;
use crate::primitives::thresholds::Thresholds;

/// Fit `poly` to the samples with the default thresholds.
///
/// `degree` must equal `poly.degree()`. On error `poly` is left unchanged.
pub fn fit_least_squares<T: Float>(
    x: &[T],
    y: &[T],
    degree: usize,
    poly: &mut Polynomial<T>,
) -> Result<(), PolyfitError> {
    fit_least_squares_with(x, y, degree, poly, &Thresholds::default())
}

/// Fit `poly` to the samples, honoring `thresholds.pivot_check`.
pub fn fit_least_squares_with<T: Float>(
    x: &[T],
    y: &[T],
    degree: usize,
    poly: &mut Polynomial<T>,
    thresholds: &Thresholds<T>,
) -> Result<(), PolyfitError> {
    Validator::validate_inputs(x, y, degree)?;
    if degree != poly.degree() {
        return Err(PolyfitError::InvalidDegree {
            degree: i64::try_from(degree).unwrap_or(i64::MAX),
            max: MAX_DEGREE,
        });
    }

    trace!(
        "fitting degree {} polynomial to {} samples",
        degree,
        x.len()
    );

    let n = degree + 1;
    let mut system = SystemBuffer::new(n)?;
    build_normal_equations(x, y, degree, &mut system)?;

    if thresholds.pivot_check {
        if let Some(column) = is_singular(&system.matrix, n) {
            debug!("pre-check rejected system at column {}", column);
            warn!("normal equations are singular (degree {})", degree);
            return Err(PolyfitError::SingularMatrix { column });
        }
    }

    let (a, b, solution) = system.split_mut();
    if let Err(err) = gaussian_elimination(a, b, solution, n) {
        warn!("elimination failed for degree {}: {}", degree, err);
        return Err(err);
    }

    if let Some(i) = system.solution.iter().position(|c| !c.is_finite()) {
        warn!("solution coefficient {} is not finite", i);
        return Err(PolyfitError::SingularMatrix { column: i });
    }

    poly.set_fitted(&system.solution)?;
    trace!("fit complete, degree {}", degree);
    Ok(())
}

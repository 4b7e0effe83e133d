//! Normal-equations assembly for polynomial least squares.
//!
//! ## Purpose
//!
//! This module builds the linear system whose solution minimizes
//! `sum_k (y_k - sum_j c_j * x_k^j)^2`.
//!
//! ## Key concepts
//!
//! With the Vandermonde design matrix `X` (`X[k][j] = x_k^j`):
//!
//! ```text
//! A = X^T X    A[i][j] = sum_k x_k^(i+j)
//! B = X^T y    B[i]    = sum_k y_k * x_k^i
//! ```
//!
//! `A` is a Hankel matrix: every entry depends only on `i + j`, so the
//! `2 * degree + 1` power sums are accumulated once and scattered.
//!
//! ## Invariants
//!
//! * `A` is symmetric.
//! * Each power sum is accumulated in sample order, so every `A[i][j]` equals
//!   the direct per-entry summation bit for bit.
//!
//! ## Non-goals
//!
//! * Input validation beyond emptiness and buffer sizing (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scalar::power;
use crate::primitives::buffer::{Slot, SystemBuffer};
use crate::primitives::errors::PolyfitError;

/// Fill `buffer` with the normal equations for a degree-`degree` fit.
///
/// `x` and `y` must have equal length; `buffer` must have been sized for
/// `degree + 1` unknowns.
pub fn build_normal_equations<T: Float>(
    x: &[T],
    y: &[T],
    degree: usize,
    buffer: &mut SystemBuffer<T>,
) -> Result<(), PolyfitError> {
    if x.is_empty() || y.is_empty() {
        return Err(PolyfitError::EmptyInput);
    }
    let n = degree + 1;
    if buffer.size() != n {
        return Err(PolyfitError::InvalidInput(format!(
            "workspace sized for {} unknowns, degree {} needs {}",
            buffer.size(),
            degree,
            n
        )));
    }

    let mut power_sums = Slot::<T>::zeroed(2 * degree + 1)?;
    for (m, sum) in power_sums.iter_mut().enumerate() {
        *sum = x
            .iter()
            .fold(T::zero(), |acc, &xk| acc + power(xk, m as i32));
    }

    for i in 0..n {
        for j in 0..n {
            *buffer.get_mut(i, j) = power_sums[i + j];
        }
        buffer.rhs[i] = x
            .iter()
            .zip(y.iter())
            .fold(T::zero(), |acc, (&xk, &yk)| acc + yk * power(xk, i as i32));
    }

    Ok(())
}

//! Dense linear solver for the normal equations.
//!
//! ## Purpose
//!
//! This module solves the square system `A * x = B` produced by the
//! normal-equations builder using Gaussian elimination with partial pivoting.
//!
//! ## Design notes
//!
//! * **Row-major**: `A` is a flat slice of length `n * n`; rows are swapped in place.
//! * **In-place**: `A` and `B` are destroyed by the elimination; the caller owns them.
//! * **Absolute pivot threshold**: a pivot with `|p| < 1e-12` is treated as zero.
//!   The check is not scale invariant: badly scaled but regular systems may be
//!   rejected, and tiny-scale singular systems may slip through.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Partial pivoting**: for column `i`, the first row in `i..n` holding the
//!   largest `|A[r][i]|` becomes the pivot row.
//! * **Pre-check**: `is_singular` scans the same column maxima without mutating
//!   anything, so an obviously degenerate system can be rejected early.
//!
//! ## Non-goals
//!
//! * No scaled pivoting, iterative refinement, or rank-revealing fallback.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scalar::abs_value;
use crate::primitives::buffer::swap_rows;
use crate::primitives::errors::PolyfitError;

/// Pivot magnitude below which the system is considered singular.
pub const PIVOT_THRESHOLD: f64 = 1e-12;

#[inline]
fn pivot_threshold<T: Float>() -> T {
    T::from(PIVOT_THRESHOLD).unwrap_or_else(T::min_positive_value)
}

// ============================================================================
// Gaussian elimination
// ============================================================================

/// Solve `A * x = B` in place with partial pivoting.
///
/// `a` is row-major `n x n`, `b` and `x` have length `n`. On success `x` holds
/// the solution; `a` and `b` are left in their eliminated (upper-triangular)
/// form. On `SingularMatrix`, `x` is untouched.
pub fn gaussian_elimination<T: Float>(
    a: &mut [T],
    b: &mut [T],
    x: &mut [T],
    n: usize,
) -> Result<(), PolyfitError> {
    if n == 0 {
        return Err(PolyfitError::InvalidInput(
            "system size must be at least 1".into(),
        ));
    }
    if a.len() != n * n || b.len() != n || x.len() != n {
        return Err(PolyfitError::InvalidInput(format!(
            "system of size {} needs a {}-element matrix and {}-element vectors, got {}, {}, {}",
            n,
            n * n,
            n,
            a.len(),
            b.len(),
            x.len()
        )));
    }

    let threshold = pivot_threshold::<T>();

    // Forward elimination
    for i in 0..n {
        let mut max_row = i;
        for k in (i + 1)..n {
            if abs_value(a[k * n + i]) > abs_value(a[max_row * n + i]) {
                max_row = k;
            }
        }

        let pivot = abs_value(a[max_row * n + i]);
        if pivot.is_nan() || pivot < threshold {
            return Err(PolyfitError::SingularMatrix { column: i });
        }

        if max_row != i {
            swap_rows(a, n, i, max_row);
            b.swap(i, max_row);
        }

        for k in (i + 1)..n {
            let factor = a[k * n + i] / a[i * n + i];
            for j in i..n {
                a[k * n + j] = a[k * n + j] - factor * a[i * n + j];
            }
            b[k] = b[k] - factor * b[i];
        }
    }

    // Back substitution
    for i in (0..n).rev() {
        let mut acc = b[i];
        for j in (i + 1)..n {
            acc = acc - a[i * n + j] * x[j];
        }
        x[i] = acc / a[i * n + i];
    }

    Ok(())
}

// ============================================================================
// Singularity pre-check
// ============================================================================

/// Cheap singularity test that leaves `a` untouched.
///
/// Reports `Some(column)` for the first column whose entries on and below the
/// diagonal are all smaller in magnitude than the pivot threshold.
pub fn is_singular<T: Float>(a: &[T], n: usize) -> Option<usize> {
    let threshold = pivot_threshold::<T>();

    (0..n).find(|&i| {
        let max_in_column = (i..n)
            .map(|r| abs_value(a[r * n + i]))
            .fold(T::zero(), |m, v| if v > m { v } else { m });
        max_in_column < threshold
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivot_prefers_first_maximum() {
        // Rows 1 and 2 tie on |A[r][0]|; row 1 is selected and swapped to the top.
        let mut a = [1.0f64, 0.0, 0.0, -4.0, 1.0, 0.0, 4.0, 0.0, 1.0];
        let mut b = [1.0, 2.0, 3.0];
        let mut x = [0.0; 3];
        gaussian_elimination(&mut a, &mut b, &mut x, 3).unwrap();
        assert_eq!(&a[0..3], &[-4.0, 1.0, 0.0]);
        assert_eq!(b[0], 2.0);
    }

    #[test]
    fn singular_system_leaves_solution_untouched() {
        let mut a = [1.0f32, 2.0, 2.0, 4.0];
        let mut b = [1.0, 2.0];
        let mut x = [7.0, 7.0];
        let err = gaussian_elimination(&mut a, &mut b, &mut x, 2).unwrap_err();
        assert_eq!(err, PolyfitError::SingularMatrix { column: 1 });
        assert_eq!(x, [7.0, 7.0]);
    }
}

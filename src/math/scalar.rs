//! Scalar helpers: integer powers and absolute values.
//!
//! ## Purpose
//!
//! This module provides the two scalar primitives the rest of the crate is
//! built on, implemented with plain arithmetic so they behave identically
//! with and without `std`.
//!
//! ## Design notes
//!
//! * **Binary exponentiation**: `power` performs O(log |e|) multiplications.
//! * **Sign of zero**: `abs_value(-0.0)` returns `+0.0`.
//! * **Zero to a negative power**: `power(0, e < 0)` returns `0`, not infinity.
//!
//! ## Invariants
//!
//! * `power(x, 0) == 1` for every `x`, including `0`.
//! * `abs_value` is idempotent and propagates NaN.

// External dependencies
use num_traits::Float;

// ============================================================================
// Power
// ============================================================================

/// Raise `base` to an integer `exponent`.
///
/// # Special cases
///
/// ```text
/// power(x, 0)   = 1        (including 0^0)
/// power(0, e)   = 0        for every e != 0
/// power(1, e)   = 1
/// power(-1, e)  = 1 if e is even, -1 otherwise
/// power(x, -e)  = 1 / power(x, e)
/// ```
pub fn power<T: Float>(base: T, exponent: i32) -> T {
    if exponent == 0 {
        return T::one();
    }
    if base == T::zero() {
        return T::zero();
    }
    if base == T::one() {
        return T::one();
    }
    if base == -T::one() {
        return if exponent % 2 == 0 { T::one() } else { -T::one() };
    }

    let mut result = T::one();
    let mut current = base;
    let mut remaining = exponent.unsigned_abs();

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result * current;
        }
        current = current * current;
        remaining >>= 1;
    }

    if exponent < 0 {
        T::one() / result
    } else {
        result
    }
}

// ============================================================================
// Absolute value
// ============================================================================

/// Absolute value of `x`.
///
/// NaN is returned unchanged and negative zero becomes positive zero.
#[inline]
#[allow(clippy::eq_op)]
pub fn abs_value<T: Float>(x: T) -> T {
    if x != x {
        return x;
    }
    if x < T::zero() {
        -x
    } else if x == T::zero() {
        T::zero()
    } else {
        x
    }
}

/// `true` if `|value| < threshold`.
#[inline]
pub fn is_nearly_zero<T: Float>(value: T, threshold: T) -> bool {
    abs_value(value) < threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_handles_large_exponents_by_squaring() {
        assert_eq!(power(2.0f64, 10), 1024.0);
        assert_eq!(power(2.0f64, 31), 2147483648.0);
        assert_eq!(power(3.0f32, 5), 243.0);
    }

    #[test]
    fn power_of_minimum_exponent_does_not_overflow() {
        assert_eq!(power(2.0f64, i32::MIN), 0.0);
        assert_eq!(power(0.5f64, i32::MIN), f64::INFINITY);
    }

    #[test]
    fn abs_value_clears_negative_zero() {
        let z = abs_value(-0.0f32);
        assert_eq!(z, 0.0);
        assert!(z.is_sign_positive());
    }
}

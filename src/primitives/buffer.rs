//! Scratch storage for the normal-equations system.
//!
//! ## Purpose
//!
//! This module provides `SystemBuffer`, the transient workspace holding the
//! normal matrix `A`, the right-hand side `B`, and the solution vector for a
//! single least-squares fit.
//!
//! ## Design notes
//!
//! * **Contiguous**: `A` is one row-major `Vec<T>` addressed as `a[row * n + col]`.
//!   Row swaps exchange two disjoint ranges of that vector.
//! * **Fallible allocation**: Every buffer is reserved with `try_reserve_exact`,
//!   so allocator exhaustion surfaces as `PolyfitError::MemoryAlloc`.
//! * **Single owner**: The buffer lives for one fit call and is dropped on every
//!   return path, including errors.
//!
//! ## Invariants
//!
//! * `matrix.len() == n * n`, `rhs.len() == n`, `solution.len() == n`.
//! * A freshly allocated buffer is zero-filled.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PolyfitError;

// ============================================================================
// Slot
// ============================================================================

/// A zero-filled vector whose allocation failure is reported instead of aborting.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot<T>(Vec<T>);

impl<T: Float> Slot<T> {
    /// Allocate `len` zeros.
    pub fn zeroed(len: usize) -> Result<Self, PolyfitError> {
        let mut v = Vec::new();
        v.try_reserve_exact(len)
            .map_err(|_| PolyfitError::MemoryAlloc { requested: len })?;
        v.resize(len, T::zero());
        Ok(Self(v))
    }

    /// Consume the slot and return the underlying vector.
    #[inline]
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T> Deref for Slot<T> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// ============================================================================
// SystemBuffer
// ============================================================================

/// Normal-equations workspace for an `n x n` system.
#[derive(Debug, Clone)]
pub struct SystemBuffer<T> {
    /// Row-major `n x n` normal matrix.
    pub matrix: Slot<T>,
    /// Right-hand side of length `n`.
    pub rhs: Slot<T>,
    /// Solution written by the solver, length `n`.
    pub solution: Slot<T>,
    n: usize,
}

impl<T: Float> SystemBuffer<T> {
    /// Allocate a zeroed workspace for `n` unknowns.
    pub fn new(n: usize) -> Result<Self, PolyfitError> {
        let cells = n
            .checked_mul(n)
            .ok_or(PolyfitError::MemoryAlloc { requested: usize::MAX })?;
        Ok(Self {
            matrix: Slot::zeroed(cells)?,
            rhs: Slot::zeroed(n)?,
            solution: Slot::zeroed(n)?,
            n,
        })
    }

    /// Number of unknowns.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Mutable access to `A[row][col]`.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.matrix[row * self.n + col]
    }

    /// Split into `(A, B, x)` for the solver.
    #[inline]
    pub fn split_mut(&mut self) -> (&mut [T], &mut [T], &mut [T]) {
        (
            &mut self.matrix[..],
            &mut self.rhs[..],
            &mut self.solution[..],
        )
    }
}

// ============================================================================
// Row helpers
// ============================================================================

/// Swap rows `i` and `j` of a row-major matrix with `n` columns.
#[inline]
pub fn swap_rows<T>(matrix: &mut [T], n: usize, i: usize, j: usize) {
    if i == j {
        return;
    }
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    let (head, tail) = matrix.split_at_mut(hi * n);
    head[lo * n..lo * n + n].swap_with_slice(&mut tail[..n]);
}

//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numerical routines used by the fitting code:
//! - Integer powers and absolute values
//! - Gaussian elimination with partial pivoting
//!
//! These are reusable building blocks with no polynomial-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Integer power and absolute value.
pub mod scalar;

/// Dense linear solver.
pub mod linalg;

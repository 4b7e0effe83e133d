//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer post-processes a fitted polynomial:
//! - In-sample residuals and fit-quality metrics
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Goodness-of-fit diagnostics.
pub mod diagnostics;

//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the polynomial-specific algorithms:
//! - Normal-equations assembly from sample data
//! - The `Polynomial` model and its Horner evaluator
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Normal-equations builder.
pub mod normal_equations;

/// Polynomial model and evaluation.
pub mod polynomial;

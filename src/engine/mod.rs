//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a fit from raw samples to a committed polynomial:
//! - Input and configuration validation
//! - The validate / build / solve / commit pipeline
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Least-squares fitting pipeline.
pub mod executor;

/// Input validation.
pub mod validator;

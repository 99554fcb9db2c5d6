//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the three least-squares operations:
//! - Design system construction (Vandermonde matrix and target vector)
//! - Normal-equations reduction
//! - Residual evaluation
//!
//! Each operation validates its inputs, computes, and returns a `Result`.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Vandermonde design systems.
pub mod design;

/// Normal-equations reduction.
pub mod normal;

/// Residual vectors and norms.
pub mod residual;

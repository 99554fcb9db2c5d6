//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-solve assessment of a candidate solution:
//! residual-based fit quality metrics.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit quality metrics.
pub mod diagnostics;

//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numeric kernels behind every operation:
//! - Uniform sampling of an interval
//! - Vandermonde matrices
//! - Gram products, matrix-vector products and sums of squares
//!
//! These kernels perform no validation; callers in the algorithms layer
//! validate first.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Evenly spaced sample points.
pub mod spacing;

/// Vandermonde matrix construction.
pub mod vandermonde;

/// Matrix products and reductions.
pub mod products;

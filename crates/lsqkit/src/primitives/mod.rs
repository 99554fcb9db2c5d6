//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the error type, the input adapters and the shared
//! validator used throughout the crate. It has zero internal dependencies
//! within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Matrix and vector input adapters.
pub mod input;

/// Shape and numeric validation.
pub mod validator;

//! Error types for least-squares system operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building a
//! design system, reducing it to normal equations, or evaluating a residual.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., actual vs. expected lengths).
//! * **Enumerated**: Every failure maps to one variant; operations never panic on bad input.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Size validation**: Row and column counts must be strictly positive.
//! 2. **Shape validation**: Array rank and conformance between `A`, `x` and `b`.
//! 3. **Numeric validation**: NaN/infinite inputs and overflowing results.
//! 4. **Builder validation**: Missing or repeated builder parameters.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for least-squares system operations.
#[derive(Debug, Clone, PartialEq)]
pub enum LsqError {
    /// A size parameter (row or column count) must be strictly positive.
    InvalidSize {
        /// Name of the size parameter (`"m"` or `"n"`).
        parameter: &'static str,
        /// Value provided.
        got: usize,
    },

    /// An array has the wrong number of dimensions.
    InvalidDimension {
        /// Name of the offending argument.
        name: &'static str,
        /// Required number of dimensions.
        expected: usize,
        /// Number of dimensions provided.
        got: usize,
    },

    /// An array length does not conform to the coefficient matrix.
    ShapeMismatch {
        /// Name of the offending argument.
        name: &'static str,
        /// Length required by the coefficient matrix.
        expected: usize,
        /// Length provided.
        got: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Sampling interval must be finite with `lo < hi`.
    InvalidInterval {
        /// Lower end of the interval.
        lo: f64,
        /// Upper end of the interval.
        hi: f64,
    },

    /// The computation could not produce a finite result.
    ComputationFailed(String),

    /// A required builder parameter was never set.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for LsqError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidSize { parameter, got } => {
                write!(f, "Invalid size: {parameter} = {got} (must be > 0)")
            }
            Self::InvalidDimension {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Invalid dimension: {name} is {got}-dimensional, expected {expected}"
                )
            }
            Self::ShapeMismatch {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Shape mismatch: {name} has length {got}, expected {expected}"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidInterval { lo, hi } => {
                write!(
                    f,
                    "Invalid interval: [{lo}, {hi}] (must be finite with lo < hi)"
                )
            }
            Self::ComputationFailed(msg) => write!(f, "Computation failed: {msg}"),
            Self::MissingParameter { parameter } => {
                write!(f, "Missing parameter: '{parameter}' must be set before build()")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for LsqError {}

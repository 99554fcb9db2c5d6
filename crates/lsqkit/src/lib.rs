//! # lsqkit: Least-Squares System Utilities for Rust
//!
//! Small, pure building blocks for polynomial least-squares curve fitting:
//!
//! - **Design systems**: a Vandermonde coefficient matrix `A` (`m x n`) over
//!   `m` evenly spaced points `t` in `[0, 1]`, with targets `b = cos(4t)`.
//! - **Normal equations**: the square system `(A^T A) x = A^T b`.
//! - **Residual norms**: `||A x - b||_2` for a candidate solution `x`.
//!
//! Solving the normal equations is left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use lsqkit::prelude::*;
//! use ndarray::array;
//!
//! // Build a 5x3 design system
//! let (a, b) = design_system::<f64>(5, 3)?;
//! assert_eq!(a.dim(), (5, 3));
//!
//! // Reduce it to the 3x3 normal equations
//! let (ata, atb) = normal_equations(&a, &b)?;
//! assert_eq!(ata.dim(), (3, 3));
//! assert_eq!(atb.len(), 3);
//!
//! // Measure a candidate solution
//! let a = array![[1.0, 0.0], [0.0, 1.0]];
//! let r = residual_norm(&a, &array![1.0, 1.0], &array![2.0, 2.0])?;
//! assert!((r - 2.0_f64.sqrt()).abs() < 1e-12);
//! # Result::<(), LsqError>::Ok(())
//! ```
//!
//! ### Custom Design Systems
//!
//! ```rust
//! use lsqkit::prelude::*;
//!
//! let system = DesignSystemBuilder::<f64>::new()
//!     .rows(20)                   // 20 sample points
//!     .columns(4)                 // cubic polynomial
//!     .interval(-1.0, 1.0)        // sample over [-1, 1]
//!     .target(|t| t.exp())        // fit exp(t)
//!     .build()?;
//!
//! assert_eq!(system.rows(), 20);
//! # Result::<(), LsqError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every operation returns `Result<_, LsqError>`. Invalid sizes, wrong array
//! rank, non-conforming lengths, non-finite inputs and overflowing results
//! are all reported as an [`LsqError`](prelude::LsqError) variant; nothing
//! panics on bad input.
//!
//! ```rust
//! use lsqkit::prelude::*;
//! use ndarray::array;
//!
//! assert!(matches!(
//!     design_system::<f64>(0, 3),
//!     Err(LsqError::InvalidSize { parameter: "m", got: 0 })
//! ));
//!
//! let a = array![[1.0, 0.0], [1.0, 1.0], [1.0, 2.0]];
//! assert!(normal_equations(&a, &array![1.0, 2.0]).is_err());
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! lsqkit = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - errors, input adapters and validation.
mod primitives;

// Layer 2: Math - pure numeric kernels.
mod math;

// Layer 3: Algorithms - design systems, normal equations, residuals.
mod algorithms;

// Layer 4: Evaluation - fit diagnostics.
mod evaluation;

// High-level API.
mod api;

// Standard lsqkit prelude.
pub mod prelude {
    pub use crate::api::{
        DesignSystem, DesignSystemBuilder, Diagnostics, LsqError, LsqFloat, MatrixInput,
        NormalEquations, VectorInput, design_system, normal_equations, residual, residual_norm,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}

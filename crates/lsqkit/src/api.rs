//! High-level API for least-squares design systems.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the three free
//! functions ([`design_system`], [`normal_equations`], [`residual_norm`]) and a
//! fluent builder for design systems with a custom interval or target.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with the `cos(4t)` over `[0, 1]` defaults.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DesignSystemBuilder`] via `DesignSystemBuilder::new()`.
//! 2. Chain configuration methods (`.rows()`, `.columns()`, etc.).
//! 3. Call `.build()` to obtain a [`DesignSystem`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::design::{TargetFn, cosine_target};
use crate::primitives::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::design::{DesignSystem, design_system};
pub use crate::algorithms::normal::{NormalEquations, normal_equations};
pub use crate::algorithms::residual::{residual, residual_norm};
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::math::products::LsqFloat;
pub use crate::primitives::errors::LsqError;
pub use crate::primitives::input::{MatrixInput, VectorInput};

/// Fluent builder for design systems.
#[derive(Debug, Clone)]
pub struct DesignSystemBuilder<T> {
    /// Number of sample points (rows of `A`).
    pub rows: Option<usize>,

    /// Number of polynomial terms (columns of `A`).
    pub columns: Option<usize>,

    /// Sampling interval (default: `[0, 1]`).
    pub interval: Option<(T, T)>,

    /// Target function (default: `cos(4t)`).
    pub target: Option<TargetFn<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for DesignSystemBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> DesignSystemBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            rows: None,
            columns: None,
            interval: None,
            target: None,
            duplicate_param: None,
        }
    }

    /// Set the number of sample points `m`.
    pub fn rows(mut self, m: usize) -> Self {
        if self.rows.is_some() {
            self.duplicate_param = Some("rows");
        }
        self.rows = Some(m);
        self
    }

    /// Set the number of polynomial terms `n`.
    pub fn columns(mut self, n: usize) -> Self {
        if self.columns.is_some() {
            self.duplicate_param = Some("columns");
        }
        self.columns = Some(n);
        self
    }

    /// Set the sampling interval `[lo, hi]`.
    pub fn interval(mut self, lo: T, hi: T) -> Self {
        if self.interval.is_some() {
            self.duplicate_param = Some("interval");
        }
        self.interval = Some((lo, hi));
        self
    }

    /// Set the target function evaluated at each sample point.
    pub fn target(mut self, target: TargetFn<T>) -> Self {
        if self.target.is_some() {
            self.duplicate_param = Some("target");
        }
        self.target = Some(target);
        self
    }

    /// Validate the configuration and generate the design system.
    pub fn build(self) -> Result<DesignSystem<T>, LsqError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let m = Validator::validate_present(self.rows, "rows")?;
        let n = Validator::validate_present(self.columns, "columns")?;
        let (lo, hi) = self.interval.unwrap_or((T::zero(), T::one()));
        let target = self.target.unwrap_or(cosine_target::<T>);

        DesignSystem::generate(m, n, lo, hi, target)
    }
}

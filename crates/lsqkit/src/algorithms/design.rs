//! Design System Construction
//!
//! ## Purpose
//!
//! This module builds the polynomial least-squares test system: a
//! Vandermonde coefficient matrix `A` (`m x n`) over uniformly spaced sample
//! points `t`, together with the target vector `b = f(t)`.
//!
//! ## Design notes
//!
//! * **Default target**: `f(t) = cos(4t)` over `t` in `[0, 1]`.
//! * **Validated**: Sizes, the sampling interval and the allocation size are
//!   checked before anything is allocated.
//! * **Finite output**: A target function that produces NaN/inf fails with
//!   [`LsqError::ComputationFailed`] instead of returning a poisoned system.
//!
//! ## Invariants
//!
//! * `a.dim() == (m, n)` and `b.len() == m`.
//! * Column 0 of `a` is all ones; column `j` is `t^j`.

// External dependencies
use log::{debug, trace};
use ndarray::{Array1, Array2};
use num_traits::Float;

// Internal dependencies
use crate::math::spacing::linspace;
use crate::math::vandermonde::vandermonde;
use crate::primitives::errors::LsqError;
use crate::primitives::validator::Validator;

/// Scalar target function applied to each sample point.
pub type TargetFn<T> = fn(T) -> T;

/// Default target function `cos(4t)`.
#[inline]
pub fn cosine_target<T: Float>(t: T) -> T {
    (T::from(4.0).unwrap_or(T::one()) * t).cos()
}

// ============================================================================
// Design System
// ============================================================================

/// Coefficient matrix and target vector of an `m x n` least-squares system.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DesignSystem<T> {
    /// Vandermonde coefficient matrix (`m x n`).
    pub a: Array2<T>,

    /// Target vector (`m`).
    pub b: Array1<T>,
}

impl<T: Float> DesignSystem<T> {
    /// Generate a design system over `[lo, hi]` with a custom target.
    pub fn generate(
        m: usize,
        n: usize,
        lo: T,
        hi: T,
        target: TargetFn<T>,
    ) -> Result<Self, LsqError> {
        Validator::validate_size(m, "m")?;
        Validator::validate_size(n, "n")?;
        Validator::validate_interval(lo, hi)?;
        Validator::validate_allocation::<T>(m, n)?;

        let t = linspace(lo, hi, m);
        let b = t.mapv(target);
        Validator::validate_result(b.iter(), "target vector")?;

        let a = vandermonde(t.view(), n);
        Validator::validate_result(a.iter(), "Vandermonde matrix")?;

        Ok(Self { a, b })
    }

    /// Generate the default `cos(4t)` system over `[0, 1]`.
    pub fn cosine(m: usize, n: usize) -> Result<Self, LsqError> {
        Self::generate(m, n, T::zero(), T::one(), cosine_target)
    }

    /// Number of rows (`m`).
    pub fn rows(&self) -> usize {
        self.a.nrows()
    }

    /// Number of columns (`n`).
    pub fn columns(&self) -> usize {
        self.a.ncols()
    }

    /// Split into `(A, b)`.
    pub fn into_parts(self) -> (Array2<T>, Array1<T>) {
        (self.a, self.b)
    }
}

// ============================================================================
// Entry Point
// ============================================================================

/// Build the `m x n` Vandermonde matrix `A` and target `b = cos(4t)` over
/// `m` evenly spaced points `t` in `[0, 1]`.
///
/// Fails with [`LsqError::InvalidSize`] when `m` or `n` is zero.
pub fn design_system<T: Float>(m: usize, n: usize) -> Result<(Array2<T>, Array1<T>), LsqError> {
    DesignSystem::cosine(m, n)
        .inspect(|_| trace!("design_system: built {m}x{n} system"))
        .inspect_err(|e| debug!("design_system rejected m={m}, n={n}: {e}"))
        .map(DesignSystem::into_parts)
}

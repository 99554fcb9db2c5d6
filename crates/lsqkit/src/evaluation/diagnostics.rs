//! Diagnostic metrics for least-squares fit quality assessment.
//!
//! ## Purpose
//!
//! This module summarises how well a candidate solution `x` fits the system
//! `A x = b`, starting from the residual vector `r = A x - b`.
//!
//! ## Design notes
//!
//! * **Residual-based**: Every metric is derived from `r` and the targets `b`.
//! * **Validated**: [`Diagnostics::compute`] applies the same checks as the
//!   residual operations.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Residual Metrics**: Norm, RSS, RMSE, MAE and max absolute residual.
//! * **Goodness-of-Fit**: R^2 measures the variance of `b` explained by `A x`.
//!
//! ## Invariants
//!
//! * Norm, RSS, RMSE, MAE and max absolute residual are non-negative.
//! * `residual_norm^2 == rss` up to rounding.
//! * R^2 <= 1 (R^2 = 1 is a perfect fit).
//!
//! ## Non-goals
//!
//! * This module does not solve the system or refine `x`.
//! * This module does not provide p-values or formal hypothesis tests.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use ndarray::ArrayView1;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::residual::ResidualSystem;
use crate::math::products::{LsqFloat, euclidean_norm, sum_of_squares};
use crate::primitives::errors::LsqError;
use crate::primitives::input::{MatrixInput, VectorInput};
use crate::primitives::validator::Validator;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Diagnostic metrics for a candidate least-squares solution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics<T> {
    /// Euclidean norm of the residual `||A x - b||_2`.
    pub residual_norm: T,

    /// Residual sum of squares (RSS).
    pub rss: T,

    /// Root Mean Squared Error (RMSE).
    pub rmse: T,

    /// Mean Absolute Error (MAE).
    pub mae: T,

    /// Largest absolute residual.
    pub max_abs_residual: T,

    /// Coefficient of determination (R^2).
    pub r_squared: T,
}

impl<T: LsqFloat> Diagnostics<T> {
    // ========================================================================
    // Main Computation
    // ========================================================================

    /// Validate `(A, x, b)` and compute diagnostics for `x`.
    pub fn compute<A, X, B>(a: &A, x: &X, b: &B) -> core::result::Result<Self, LsqError>
    where
        A: MatrixInput<T> + ?Sized,
        X: VectorInput<T> + ?Sized,
        B: VectorInput<T> + ?Sized,
    {
        let sys = ResidualSystem::new(a, x, b)?;
        let r = sys.residual()?;
        Self::from_residuals(&r.view(), &sys.b)
    }

    /// Compute diagnostics from a residual vector and its targets.
    ///
    /// Fails with [`LsqError::ShapeMismatch`] when the lengths differ.
    pub fn from_residuals(
        residuals: &ArrayView1<'_, T>,
        b: &ArrayView1<'_, T>,
    ) -> core::result::Result<Self, LsqError> {
        Validator::validate_length(b, residuals.len(), "b")?;

        let n = residuals.len();
        if n == 0 {
            return Ok(Self {
                residual_norm: T::zero(),
                rss: T::zero(),
                rmse: T::zero(),
                mae: T::zero(),
                max_abs_residual: T::zero(),
                r_squared: T::zero(),
            });
        }

        let n_t = T::from(n).unwrap_or(T::one());
        let rss = sum_of_squares(residuals);
        let (sum_abs, max_abs) = residuals
            .iter()
            .fold((T::zero(), T::zero()), |(sum, max), &r| {
                (sum + r.abs(), max.max(r.abs()))
            });

        Ok(Self {
            residual_norm: euclidean_norm(residuals),
            rss,
            rmse: (rss / n_t).sqrt(),
            mae: sum_abs / n_t,
            max_abs_residual: max_abs,
            r_squared: Self::calculate_r_squared(b, rss),
        })
    }

    // ========================================================================
    // Goodness-of-Fit Metrics
    // ========================================================================

    /// Compute the coefficient of determination (R^2).
    /// R^2 = 1 - SS_res / SS_tot.
    fn calculate_r_squared(b: &ArrayView1<'_, T>, ss_res: T) -> T {
        let n = b.len();
        if n == 1 {
            return T::one();
        }

        let n_t = T::from(n).unwrap_or(T::one());
        let mean = b.iter().fold(T::zero(), |acc, &v| acc + v) / n_t;
        let ss_tot = b.iter().fold(T::zero(), |acc, &v| {
            let d = v - mean;
            acc + d * d
        });

        if ss_tot == T::zero() {
            // All targets are identical
            if ss_res == T::zero() {
                T::one()
            } else {
                T::zero()
            }
        } else {
            T::one() - ss_res / ss_tot
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Least-Squares Diagnostics:")?;
        writeln!(f, "  Residual norm: {:.6}", self.residual_norm)?;
        writeln!(f, "  RSS:           {:.6}", self.rss)?;
        writeln!(f, "  RMSE:          {:.6}", self.rmse)?;
        writeln!(f, "  MAE:           {:.6}", self.mae)?;
        writeln!(f, "  Max |r|:       {:.6}", self.max_abs_residual)?;
        writeln!(f, "  R²:            {:.6}", self.r_squared)?;
        Ok(())
    }
}

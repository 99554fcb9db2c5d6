//! Normal-Equations Reduction
//!
//! ## Purpose
//!
//! This module reduces a rectangular system `A x = b` (`A` is `m x n`) to
//! the square system `(A^T A) x = A^T b`, whose solution is the
//! least-squares solution of the original system.
//!
//! ## Design notes
//!
//! * **Purely algebraic**: `m < n` and `m == n` are accepted; conditioning
//!   and solvability of the reduced system are not checked.
//! * **Symmetric by construction**: `A^T A` is mirrored from its upper triangle.
//! * **Validated**: Rank, conformance and finiteness are checked before any
//!   product is formed, and the products must stay finite.
//!
//! ## Non-goals
//!
//! * This module does not solve the reduced system.

// External dependencies
use log::{debug, trace};
use ndarray::{Array1, Array2};

// Internal dependencies
use crate::math::products::{LsqFloat, gram, transpose_apply};
use crate::primitives::errors::LsqError;
use crate::primitives::input::{MatrixInput, VectorInput};
use crate::primitives::validator::Validator;

/// Square normal-equations system `a x = b` with `a = A^T A` and `b = A^T b`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalEquations<T> {
    /// Gram matrix `A^T A` (`n x n`).
    pub a: Array2<T>,

    /// Projected target `A^T b` (`n`).
    pub b: Array1<T>,
}

impl<T: LsqFloat> NormalEquations<T> {
    /// Reduce the rectangular system `(A, b)`.
    pub fn from_system<A, B>(a: &A, b: &B) -> Result<Self, LsqError>
    where
        A: MatrixInput<T> + ?Sized,
        B: VectorInput<T> + ?Sized,
    {
        let a = a.as_matrix_view("A")?;
        let b = b.as_vector_view("b")?;

        Validator::validate_rows(&a, &b, "b")?;
        Validator::validate_finite_matrix(&a, "A")?;
        Validator::validate_finite_vector(&b, "b")?;

        let a_new = gram(&a);
        Validator::validate_result(a_new.iter(), "A^T A")?;

        let b_new = transpose_apply(&a, &b);
        Validator::validate_result(b_new.iter(), "A^T b")?;

        Ok(Self { a: a_new, b: b_new })
    }

    /// Size `n` of the square system.
    pub fn dim(&self) -> usize {
        self.b.len()
    }

    /// Check symmetry of the Gram matrix within an absolute tolerance.
    pub fn is_symmetric(&self, tol: T) -> bool {
        let n = self.a.nrows();
        (0..n).all(|i| (i + 1..n).all(|j| (self.a[[i, j]] - self.a[[j, i]]).abs() <= tol))
    }

    /// Split into `(A^T A, A^T b)`.
    pub fn into_parts(self) -> (Array2<T>, Array1<T>) {
        (self.a, self.b)
    }
}

/// Reduce `A x = b` to its normal equations `(A^T A, A^T b)`.
///
/// Fails when `b.len() != A.nrows()`, when a dynamic-rank input has the
/// wrong rank, or when the inputs or products are not finite.
pub fn normal_equations<T, A, B>(a: &A, b: &B) -> Result<(Array2<T>, Array1<T>), LsqError>
where
    T: LsqFloat,
    A: MatrixInput<T> + ?Sized,
    B: VectorInput<T> + ?Sized,
{
    NormalEquations::from_system(a, b)
        .inspect(|ne| trace!("normal_equations: reduced to {0}x{0}", ne.dim()))
        .inspect_err(|e| debug!("normal_equations rejected input: {e}"))
        .map(NormalEquations::into_parts)
}

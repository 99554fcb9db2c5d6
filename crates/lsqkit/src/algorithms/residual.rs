//! Residual evaluation for candidate solutions.
//!
//! The residual of `x` for the system `A x = b` is `r = A x - b`; its
//! Euclidean norm measures how far `x` is from an exact solution.

// External dependencies
use log::{debug, trace};
use ndarray::{Array1, ArrayView1, ArrayView2};

// Internal dependencies
use crate::math::products::{LsqFloat, apply, euclidean_norm};
use crate::primitives::errors::LsqError;
use crate::primitives::input::{MatrixInput, VectorInput};
use crate::primitives::validator::Validator;

/// Validated, borrowed `(A, x, b)` triple with conforming shapes.
#[derive(Debug, Clone, Copy)]
pub struct ResidualSystem<'a, T> {
    /// Coefficient matrix (`m x n`).
    pub a: ArrayView2<'a, T>,

    /// Candidate solution (`n`).
    pub x: ArrayView1<'a, T>,

    /// Target vector (`m`).
    pub b: ArrayView1<'a, T>,
}

impl<'a, T: LsqFloat> ResidualSystem<'a, T> {
    /// Borrow and validate a system.
    pub fn new<A, X, B>(a: &'a A, x: &'a X, b: &'a B) -> Result<Self, LsqError>
    where
        A: MatrixInput<T> + ?Sized,
        X: VectorInput<T> + ?Sized,
        B: VectorInput<T> + ?Sized,
    {
        let a = a.as_matrix_view("A")?;
        let x = x.as_vector_view("x")?;
        let b = b.as_vector_view("b")?;

        Validator::validate_columns(&a, &x, "x")?;
        Validator::validate_rows(&a, &b, "b")?;
        Validator::validate_finite_matrix(&a, "A")?;
        Validator::validate_finite_vector(&x, "x")?;
        Validator::validate_finite_vector(&b, "b")?;

        Ok(Self { a, x, b })
    }

    /// Residual vector `A x - b`.
    pub fn residual(&self) -> Result<Array1<T>, LsqError> {
        let r = apply(&self.a, &self.x) - &self.b;
        Validator::validate_result(r.iter(), "residual")?;
        Ok(r)
    }

    /// Euclidean norm of the residual.
    pub fn norm(&self) -> Result<T, LsqError> {
        let r = self.residual()?;
        let norm = euclidean_norm(&r.view());
        Validator::validate_result([norm].iter(), "residual norm")?;
        Ok(norm)
    }
}

/// Residual vector `A x - b`.
pub fn residual<T, A, X, B>(a: &A, x: &X, b: &B) -> Result<Array1<T>, LsqError>
where
    T: LsqFloat,
    A: MatrixInput<T> + ?Sized,
    X: VectorInput<T> + ?Sized,
    B: VectorInput<T> + ?Sized,
{
    ResidualSystem::new(a, x, b)
        .and_then(|sys| sys.residual())
        .inspect_err(|e| debug!("residual rejected input: {e}"))
}

/// Euclidean norm `||A x - b||_2` of the residual of `x`.
///
/// Fails when `x.len() != A.ncols()`, `b.len() != A.nrows()`, a
/// dynamic-rank input has the wrong rank, or the computation is not finite.
pub fn residual_norm<T, A, X, B>(a: &A, x: &X, b: &B) -> Result<T, LsqError>
where
    T: LsqFloat,
    A: MatrixInput<T> + ?Sized,
    X: VectorInput<T> + ?Sized,
    B: VectorInput<T> + ?Sized,
{
    ResidualSystem::new(a, x, b)
        .and_then(|sys| sys.norm())
        .inspect(|norm| trace!("residual_norm: {}", norm.to_f64().unwrap_or(f64::NAN)))
        .inspect_err(|e| debug!("residual_norm rejected input: {e}"))
}

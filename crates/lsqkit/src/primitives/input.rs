//! Input abstractions for least-squares operations.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for coefficient matrices and
//! vectors, allowing every operation to accept multiple data formats (slices,
//! vectors, fixed-rank and dynamic-rank ndarray arrays) through one interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Adapters hand out borrowed views of the caller's buffers.
//! * **Static rank where possible**: `Ix2`/`Ix1` arrays cannot have the wrong rank.
//! * **Runtime rank otherwise**: `IxDyn` arrays are checked and rejected with
//!   [`LsqError::InvalidDimension`].
//!
//! ## Key concepts
//!
//! * **MatrixInput**: Anything that can be viewed as a 2-D array.
//! * **VectorInput**: Anything that can be viewed as a 1-D array.
//!
//! ## Non-goals
//!
//! * This module does not check conformance between arguments (see the validator).
//! * This module does not copy, reshape or flatten data.

// External dependencies
use ndarray::{ArrayBase, ArrayView1, ArrayView2, Data, Ix1, Ix2, IxDyn};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LsqError;

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Types that can be used as a coefficient matrix.
pub trait MatrixInput<T: Float> {
    /// Borrow the input as a 2-D view; `name` labels the argument in errors.
    fn as_matrix_view(&self, name: &'static str) -> Result<ArrayView2<'_, T>, LsqError>;
}

/// Types that can be used as a solution or target vector.
pub trait VectorInput<T: Float> {
    /// Borrow the input as a 1-D view; `name` labels the argument in errors.
    fn as_vector_view(&self, name: &'static str) -> Result<ArrayView1<'_, T>, LsqError>;
}

// ============================================================================
// Matrix Implementations
// ============================================================================

impl<T: Float, S> MatrixInput<T> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
{
    fn as_matrix_view(&self, _name: &'static str) -> Result<ArrayView2<'_, T>, LsqError> {
        Ok(self.view())
    }
}

impl<T: Float, S> MatrixInput<T> for ArrayBase<S, IxDyn>
where
    S: Data<Elem = T>,
{
    fn as_matrix_view(&self, name: &'static str) -> Result<ArrayView2<'_, T>, LsqError> {
        self.view()
            .into_dimensionality::<Ix2>()
            .map_err(|_| LsqError::InvalidDimension {
                name,
                expected: 2,
                got: self.ndim(),
            })
    }
}

// ============================================================================
// Vector Implementations
// ============================================================================

impl<T: Float> VectorInput<T> for [T] {
    fn as_vector_view(&self, _name: &'static str) -> Result<ArrayView1<'_, T>, LsqError> {
        Ok(ArrayView1::from(self))
    }
}

impl<T: Float> VectorInput<T> for Vec<T> {
    fn as_vector_view(&self, _name: &'static str) -> Result<ArrayView1<'_, T>, LsqError> {
        Ok(ArrayView1::from(self.as_slice()))
    }
}

impl<T: Float, S> VectorInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_vector_view(&self, _name: &'static str) -> Result<ArrayView1<'_, T>, LsqError> {
        Ok(self.view())
    }
}

impl<T: Float, S> VectorInput<T> for ArrayBase<S, IxDyn>
where
    S: Data<Elem = T>,
{
    fn as_vector_view(&self, name: &'static str) -> Result<ArrayView1<'_, T>, LsqError> {
        self.view()
            .into_dimensionality::<Ix1>()
            .map_err(|_| LsqError::InvalidDimension {
                name,
                expected: 1,
                got: self.ndim(),
            })
    }
}

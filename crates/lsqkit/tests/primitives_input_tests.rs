#![cfg(feature = "dev")]
//! Tests for matrix and vector input adapters.
//!
//! These tests verify that every supported container can be viewed with the
//! right rank, and that dynamic-rank arrays with the wrong rank are rejected.
//!
//! ## Test Organization
//!
//! 1. **Matrix Inputs** - Fixed-rank, dynamic-rank, views
//! 2. **Vector Inputs** - Slices, vectors, fixed-rank, dynamic-rank

use ndarray::{Array, ArrayD, IxDyn, array};

use lsqkit::internals::primitives::errors::LsqError;
use lsqkit::internals::primitives::input::{MatrixInput, VectorInput};

// ============================================================================
// Matrix Input Tests
// ============================================================================

/// Test fixed-rank matrices are viewed unchanged.
#[test]
fn test_matrix_fixed_rank() {
    let a = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
    let view = a.as_matrix_view("A").unwrap();

    assert_eq!(view.dim(), (3, 2));
    assert_eq!(view[[2, 1]], 6.0);
}

/// Test views and transposed views are accepted.
#[test]
fn test_matrix_view_input() {
    let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let t = a.t();
    let view = t.as_matrix_view("A").unwrap();

    assert_eq!(view.dim(), (3, 2));
    assert_eq!(view[[0, 1]], 4.0);
}

/// Test dynamic-rank 2-D arrays are accepted.
#[test]
fn test_matrix_dynamic_rank_ok() {
    let a: ArrayD<f64> = ArrayD::zeros(IxDyn(&[4, 3]));
    let view = a.as_matrix_view("A").unwrap();

    assert_eq!(view.dim(), (4, 3));
}

/// Test dynamic-rank arrays of the wrong rank are rejected.
#[test]
fn test_matrix_dynamic_rank_wrong() {
    let one_d: ArrayD<f64> = ArrayD::zeros(IxDyn(&[4]));
    let three_d: ArrayD<f64> = ArrayD::zeros(IxDyn(&[2, 2, 2]));

    assert_eq!(
        one_d.as_matrix_view("A").unwrap_err(),
        LsqError::InvalidDimension {
            name: "A",
            expected: 2,
            got: 1
        }
    );
    assert_eq!(
        three_d.as_matrix_view("A").unwrap_err(),
        LsqError::InvalidDimension {
            name: "A",
            expected: 2,
            got: 3
        }
    );
}

// ============================================================================
// Vector Input Tests
// ============================================================================

/// Test slices and vectors are accepted.
#[test]
fn test_vector_slice_and_vec() {
    let v = vec![1.0, 2.0, 3.0];
    let from_vec = v.as_vector_view("b").unwrap();
    let from_slice = v[..2].as_vector_view("b").unwrap();

    assert_eq!(from_vec.len(), 3);
    assert_eq!(from_slice.len(), 2);
    assert_eq!(from_slice[1], 2.0);
}

/// Test fixed-rank and strided 1-D arrays are accepted.
#[test]
fn test_vector_fixed_rank() {
    let a = array![[1.0, 2.0], [3.0, 4.0]];
    let column = a.column(1);
    let view = column.as_vector_view("x").unwrap();

    assert_eq!(view.to_vec(), vec![2.0, 4.0]);
}

/// Test dynamic-rank vectors are checked for rank.
#[test]
fn test_vector_dynamic_rank() {
    let ok: ArrayD<f64> = Array::from_vec(vec![1.0, 2.0]).into_dyn();
    let bad: ArrayD<f64> = ArrayD::zeros(IxDyn(&[2, 1]));

    assert_eq!(ok.as_vector_view("b").unwrap().len(), 2);
    assert_eq!(
        bad.as_vector_view("b").unwrap_err(),
        LsqError::InvalidDimension {
            name: "b",
            expected: 1,
            got: 2
        }
    );
}

#![cfg(feature = "dev")]
//! Tests for input validation utilities.
//!
//! These tests verify the validation functions shared by all operations:
//! - Size positivity and allocation limits
//! - Row/column conformance
//! - Finiteness of inputs and results
//! - Builder parameter checks
//!
//! ## Test Organization
//!
//! 1. **Size Validation** - Positivity, overflow
//! 2. **Shape Validation** - Rows and columns
//! 3. **Numeric Validation** - NaN/inf inputs, results, intervals
//! 4. **Builder Validation** - Missing and duplicate parameters

use ndarray::{Array1, array};

use lsqkit::internals::primitives::errors::LsqError;
use lsqkit::internals::primitives::validator::Validator;

// ============================================================================
// Size Validation Tests
// ============================================================================

/// Test validation rejects a zero size.
#[test]
fn test_validate_size_zero() {
    let res = Validator::validate_size(0, "m");

    assert_eq!(
        res,
        Err(LsqError::InvalidSize {
            parameter: "m",
            got: 0
        })
    );
}

/// Test validation accepts positive sizes.
#[test]
fn test_validate_size_positive() {
    assert!(Validator::validate_size(1, "n").is_ok());
    assert!(Validator::validate_size(1_000_000, "n").is_ok());
}

/// Test allocation validation rejects overflowing products.
#[test]
fn test_validate_allocation_overflow() {
    let res = Validator::validate_allocation::<f64>(usize::MAX, 2);

    assert!(
        matches!(res, Err(LsqError::ComputationFailed(_))),
        "Overflowing m*n should error"
    );
}

/// Test allocation validation accounts for the element size.
///
/// Verifies that an element count below `isize::MAX` is still rejected when
/// its byte size is not.
#[test]
fn test_validate_allocation_byte_size() {
    let m = 1usize << 61;

    assert!(Validator::validate_allocation::<u8>(m, 2).is_ok());
    assert!(matches!(
        Validator::validate_allocation::<f64>(m, 2),
        Err(LsqError::ComputationFailed(_))
    ));
    assert!(matches!(
        Validator::validate_allocation::<f32>(m, 1),
        Err(LsqError::ComputationFailed(_))
    ));
}

/// Test allocation validation accepts ordinary sizes.
#[test]
fn test_validate_allocation_ok() {
    assert!(Validator::validate_allocation::<f64>(100, 10).is_ok());
}

// ============================================================================
// Shape Validation Tests
// ============================================================================

/// Test row conformance.
///
/// Verifies that a vector must have one entry per row of `A`.
#[test]
fn test_validate_rows() {
    let a = array![[1.0, 0.0], [1.0, 1.0], [1.0, 2.0]];
    let good = array![1.0, 2.0, 3.0];
    let bad = array![1.0, 2.0];

    assert!(Validator::validate_rows(&a.view(), &good.view(), "b").is_ok());
    assert_eq!(
        Validator::validate_rows(&a.view(), &bad.view(), "b"),
        Err(LsqError::ShapeMismatch {
            name: "b",
            expected: 3,
            got: 2
        })
    );
}

/// Test column conformance.
///
/// Verifies that a vector must have one entry per column of `A`.
#[test]
fn test_validate_columns() {
    let a = array![[1.0, 0.0], [1.0, 1.0], [1.0, 2.0]];
    let good = array![1.0, 2.0];
    let bad = array![1.0, 2.0, 3.0];

    assert!(Validator::validate_columns(&a.view(), &good.view(), "x").is_ok());
    assert_eq!(
        Validator::validate_columns(&a.view(), &bad.view(), "x"),
        Err(LsqError::ShapeMismatch {
            name: "x",
            expected: 2,
            got: 3
        })
    );
}

/// Test length conformance between two vectors.
#[test]
fn test_validate_length() {
    let v = array![1.0, 2.0];

    assert!(Validator::validate_length(&v.view(), 2, "b").is_ok());
    assert_eq!(
        Validator::validate_length(&v.view(), 3, "b"),
        Err(LsqError::ShapeMismatch {
            name: "b",
            expected: 3,
            got: 2
        })
    );
}

// ============================================================================
// Numeric Validation Tests
// ============================================================================

/// Test validation rejects non-finite matrix entries.
///
/// Verifies that the error message names the offending position.
#[test]
fn test_validate_nonfinite_matrix() {
    let a = array![[1.0, 0.0], [1.0, f64::NAN]];
    let res = Validator::validate_finite_matrix(&a.view(), "A");

    if let Err(LsqError::InvalidNumericValue(s)) = res {
        assert!(s.contains("A[1][1]"), "Error should mention A[1][1]: {s}");
    } else {
        panic!("Expected InvalidNumericValue for A");
    }
}

/// Test validation rejects non-finite vector entries.
#[test]
fn test_validate_nonfinite_vector() {
    let b = array![1.0, f64::INFINITY, 3.0];
    let res = Validator::validate_finite_vector(&b.view(), "b");

    if let Err(LsqError::InvalidNumericValue(s)) = res {
        assert!(s.contains("b[1]"), "Error should mention b[1]: {s}");
    } else {
        panic!("Expected InvalidNumericValue for b");
    }
}

/// Test validation accepts finite inputs, including empty ones.
#[test]
fn test_validate_finite_ok() {
    let a = array![[1.0, -2.0], [1e300, 0.0]];
    let empty: Array1<f64> = Array1::zeros(0);

    assert!(Validator::validate_finite_matrix(&a.view(), "A").is_ok());
    assert!(Validator::validate_finite_vector(&empty.view(), "b").is_ok());
}

/// Test result validation flags overflow.
#[test]
fn test_validate_result() {
    let ok = [1.0, 2.0];
    let overflowed = [1.0, f64::INFINITY];

    assert!(Validator::validate_result(ok.iter(), "A^T A").is_ok());
    assert!(matches!(
        Validator::validate_result(overflowed.iter(), "A^T A"),
        Err(LsqError::ComputationFailed(msg)) if msg.contains("A^T A")
    ));
}

/// Test interval validation.
///
/// Verifies finite, strictly increasing intervals are required.
#[test]
fn test_validate_interval() {
    assert!(Validator::validate_interval(0.0, 1.0).is_ok());
    assert!(Validator::validate_interval(-3.0, -2.0).is_ok());

    assert_eq!(
        Validator::validate_interval(1.0, 1.0),
        Err(LsqError::InvalidInterval { lo: 1.0, hi: 1.0 })
    );
    assert!(Validator::validate_interval(2.0, 1.0).is_err());
    assert!(Validator::validate_interval(0.0, f64::INFINITY).is_err());
    assert!(Validator::validate_interval(f64::NAN, 1.0).is_err());
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test missing parameter detection.
#[test]
fn test_validate_present() {
    assert_eq!(Validator::validate_present(Some(3usize), "rows"), Ok(3));
    assert_eq!(
        Validator::validate_present::<usize>(None, "rows"),
        Err(LsqError::MissingParameter { parameter: "rows" })
    );
}

/// Test duplicate parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("columns")),
        Err(LsqError::DuplicateParameter {
            parameter: "columns"
        })
    );
}

// ============================================================================
// Error Message Tests
// ============================================================================

/// Test error display formatting.
#[test]
fn test_error_display() {
    let err = LsqError::ShapeMismatch {
        name: "b",
        expected: 3,
        got: 2,
    };
    assert_eq!(
        err.to_string(),
        "Shape mismatch: b has length 2, expected 3"
    );

    let err = LsqError::InvalidSize {
        parameter: "n",
        got: 0,
    };
    assert_eq!(err.to_string(), "Invalid size: n = 0 (must be > 0)");

    let err = LsqError::InvalidDimension {
        name: "A",
        expected: 2,
        got: 3,
    };
    assert_eq!(
        err.to_string(),
        "Invalid dimension: A is 3-dimensional, expected 2"
    );
}

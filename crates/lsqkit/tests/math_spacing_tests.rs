#![cfg(feature = "dev")]
//! Tests for evenly spaced sample points.
//!
//! ## Test Organization
//!
//! 1. **Endpoints** - Inclusion of both ends, degenerate sizes
//! 2. **Spacing** - Uniform steps

use approx::assert_relative_eq;

use lsqkit::internals::math::spacing::linspace;

// ============================================================================
// Endpoint Tests
// ============================================================================

/// Test both endpoints are included exactly.
#[test]
fn test_linspace_endpoints() {
    let t = linspace(0.0f64, 1.0, 7);

    assert_eq!(t.len(), 7);
    assert_eq!(t[0], 0.0);
    assert_eq!(t[6], 1.0);
}

/// Test a single point degenerates to the lower endpoint.
#[test]
fn test_linspace_single_point() {
    let t = linspace(0.0f64, 1.0, 1);

    assert_eq!(t.to_vec(), vec![0.0]);
}

/// Test two points are exactly the endpoints.
#[test]
fn test_linspace_two_points() {
    let t = linspace(-2.0f64, 3.0, 2);

    assert_eq!(t.to_vec(), vec![-2.0, 3.0]);
}

/// Test zero points yields an empty vector.
#[test]
fn test_linspace_empty() {
    let t = linspace(0.0f64, 1.0, 0);

    assert!(t.is_empty());
}

// ============================================================================
// Spacing Tests
// ============================================================================

/// Test values follow i / (m - 1) on the unit interval.
#[test]
fn test_linspace_uniform_unit() {
    let m = 11;
    let t = linspace(0.0f64, 1.0, m);

    for (i, &ti) in t.iter().enumerate() {
        assert_relative_eq!(ti, i as f64 / (m - 1) as f64, epsilon = 1e-15);
    }
}

/// Test uniform spacing on a shifted interval in single precision.
#[test]
fn test_linspace_uniform_f32() {
    let t = linspace(-1.0f32, 1.0, 5);
    let expected = [-1.0f32, -0.5, 0.0, 0.5, 1.0];

    for (&ti, &ei) in t.iter().zip(expected.iter()) {
        assert_relative_eq!(ti, ei, epsilon = 1e-6);
    }
}

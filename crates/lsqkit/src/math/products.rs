//! Matrix Products and Reductions
//!
//! ## Purpose
//!
//! This module provides the dense kernels used by the normal-equations and
//! residual operations:
//! - Gram matrix `A^T * A`, exactly symmetric.
//! - Transposed and plain matrix-vector products.
//! - Generic and SIMD-optimized sums of squares for the Euclidean norm.

// External dependencies
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use num_traits::Float;
use wide::{f32x8, f64x4};

// ============================================================================
// Scalar Trait
// ============================================================================

/// Float types supported by the least-squares kernels.
///
/// The default methods are generic; `f64` and `f32` override the reductions
/// with SIMD versions.
pub trait LsqFloat: Float + 'static {
    /// Sum of squared values.
    #[inline]
    fn sum_of_squares(values: &[Self]) -> Self {
        sum_of_squares_scalar(values)
    }
}

impl LsqFloat for f64 {
    #[inline]
    fn sum_of_squares(values: &[f64]) -> f64 {
        sum_of_squares_simd_f64(values)
    }
}

impl LsqFloat for f32 {
    #[inline]
    fn sum_of_squares(values: &[f32]) -> f32 {
        sum_of_squares_simd_f32(values)
    }
}

// ============================================================================
// Products
// ============================================================================

/// Gram matrix `A^T * A` (`n x n`).
///
/// The lower triangle is mirrored from the upper one, so the result is
/// symmetric bit for bit regardless of accumulation order in the product.
pub fn gram<T: LsqFloat>(a: &ArrayView2<'_, T>) -> Array2<T> {
    let mut g = a.t().dot(a);
    let n = g.nrows();
    for i in 1..n {
        for j in 0..i {
            g[[i, j]] = g[[j, i]];
        }
    }
    g
}

/// Transposed product `A^T * b` (length `n`).
pub fn transpose_apply<T: LsqFloat>(a: &ArrayView2<'_, T>, b: &ArrayView1<'_, T>) -> Array1<T> {
    a.t().dot(b)
}

/// Product `A * x` (length `m`).
pub fn apply<T: LsqFloat>(a: &ArrayView2<'_, T>, x: &ArrayView1<'_, T>) -> Array1<T> {
    a.dot(x)
}

/// Euclidean norm `sqrt(sum v_i^2)`.
///
/// Finite vectors whose squares overflow are rescaled by their largest
/// magnitude, so the norm is finite whenever it is representable.
pub fn euclidean_norm<T: LsqFloat>(v: &ArrayView1<'_, T>) -> T {
    let norm = sum_of_squares(v).sqrt();
    if norm.is_finite() {
        return norm;
    }

    let scale = v.iter().fold(T::zero(), |acc, &r| acc.max(r.abs()));
    if scale == T::zero() || !scale.is_finite() {
        return norm;
    }

    let scaled = v.iter().fold(T::zero(), |acc, &r| {
        let q = r / scale;
        acc + q * q
    });
    scale * scaled.sqrt()
}

/// Sum of squares of a possibly strided vector.
pub fn sum_of_squares<T: LsqFloat>(v: &ArrayView1<'_, T>) -> T {
    match v.as_slice() {
        Some(slice) => T::sum_of_squares(slice),
        None => v.iter().fold(T::zero(), |acc, &r| acc + r * r),
    }
}

// ============================================================================
// Generic Accumulation
// ============================================================================

/// Scalar sum of squares (generic Float).
#[inline]
pub fn sum_of_squares_scalar<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &r| acc + r * r)
}

// ============================================================================
// Specialized Accumulation (SIMD)
// ============================================================================

/// SIMD-optimized sum of squares (f64).
#[inline]
pub fn sum_of_squares_simd_f64(values: &[f64]) -> f64 {
    let chunks = values.chunks_exact(4);
    let tail = chunks.remainder();

    let mut acc = f64x4::splat(0.0);
    for c in chunks {
        let v = f64x4::new([c[0], c[1], c[2], c[3]]);
        acc += v * v;
    }

    let mut total = acc.reduce_add();
    for &r in tail {
        total += r * r;
    }
    total
}

/// SIMD-optimized sum of squares (f32).
#[inline]
pub fn sum_of_squares_simd_f32(values: &[f32]) -> f32 {
    let chunks = values.chunks_exact(8);
    let tail = chunks.remainder();

    let mut acc = f32x8::splat(0.0);
    for c in chunks {
        let v = f32x8::new([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]);
        acc += v * v;
    }

    let mut total = acc.reduce_add();
    for &r in tail {
        total += r * r;
    }
    total
}

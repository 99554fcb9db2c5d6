//! Evenly spaced sample points.
//!
//! The sampling parameter of a design system is `m` points spread uniformly
//! over a closed interval, endpoints included. A single point degenerates to
//! the lower endpoint.

// External dependencies
use ndarray::Array1;
use num_traits::Float;

/// Return `m` evenly spaced values over `[lo, hi]`, endpoints included.
///
/// Each value is computed as `lo + i * step` and the last one is pinned to
/// `hi` exactly, so rounding in `step` never moves the upper endpoint.
pub fn linspace<T: Float>(lo: T, hi: T, m: usize) -> Array1<T> {
    match m {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, lo),
        _ => {
            let div = T::from(m - 1).unwrap_or(T::one());
            let step = (hi - lo) / div;
            let mut t = Array1::from_shape_fn(m, |i| {
                lo + T::from(i).unwrap_or(T::zero()) * step
            });
            t[m - 1] = hi;
            t
        }
    }
}

//! Vandermonde matrix construction.
//!
//! ## Purpose
//!
//! Builds the polynomial design matrix of a sample vector: column `j` holds
//! `t^j`, so row `i` is `[1, t_i, t_i^2, ..., t_i^(n-1)]`.
//!
//! ## Design notes
//!
//! * **Ascending order**: Column 0 is all ones (`0^0 = 1` included).
//! * **Cumulative products**: Each column is the previous one times `t`,
//!   avoiding a `powi` call per entry.
//! * **Row-major fill**: Rows are written contiguously into standard layout.

// External dependencies
use ndarray::{Array2, ArrayView1};
use num_traits::Float;

/// Build the `t.len() x n` Vandermonde matrix of `t` with ascending powers.
pub fn vandermonde<T: Float>(t: ArrayView1<'_, T>, n: usize) -> Array2<T> {
    let mut a = Array2::zeros((t.len(), n));

    for (mut row, &ti) in a.rows_mut().into_iter().zip(t.iter()) {
        let mut power = T::one();
        for entry in row.iter_mut() {
            *entry = power;
            power = power * ti;
        }
    }

    a
}

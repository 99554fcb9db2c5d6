//! Input validation for least-squares systems.
//!
//! ## Purpose
//!
//! This module provides the validation functions shared by every operation:
//! size positivity, conformance between `A`, `x` and `b`, finiteness of
//! inputs and finiteness of computed results.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Shape checks run before the O(m·n) finiteness scan.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * A system that passes validation can be multiplied without panicking.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair invalid inputs.
//! * This module does not check conditioning or rank.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use ndarray::{ArrayView1, ArrayView2};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LsqError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for least-squares inputs.
///
/// All methods return `Result<(), LsqError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Size Validation
    // ========================================================================

    /// Validate that a row or column count is strictly positive.
    pub fn validate_size(value: usize, parameter: &'static str) -> Result<(), LsqError> {
        if value == 0 {
            return Err(LsqError::InvalidSize {
                parameter,
                got: value,
            });
        }
        Ok(())
    }

    /// Validate that an `m x n` buffer of `T` and an `m` buffer of `T` fit
    /// within the `isize::MAX` byte limit of a single allocation.
    pub fn validate_allocation<T>(m: usize, n: usize) -> Result<(), LsqError> {
        let elem = core::mem::size_of::<T>();
        let within = |len: Option<usize>| {
            len.and_then(|l| l.checked_mul(elem))
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        };

        if within(Some(m)) && within(m.checked_mul(n)) {
            Ok(())
        } else {
            Err(LsqError::ComputationFailed(format!(
                "{m}x{n} matrix exceeds the addressable size"
            )))
        }
    }

    // ========================================================================
    // Shape Validation
    // ========================================================================

    /// Validate that a vector has as many entries as `A` has rows.
    pub fn validate_rows<T>(
        a: &ArrayView2<'_, T>,
        v: &ArrayView1<'_, T>,
        name: &'static str,
    ) -> Result<(), LsqError> {
        if v.len() != a.nrows() {
            return Err(LsqError::ShapeMismatch {
                name,
                expected: a.nrows(),
                got: v.len(),
            });
        }
        Ok(())
    }

    /// Validate that a vector has as many entries as `A` has columns.
    pub fn validate_columns<T>(
        a: &ArrayView2<'_, T>,
        v: &ArrayView1<'_, T>,
        name: &'static str,
    ) -> Result<(), LsqError> {
        if v.len() != a.ncols() {
            return Err(LsqError::ShapeMismatch {
                name,
                expected: a.ncols(),
                got: v.len(),
            });
        }
        Ok(())
    }

    /// Validate that a vector has the expected length.
    pub fn validate_length<T>(
        v: &ArrayView1<'_, T>,
        expected: usize,
        name: &'static str,
    ) -> Result<(), LsqError> {
        if v.len() != expected {
            return Err(LsqError::ShapeMismatch {
                name,
                expected,
                got: v.len(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Numeric Validation
    // ========================================================================

    /// Validate that every entry of a matrix is finite.
    pub fn validate_finite_matrix<T: Float>(
        a: &ArrayView2<'_, T>,
        name: &'static str,
    ) -> Result<(), LsqError> {
        for ((i, j), &v) in a.indexed_iter() {
            if !v.is_finite() {
                return Err(LsqError::InvalidNumericValue(format!(
                    "{}[{}][{}]={}",
                    name,
                    i,
                    j,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate that every entry of a vector is finite.
    pub fn validate_finite_vector<T: Float>(
        v: &ArrayView1<'_, T>,
        name: &'static str,
    ) -> Result<(), LsqError> {
        for (i, &val) in v.indexed_iter() {
            if !val.is_finite() {
                return Err(LsqError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate that a computed quantity stayed finite.
    pub fn validate_result<'a, T, I>(values: I, what: &'static str) -> Result<(), LsqError>
    where
        T: Float + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        if values.into_iter().any(|v| !v.is_finite()) {
            return Err(LsqError::ComputationFailed(format!(
                "{what} overflowed to a non-finite value"
            )));
        }
        Ok(())
    }

    /// Validate a sampling interval.
    pub fn validate_interval<T: Float>(lo: T, hi: T) -> Result<(), LsqError> {
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(LsqError::InvalidInterval {
                lo: lo.to_f64().unwrap_or(f64::NAN),
                hi: hi.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that a required builder parameter was provided.
    pub fn validate_present<V>(
        value: Option<V>,
        parameter: &'static str,
    ) -> Result<V, LsqError> {
        value.ok_or(LsqError::MissingParameter { parameter })
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), LsqError> {
        if let Some(param) = duplicate_param {
            return Err(LsqError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}

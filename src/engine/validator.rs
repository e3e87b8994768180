//! Input validation for LOESS configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for LOESS configuration
//! parameters and input data. It checks requirements such as input lengths,
//! finite values, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces constraints like smoothing in (0, 1].
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Regression Requirements**: The sample must be large enough for the
//!   selected polynomial degree.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LoessError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for LOESS configuration and input data.
///
/// Provides static methods for validating various LOESS parameters and
/// input data. All methods return `Result<(), LoessError>` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate training arrays for LOESS fitting.
    ///
    /// `min_points` is the smallest sample that supports the selected
    /// polynomial degree (degree + 1, and never fewer than 2).
    pub fn validate_inputs<T: Float>(
        x: &[T],
        y: &[T],
        min_points: usize,
    ) -> Result<(), LoessError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(LoessError::EmptyInput);
        }

        // Check 2: Matching lengths
        if x.len() != y.len() {
            return Err(LoessError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        // Check 3: Sufficient points for regression
        if x.len() < min_points {
            return Err(LoessError::TooFewPoints {
                got: x.len(),
                min: min_points,
            });
        }

        // Check 4: All values finite
        Self::validate_finite(x, "x")?;
        Self::validate_finite(y, "y")?;

        Ok(())
    }

    /// Validate query points for prediction.
    pub fn validate_queries<T: Float>(queries: &[T]) -> Result<(), LoessError> {
        Self::validate_finite(queries, "query")
    }

    /// Validate that every element of a slice is finite.
    fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<(), LoessError> {
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(LoessError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the smoothing fraction (bandwidth) parameter.
    pub fn validate_smoothing<T: Float>(smoothing: T) -> Result<(), LoessError> {
        if !smoothing.is_finite() || smoothing <= T::zero() || smoothing > T::one() {
            return Err(LoessError::InvalidSmoothing(
                smoothing.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), LoessError> {
        if let Some(param) = duplicate_param {
            return Err(LoessError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}

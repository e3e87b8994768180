//! Min-max feature scaling.
//!
//! ## Purpose
//!
//! This module provides min-max normalization of a single axis to the unit
//! interval, together with the inverse mapping. Both the `x` and `y` axes
//! are normalized during fitting, and predictions are denormalized on the
//! way out.
//!
//! ## Design notes
//!
//! * **Stateful**: `ScaleParams` captures the observed minimum and maximum
//!   so queries outside the training range map consistently (values below
//!   the minimum become negative, values above the maximum exceed one).
//! * **Degenerate axes**: A zero span (all values identical) is treated as a
//!   span of one, so constant axes normalize to zero instead of NaN.
//!
//! ## Invariants
//!
//! * `invert(apply(v)) == v` up to floating-point rounding.
//! * Training values always map into [0, 1].
//!
//! ## Non-goals
//!
//! * This module does not validate finiteness (see `engine::validator`).
//! * This module does not perform robust scaling.

// External dependencies
use num_traits::Float;

// ============================================================================
// Scale Parameters
// ============================================================================

/// Min-max normalization parameters for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleParams<T> {
    /// Smallest observed value.
    min: T,

    /// Largest observed value.
    max: T,
}

impl<T: Float> ScaleParams<T> {
    /// Learn the scaling parameters from a non-empty slice.
    pub fn fit(values: &[T]) -> Self {
        debug_assert!(!values.is_empty(), "ScaleParams::fit: empty input");

        let mut min = T::infinity();
        let mut max = T::neg_infinity();
        for &v in values {
            min = min.min(v);
            max = max.max(v);
        }

        Self { min, max }
    }

    /// The observed minimum.
    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    /// The observed maximum.
    #[inline]
    pub fn max(&self) -> T {
        self.max
    }

    /// The normalization span. A zero range is treated as one so constant
    /// axes map to zero instead of NaN.
    #[inline]
    pub fn span(&self) -> T {
        let span = self.max - self.min;
        if span > T::zero() {
            span
        } else {
            T::one()
        }
    }

    /// Map a value into normalized space.
    #[inline]
    pub fn apply(&self, value: T) -> T {
        (value - self.min) / self.span()
    }

    /// Map a normalized value back to the original scale.
    #[inline]
    pub fn invert(&self, value: T) -> T {
        value * self.span() + self.min
    }
}

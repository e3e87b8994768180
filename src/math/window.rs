//! Nearest-neighbor window selection.
//!
//! ## Purpose
//!
//! This module selects the contiguous index window used for each local fit.
//! Starting from the training point closest to the query, the window grows
//! outward one index at a time toward whichever boundary neighbor is closer,
//! until it holds the requested number of points.
//!
//! ## Design notes
//!
//! * **Contiguous**: Windows are index ranges, not arbitrary subsets. For
//!   sorted abscissae this yields the exact k nearest neighbors.
//! * **Boundary behavior**: A minimum at index 0 yields the first k indices;
//!   a minimum at the last index yields the last k.
//! * **Span sizing**: The window size is `round(smoothing * n)` using
//!   round-half-to-even, clamped to a caller-supplied minimum and to n.
//!
//! ## Invariants
//!
//! * `left <= right` and `right < n` for every constructed window.
//! * The window always contains the index of the minimum distance.
//!
//! ## Non-goals
//!
//! * This module does not compute distances or weights.
//! * This module does not handle multivariate neighborhoods.

// External dependencies
use num_traits::Float;

// ============================================================================
// Rounding
// ============================================================================

/// Round to the nearest integer, breaking ties toward the even neighbor.
///
/// This matches the rounding used when the neighborhood size is derived from
/// `smoothing * n` (e.g., 10.5 rounds to 10, 11.5 rounds to 12).
pub fn round_half_to_even<T: Float>(value: T) -> usize {
    let floor = value.floor();
    let frac = value - floor;
    let base = floor.to_usize().unwrap_or(0);
    let half = T::from(0.5).unwrap_or_else(|| T::one() / (T::one() + T::one()));

    if frac > half {
        base + 1
    } else if frac < half {
        base
    } else if base % 2 == 0 {
        base
    } else {
        base + 1
    }
}

// ============================================================================
// Window
// ============================================================================

/// Inclusive window bounds `[left, right]` for a local fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Left boundary index (inclusive).
    pub left: usize,

    /// Right boundary index (inclusive).
    pub right: usize,
}

impl Window {
    /// Calculate the window size from the smoothing fraction and data length.
    ///
    /// The result is clamped to `[min_size, n]`.
    #[inline]
    pub fn span<T: Float>(n: usize, smoothing: T, min_size: usize) -> usize {
        let target = smoothing * T::from(n).unwrap_or_else(T::one);
        round_half_to_even(target).clamp(min_size, n)
    }

    /// Grow a window of `size` indices outward from the minimum of `distances`.
    ///
    /// The starting index is the first occurrence of the minimum distance.
    /// At each step the window extends toward the strictly closer boundary
    /// neighbor, preferring the right neighbor on ties.
    pub fn around_nearest<T: Float>(distances: &[T], size: usize) -> Self {
        let n = distances.len();
        debug_assert!(size >= 1 && size <= n, "around_nearest: invalid size");

        let mut nearest = 0;
        for (i, &d) in distances.iter().enumerate() {
            if d < distances[nearest] {
                nearest = i;
            }
        }

        let mut window = Self {
            left: nearest,
            right: nearest,
        };

        while window.len() < size {
            if window.left == 0 {
                window.right += 1;
            } else if window.right == n - 1 {
                window.left -= 1;
            } else if distances[window.left - 1] < distances[window.right + 1] {
                window.left -= 1;
            } else {
                window.right += 1;
            }
        }

        window
    }

    /// Get the number of points in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }

    /// Check if the window is empty.
    #[allow(dead_code)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

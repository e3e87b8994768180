//! Tricube kernel for LOESS weighting.
//!
//! ## Purpose
//!
//! This module provides the tricube kernel that defines distance-based
//! weights for local regression, and the window-local weighting scheme that
//! scales distances by the farthest window member before applying the kernel.
//!
//! ## Design notes
//!
//! * **Normalization**: Distances are divided by the maximum distance within
//!   the window, so the farthest neighbor always receives weight zero.
//! * **Support**: The kernel is bounded on [-1, 1] and returns exactly zero
//!   outside its support.
//!
//! ## Key concepts
//!
//! * **Tricube**: K(u) = (1 - |u|^3)^3 for |u| < 1, Cleveland's original
//!   choice, smooth and efficient.
//! * **Degenerate windows**: When every window member coincides with the
//!   query, all weights are one and the local fit collapses to a mean.
//!
//! ## Invariants
//!
//! * Weights are non-negative and symmetric (K(u) = K(-u)).
//! * K(0) = 1 and K(u) = 0 for |u| >= 1.
//!
//! ## Non-goals
//!
//! * This module does not select the window (see `math::window`).
//! * This module does not perform weight-sum normalization.

// External dependencies
use num_traits::Float;

// ============================================================================
// Kernel
// ============================================================================

/// Compute the tricube weight K(u) = (1 - |u|^3)^3 for a normalized distance.
///
/// Returns zero for |u| >= 1.
#[inline]
pub fn tricube<T: Float>(u: T) -> T {
    let abs_u = u.abs();
    if abs_u >= T::one() {
        return T::zero();
    }
    let tmp = T::one() - abs_u * abs_u * abs_u;
    tmp * tmp * tmp
}

// ============================================================================
// Window Weighting
// ============================================================================

/// Compute tricube weights for a contiguous window of the distance array.
///
/// Distances within `[left, right]` are scaled by the maximum distance in
/// that range before the kernel is applied. The result is written to
/// `weights`, which must have length `right - left + 1`. Returns the sum of
/// the computed weights.
///
/// If the maximum local distance is zero (every window member coincides with
/// the query), all weights are set to one.
pub fn window_weights<T: Float>(
    distances: &[T],
    left: usize,
    right: usize,
    weights: &mut [T],
) -> T {
    debug_assert!(left <= right && right < distances.len());
    debug_assert_eq!(weights.len(), right - left + 1);

    let local = &distances[left..=right];
    let max_local = local.iter().copied().fold(T::zero(), T::max);

    if max_local <= T::zero() {
        for w in weights.iter_mut() {
            *w = T::one();
        }
        return T::from(local.len()).unwrap_or(T::one());
    }

    let mut sum = T::zero();
    for (w, &d) in weights.iter_mut().zip(local.iter()) {
        let value = tricube(d / max_local);
        *w = value;
        sum = sum + value;
    }
    sum
}

#![cfg(feature = "dev")]
//! Tests for the tricube kernel and window-local weighting.
//!
//! These tests verify the weighting scheme used for every local fit:
//! - Tricube kernel values and support
//! - Scaling of window distances by the farthest member
//! - Degenerate windows where all distances are zero
//!
//! ## Test Organization
//!
//! 1. **Kernel Values** - Known points and symmetry
//! 2. **Window Weighting** - Scaled weights and their sum
//! 3. **Edge Cases** - Zero-distance windows

use approx::assert_relative_eq;

use skloess::internals::math::kernel::{tricube, window_weights};

// ============================================================================
// Kernel Value Tests
// ============================================================================

/// Tricube at zero distance is exactly one.
#[test]
fn test_tricube_at_zero() {
    assert_relative_eq!(tricube(0.0_f64), 1.0);
}

/// Tricube at the support boundary is exactly zero.
#[test]
fn test_tricube_at_one() {
    assert_eq!(tricube(1.0_f64), 0.0);
    assert_eq!(tricube(-1.0_f64), 0.0);
}

/// Tricube outside the support is exactly zero.
#[test]
fn test_tricube_outside_support() {
    assert_eq!(tricube(1.5_f64), 0.0);
    assert_eq!(tricube(-2.0_f64), 0.0);
    assert_eq!(tricube(100.0_f64), 0.0);
}

/// Tricube at 0.5: (1 - 0.125)^3 = 0.669921875.
#[test]
fn test_tricube_known_value() {
    assert_relative_eq!(tricube(0.5_f64), 0.669921875);
}

/// Tricube is symmetric: K(u) = K(-u).
#[test]
fn test_tricube_symmetry() {
    for &u in &[0.1, 0.25, 0.5, 0.75, 0.9] {
        assert_relative_eq!(tricube(u), tricube(-u));
    }
}

/// Tricube decays monotonically on [0, 1].
#[test]
fn test_tricube_monotone_decay() {
    let mut prev = tricube(0.0_f64);
    for i in 1..=10 {
        let u = i as f64 / 10.0;
        let current = tricube(u);
        assert!(current < prev, "tricube must decrease at u={u}");
        prev = current;
    }
}

// ============================================================================
// Window Weighting Tests
// ============================================================================

/// Distances are scaled by the farthest window member before the kernel.
#[test]
fn test_window_weights_scaled_by_max() {
    let distances = vec![0.0, 1.0, 2.0, 3.0];
    let mut weights = vec![0.0; 4];

    let sum = window_weights(&distances, 0, 3, &mut weights);

    assert_relative_eq!(weights[0], 1.0);
    assert_relative_eq!(weights[1], tricube(1.0 / 3.0));
    assert_relative_eq!(weights[2], tricube(2.0 / 3.0));
    assert_eq!(weights[3], 0.0, "farthest member always gets weight zero");
    assert_relative_eq!(sum, weights.iter().sum::<f64>());
}

/// Only the requested sub-window contributes to scaling and output.
#[test]
fn test_window_weights_sub_window() {
    let distances = vec![5.0, 0.5, 0.0, 1.0, 9.0];
    let mut weights = vec![0.0; 3];

    window_weights(&distances, 1, 3, &mut weights);

    // Max local distance is 1.0 (index 3)
    assert_relative_eq!(weights[0], tricube(0.5));
    assert_relative_eq!(weights[1], 1.0);
    assert_eq!(weights[2], 0.0);
}

/// A window with all-zero distances falls back to uniform weights.
#[test]
fn test_window_weights_degenerate() {
    let distances = vec![0.0, 0.0, 0.0];
    let mut weights = vec![0.0; 3];

    let sum = window_weights(&distances, 0, 2, &mut weights);

    assert!(weights.iter().all(|&w| w == 1.0));
    assert_relative_eq!(sum, 3.0);
}

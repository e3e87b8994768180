//! Local weighted regression solvers.
//!
//! ## Purpose
//!
//! This module provides the two local fitting paths used per query point:
//! - `LinearFit`: closed-form weighted simple linear regression.
//! - `fit_polynomial`: weighted polynomial regression of arbitrary degree,
//!   solved through the normal equations X'WX beta = X'Wy.
//!
//! ## Design notes
//!
//! * **Accumulate/solve split**: The linear path accumulates five weighted
//!   sums in a single pass and solves directly from weighted means.
//! * **Degenerate neighborhoods**: Zero weighted variance (all window x
//!   coincide) degrades to the weighted mean rather than failing.
//! * **Normal equations**: The polynomial path builds the Vandermonde
//!   moments directly, avoiding materializing the design matrix.
//!
//! ## Invariants
//!
//! * Both paths operate entirely in normalized coordinate space.
//! * For degree 1 and a well-conditioned window, both paths agree up to
//!   floating-point rounding.
//!
//! ## Non-goals
//!
//! * This module does not compute kernel weights (see `math::kernel`).
//! * This module does not select neighborhoods (see `math::window`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::linalg::FloatLinalg;

// ============================================================================
// Polynomial Degree
// ============================================================================

/// Polynomial degree for local regression fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolynomialDegree {
    /// Degree 0: Local constant (weighted mean)
    Constant,

    /// Degree 1: Local linear regression (default)
    #[default]
    Linear,

    /// Degree 2: Local quadratic regression
    Quadratic,

    /// Degree 3: Local cubic regression
    Cubic,

    /// Degree 4: Local quartic regression
    Quartic,
}

impl PolynomialDegree {
    /// Get the numeric degree value.
    #[inline]
    pub const fn value(&self) -> usize {
        match self {
            PolynomialDegree::Constant => 0,
            PolynomialDegree::Linear => 1,
            PolynomialDegree::Quadratic => 2,
            PolynomialDegree::Cubic => 3,
            PolynomialDegree::Quartic => 4,
        }
    }

    /// Number of coefficients for a polynomial of this degree.
    #[inline]
    pub const fn num_coefficients(&self) -> usize {
        self.value() + 1
    }
}

// ============================================================================
// Solver Selection
// ============================================================================

/// Linear-system path for the local fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Solver {
    /// Direct weighted-least-squares formulas (default).
    ///
    /// Applies only to `PolynomialDegree::Linear`; every other degree routes
    /// to `Matrix`.
    #[default]
    ClosedForm,

    /// Weighted normal equations solved via QR with an SVD fallback.
    Matrix,
}

// ============================================================================
// Weighted Mean
// ============================================================================

/// Weighted mean of `y`, falling back to the plain mean when all weights
/// are zero.
pub fn weighted_mean<T: Float>(y: &[T], weights: &[T]) -> T {
    debug_assert_eq!(y.len(), weights.len());

    let mut sum_w = T::zero();
    let mut sum_wy = T::zero();
    for (&yi, &wi) in y.iter().zip(weights.iter()) {
        sum_w = sum_w + wi;
        sum_wy = sum_wy + wi * yi;
    }

    if sum_w > T::zero() {
        return sum_wy / sum_w;
    }

    let n = T::from(y.len()).unwrap_or(T::one());
    y.iter().copied().fold(T::zero(), |acc, v| acc + v) / n
}

// ============================================================================
// LinearFit
// ============================================================================

/// Linear regression fit result (slope and intercept).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T: Float> {
    /// Slope (beta_1)
    pub slope: T,

    /// Intercept (beta_0)
    pub intercept: T,
}

impl<T: Float> LinearFit<T> {
    /// Predict the y-value for a given x using the model.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }

    /// Fit Weighted Least Squares (WLS) regression.
    ///
    /// Accumulates the weighted sums in a single pass and solves from the
    /// weighted means. Zero weighted variance yields a constant fit at the
    /// weighted mean.
    pub fn fit_wls(x: &[T], y: &[T], weights: &[T]) -> Self {
        let n = x.len();
        debug_assert!(n == y.len() && n == weights.len());

        let mut sum_w = T::zero();
        let mut sum_wx = T::zero();
        let mut sum_wy = T::zero();
        let mut sum_wxx = T::zero();
        let mut sum_wxy = T::zero();

        for i in 0..n {
            let w = weights[i];
            let wx = w * x[i];

            sum_w = sum_w + w;
            sum_wx = sum_wx + wx;
            sum_wy = sum_wy + w * y[i];
            sum_wxx = sum_wxx + wx * x[i];
            sum_wxy = sum_wxy + wx * y[i];
        }

        if sum_w <= T::zero() {
            return Self {
                slope: T::zero(),
                intercept: weighted_mean(y, weights),
            };
        }

        let x_mean = sum_wx / sum_w;
        let y_mean = sum_wy / sum_w;
        let variance = sum_wxx - x_mean * x_mean * sum_w;

        if variance <= T::epsilon() {
            return Self {
                slope: T::zero(),
                intercept: y_mean,
            };
        }

        let covariance = sum_wxy - x_mean * y_mean * sum_w;
        let slope = covariance / variance;
        let intercept = y_mean - slope * x_mean;

        Self { slope, intercept }
    }
}

// ============================================================================
// Polynomial Fit
// ============================================================================

/// Fit a weighted polynomial of the given degree through the normal equations.
///
/// Builds the Vandermonde moment matrix X'WX and moment vector X'Wy, then
/// delegates the solve to the linear algebra backend. Returns the coefficient
/// vector ordered from the constant term upward, or `None` if the system
/// could not be solved.
pub fn fit_polynomial<T: FloatLinalg>(
    x: &[T],
    y: &[T],
    weights: &[T],
    degree: PolynomialDegree,
) -> Option<Vec<T>> {
    let n = x.len();
    debug_assert!(n == y.len() && n == weights.len());

    let n_coeffs = degree.num_coefficients();
    let mut xtw_x = vec![T::zero(); n_coeffs * n_coeffs];
    let mut xtw_y = vec![T::zero(); n_coeffs];
    let mut powers = vec![T::zero(); n_coeffs];

    for i in 0..n {
        let w = weights[i];
        if w <= T::zero() {
            continue;
        }

        // Monomial basis 1, x, x^2, ... for this point
        let mut p = T::one();
        for slot in powers.iter_mut() {
            *slot = p;
            p = p * x[i];
        }

        for j in 0..n_coeffs {
            let wpj = w * powers[j];
            xtw_y[j] = xtw_y[j] + wpj * y[i];
            for k in 0..n_coeffs {
                // Column-major layout; the matrix is symmetric
                xtw_x[k * n_coeffs + j] = xtw_x[k * n_coeffs + j] + wpj * powers[k];
            }
        }
    }

    T::solve_normal(&xtw_x, &xtw_y, n_coeffs)
}

/// Evaluate a polynomial (constant term first) at `x` using Horner's scheme.
#[inline]
pub fn evaluate_polynomial<T: Float>(coefficients: &[T], x: T) -> T {
    coefficients
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc * x + c)
}

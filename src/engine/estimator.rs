//! Fitted-model state and prediction pipeline.
//!
//! ## Purpose
//!
//! This module holds the state captured by `fit` and runs the per-query
//! prediction pipeline: normalize the query, compute distances, select the
//! nearest-neighbor window, weight it with the tricube kernel, fit the local
//! polynomial, and denormalize the result.
//!
//! ## Design notes
//!
//! * **Typestate**: Prediction is only reachable through a `FittedLoess`,
//!   so an unfitted model cannot be asked to predict.
//! * **Scratch reuse**: Distance and weight buffers are allocated once per
//!   `predict` call and reused across query points.
//! * **Normalized space**: All fitting happens on min-max normalized copies
//!   of the training data; only the final value is mapped back.
//!
//! ## Key concepts
//!
//! * **Solver dispatch**: Degree 1 uses the closed-form path unless the
//!   matrix solver was requested; every other degree uses the matrix path.
//! * **Fallbacks**: An unsolvable local system degrades to the local
//!   weighted mean.
//!
//! ## Invariants
//!
//! * `x_norm` and `y_norm` have the same length `n >= neighbors >= 2`.
//! * Training values are finite and normalized into [0, 1].
//!
//! ## Non-goals
//!
//! * This module does not validate builder parameters (see `api`).
//! * This module does not smooth the training set eagerly; evaluation is
//!   always on demand.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::algorithms::regression::{
    evaluate_polynomial, fit_polynomial, weighted_mean, LinearFit, PolynomialDegree, Solver,
};
use crate::engine::validator::Validator;
use crate::math::kernel::window_weights;
use crate::math::linalg::FloatLinalg;
use crate::math::scaling::ScaleParams;
use crate::math::window::Window;
use crate::primitives::errors::LoessError;

// ============================================================================
// Fitted Model
// ============================================================================

/// A LOESS model fitted to a training sample.
///
/// Produced by `LoessModel::fit`. Holds the normalization parameters of both
/// axes, normalized copies of the training data, and the neighborhood size
/// derived from the smoothing fraction.
#[derive(Debug, Clone)]
pub struct FittedLoess<T: FloatLinalg> {
    /// Normalization parameters of the x axis.
    x_scale: ScaleParams<T>,

    /// Normalization parameters of the y axis.
    y_scale: ScaleParams<T>,

    /// Normalized training abscissae.
    x_norm: Vec<T>,

    /// Normalized training ordinates.
    y_norm: Vec<T>,

    /// Number of neighbors per local fit.
    neighbors: usize,

    /// Smoothing fraction the model was configured with.
    smoothing: T,

    /// Polynomial degree for the local fits.
    degree: PolynomialDegree,

    /// Linear-system path for degree-1 fits.
    solver: Solver,
}

impl<T: FloatLinalg> FittedLoess<T> {
    // ========================================================================
    // Fitting
    // ========================================================================

    /// Fit the model state from a training sample.
    ///
    /// Called by `LoessModel::fit` after parameter validation.
    pub(crate) fn fit(
        x: &[T],
        y: &[T],
        smoothing: T,
        degree: PolynomialDegree,
        solver: Solver,
    ) -> Result<Self, LoessError> {
        let min_points = usize::max(2, degree.num_coefficients());
        Validator::validate_inputs(x, y, min_points)?;

        let x_scale = ScaleParams::fit(x);
        let y_scale = ScaleParams::fit(y);

        let x_norm: Vec<T> = x.iter().map(|&v| x_scale.apply(v)).collect();
        let y_norm: Vec<T> = y.iter().map(|&v| y_scale.apply(v)).collect();

        let neighbors = Window::span(x.len(), smoothing, min_points);

        Ok(Self {
            x_scale,
            y_scale,
            x_norm,
            y_norm,
            neighbors,
            smoothing,
            degree,
            solver,
        })
    }

    // ========================================================================
    // Prediction
    // ========================================================================

    /// Evaluate the smoothed curve at each query point.
    pub fn predict(&self, queries: &[T]) -> Result<Vec<T>, LoessError> {
        Validator::validate_queries(queries)?;

        let mut distances = vec![T::zero(); self.x_norm.len()];
        let mut weights = vec![T::zero(); self.neighbors];

        Ok(queries
            .iter()
            .map(|&q| self.predict_point(q, &mut distances, &mut weights))
            .collect())
    }

    /// Evaluate the smoothed curve at a single query point.
    pub fn predict_one(&self, query: T) -> Result<T, LoessError> {
        Validator::validate_queries(core::slice::from_ref(&query))?;

        let mut distances = vec![T::zero(); self.x_norm.len()];
        let mut weights = vec![T::zero(); self.neighbors];

        Ok(self.predict_point(query, &mut distances, &mut weights))
    }

    /// Run the local fit for one query point.
    ///
    /// `distances` and `weights` are scratch buffers of length `n` and
    /// `neighbors` respectively.
    fn predict_point(&self, query: T, distances: &mut [T], weights: &mut [T]) -> T {
        let q = self.x_scale.apply(query);

        for (d, &xi) in distances.iter_mut().zip(self.x_norm.iter()) {
            *d = (xi - q).abs();
        }

        let window = Window::around_nearest(distances, self.neighbors);
        window_weights(distances, window.left, window.right, weights);

        let xs = &self.x_norm[window.left..=window.right];
        let ys = &self.y_norm[window.left..=window.right];

        let use_closed_form =
            self.degree == PolynomialDegree::Linear && self.solver == Solver::ClosedForm;

        let fitted = if use_closed_form {
            LinearFit::fit_wls(xs, ys, weights).predict(q)
        } else {
            match fit_polynomial(xs, ys, weights, self.degree) {
                Some(beta) => evaluate_polynomial(&beta, q),
                None => weighted_mean(ys, weights),
            }
        };

        self.y_scale.invert(fitted)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of training points.
    #[inline]
    pub fn len(&self) -> usize {
        self.x_norm.len()
    }

    /// Whether the training sample is empty (never true for a fitted model).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x_norm.is_empty()
    }

    /// Number of neighbors used per local fit.
    #[inline]
    pub fn neighbors(&self) -> usize {
        self.neighbors
    }

    /// Smoothing fraction the model was configured with.
    #[inline]
    pub fn smoothing(&self) -> T {
        self.smoothing
    }

    /// Polynomial degree of the local fits.
    #[inline]
    pub fn degree(&self) -> PolynomialDegree {
        self.degree
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: FloatLinalg + Display> Display for FittedLoess<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.len())?;
        writeln!(f, "  Smoothing: {}", self.smoothing)?;
        writeln!(f, "  Neighbors per fit: {}", self.neighbors)?;
        write!(f, "  Degree: {:?}", self.degree)
    }
}

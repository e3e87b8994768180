//! High-level API for LOESS fitting and prediction.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder pattern for configuring the estimator, a validated model
//! type, and the transition into the fitted state.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called; data
//!   is validated when `.fit()` is called.
//! * **Type-Safe**: Generic over `f32`/`f64`; prediction is only reachable
//!   through the fitted state.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `Loess::new()` → setters → `.build()` →
//!   `.fit(&x, &y)` → `.predict(&queries)`.
//! * **Duplicate tracking**: Setting the same parameter twice is recorded
//!   and rejected at `build()`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::algorithms::regression::{PolynomialDegree, Solver};
pub use crate::engine::estimator::FittedLoess;
pub use crate::primitives::errors::LoessError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring LOESS parameters.
#[derive(Debug, Clone)]
pub struct LoessBuilder<T: FloatLinalg> {
    /// Smoothing fraction (0..1].
    pub smoothing: Option<T>,

    /// Polynomial degree for local regression.
    pub degree: Option<PolynomialDegree>,

    /// Linear-system path for degree-1 fits.
    pub solver: Option<Solver>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for LoessBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> LoessBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            smoothing: None,
            degree: None,
            solver: None,
            duplicate_param: None,
        }
    }

    /// Set the smoothing fraction (span of each local fit).
    pub fn smoothing(mut self, smoothing: T) -> Self {
        if self.smoothing.is_some() {
            self.duplicate_param = Some("smoothing");
        }
        self.smoothing = Some(smoothing);
        self
    }

    /// Set the polynomial degree for local regression.
    ///
    /// - `Constant` (degree 0): Weighted mean - fastest, least flexible
    /// - `Linear` (degree 1, default): Standard LOESS - good balance
    /// - `Quadratic` (degree 2) and above: Better for curved regions
    pub fn degree(mut self, degree: PolynomialDegree) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(degree);
        self
    }

    /// Set the linear-system path for degree-1 fits.
    ///
    /// `Matrix` forces the normal-equation solver even for `Linear`; other
    /// degrees always use it.
    pub fn solver(mut self, solver: Solver) -> Self {
        if self.solver.is_some() {
            self.duplicate_param = Some("solver");
        }
        self.solver = Some(solver);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<LoessModel<T>, LoessError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let smoothing = self
            .smoothing
            .unwrap_or_else(|| T::from(0.33).unwrap_or_else(T::one));

        // Validate smoothing
        Validator::validate_smoothing(smoothing)?;

        Ok(LoessModel {
            smoothing,
            degree: self.degree.unwrap_or_default(),
            solver: self.solver.unwrap_or_default(),
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated LOESS configuration, ready to fit training data.
#[derive(Debug, Clone, Copy)]
pub struct LoessModel<T: FloatLinalg> {
    /// Smoothing fraction (0..1].
    smoothing: T,

    /// Polynomial degree for local regression.
    degree: PolynomialDegree,

    /// Linear-system path for degree-1 fits.
    solver: Solver,
}

impl<T: FloatLinalg> LoessModel<T> {
    /// Fit the model to a training sample.
    ///
    /// The model itself is not consumed; it can be refitted to other data.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<FittedLoess<T>, LoessError> {
        FittedLoess::fit(x, y, self.smoothing, self.degree, self.solver)
    }

    /// Fit the model and evaluate the smoothed curve at the training
    /// abscissae in one step.
    pub fn fit_predict(&self, x: &[T], y: &[T]) -> Result<Vec<T>, LoessError> {
        self.fit(x, y)?.predict(x)
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

    /// Linear-system path for degree-1 fits.
    #[inline]
    pub fn solver(&self) -> Solver {
        self.solver
    }
}

//! # skloess — LOESS regression with a fit/predict interface
//!
//! LOESS (Locally Estimated Scatterplot Smoothing) is a nonparametric
//! regression method that fits smooth curves through scatter plots. At each
//! evaluation point it fits a weighted polynomial using nearby data points,
//! with weights decreasing smoothly with distance. This crate exposes LOESS
//! as an estimator: fit once on a training sample, then predict at arbitrary
//! query points.
//!
//! **Key characteristics:**
//! - No parametric assumptions about the underlying relationship
//! - Separate fit and predict phases, so one fit serves many queries
//! - Internal min-max normalization of both axes for numerical stability
//! - Generic over `f32` and `f64`
//!
//! ## How it works
//!
//! 1. `fit` normalizes `x` and `y` to `[0, 1]` and records the neighborhood
//!    size `k = round(smoothing * n)`.
//! 2. For each query, the `k` nearest training points (a contiguous window
//!    grown outward from the closest point) are selected.
//! 3. Window members are weighted by the tricube kernel applied to their
//!    distance relative to the farthest window member.
//! 4. A local weighted polynomial is fitted and evaluated at the query, and
//!    the result is mapped back to the original y scale.
//!
//! ## Quick Start
//!
//! ```rust
//! use skloess::prelude::*;
//!
//! let x: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let y = vec![2.1, 3.8, 6.2, 7.9, 10.3, 11.8, 14.1, 15.7];
//!
//! // Build the model
//! let model = Loess::new()
//!     .smoothing(0.5)     // Use 50% of data for each local fit
//!     .degree(Linear)     // Local polynomial degree
//!     .build()?;
//!
//! // Fit the model, then evaluate anywhere
//! let fitted = model.fit(&x, &y)?;
//! let at_training = fitted.predict(&x)?;
//! let between = fitted.predict_one(2.5)?;
//!
//! assert_eq!(at_training.len(), x.len());
//! assert!(between.is_finite());
//! # Result::<(), LoessError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `build`, `fit`, and `predict` return `Result<_, LoessError>`. The `?`
//! operator is idiomatic:
//!
//! ```rust
//! use skloess::prelude::*;
//! # let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! # let y = vec![2.0, 4.1, 5.9, 8.2, 9.8];
//!
//! let fitted = Loess::new().build()?.fit(&x, &y)?;
//!
//! match fitted.predict(&[2.5]) {
//!     Ok(values) => println!("Smoothed: {:?}", values),
//!     Err(e) => eprintln!("Prediction failed: {}", e),
//! }
//! # Result::<(), LoessError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter   | Default      | Range                   | Description                                  |
//! |-------------|--------------|-------------------------|----------------------------------------------|
//! | `smoothing` | 0.33         | (0, 1]                  | Fraction of the data used per local fit      |
//! | `degree`    | `Linear`     | `Constant` .. `Quartic` | Degree of the local polynomial               |
//! | `solver`    | `ClosedForm` | 2 options               | Linear-system path for the local fit         |
//!
//! **Choosing smoothing:**
//! - **0.1-0.3**: Fine detail, may be noisy
//! - **0.3-0.5**: Moderate smoothing (good for most cases)
//! - **0.5-1.0**: Heavy smoothing, emphasizes trends
//!
//! **Choosing degree:**
//! - `Constant` (0): Local weighted mean. Fastest, stable, but high bias.
//! - `Linear` (1): Standard choice, good bias-variance balance.
//! - `Quadratic` (2) and above: Better for peaks/valleys, higher variance.
//!
//! **Choosing solver:**
//! - `ClosedForm` (default): Direct weighted-least-squares formulas.
//!   Only applies to `Linear`; other degrees always use `Matrix`.
//! - `Matrix`: Weighted normal equations solved via QR (SVD fallback).
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! skloess = { version = "0.1", default-features = false }
//! ```
//!
//! Use `f32` and small datasets to reduce the memory footprint.
//!
//! ## References
//!
//! - Cleveland, W. S. (1979). "Robust Locally Weighted Regression and Smoothing Scatterplots"
//! - Cleveland, W. S. & Devlin, S. J. (1988). "Locally Weighted Regression: An Approach to Regression Analysis by Local Fitting"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error types.
//
// Contains the `LoessError` enum covering input validation, parameter
// constraints, and builder misuse.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the tricube kernel, min-max feature scaling, nearest-neighbor
// window selection, and the linear algebra bridge for normal equations.
mod math;

// Layer 3: Algorithms - local regression.
//
// Contains the closed-form weighted linear fit and the polynomial fit via
// weighted normal equations.
mod algorithms;

// Layer 4: Engine - validation and estimation.
//
// Contains fail-fast input/parameter validation and the fitted-model state
// with the per-query prediction pipeline.
mod engine;

// High-level fluent API.
//
// Provides the `Loess` builder for configuring and fitting LOESS models.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard skloess prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use skloess::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        FittedLoess, LoessBuilder as Loess, LoessError, LoessModel,
        PolynomialDegree::{Constant, Cubic, Linear, Quadratic, Quartic},
        Solver::{ClosedForm, Matrix},
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal validation and estimation engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}

//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the crate:
//! - Tricube kernel for distance-based weighting
//! - Min-max feature scaling
//! - Nearest-neighbor window selection
//! - Linear algebra bridge for weighted normal equations
//!
//! These are reusable mathematical building blocks with no estimator-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Tricube kernel for distance-based weighting.
pub mod kernel;

/// Linear algebra backend for normal-equation solves.
pub mod linalg;

/// Min-max feature scaling.
pub mod scaling;

/// Nearest-neighbor window selection.
pub mod window;

//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates fitting and prediction:
//! - Fail-fast validation of parameters and input data
//! - The fitted-model state and the per-query prediction pipeline
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fitted-model state and prediction pipeline.
pub mod estimator;

/// Input and parameter validation.
pub mod validator;

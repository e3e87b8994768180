//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the local regression solvers:
//! - Closed-form weighted linear fit
//! - Polynomial fit via weighted normal equations
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Local weighted regression solvers.
pub mod regression;

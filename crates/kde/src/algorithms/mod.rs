//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the two steps of kernel density estimation: turning
//! each sample into a kernel curve, and reducing the curves into a density
//! estimate.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Per-sample kernel evaluation.
pub mod evaluator;

/// Pointwise summation and normalization.
pub mod aggregation;

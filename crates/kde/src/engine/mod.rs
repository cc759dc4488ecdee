//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates an estimation: it validates the configuration,
//! runs the curve and density passes, and packages the output.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for the curve and density passes.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for KDE runs.
pub mod output;

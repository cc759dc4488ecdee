//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer derives summary metrics from a finished density estimate.
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Mass, peak, modes and tails of an estimate.
pub mod diagnostics;

//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical building blocks: the Gaussian
//! kernel and its constants. It holds no estimation logic.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Gaussian kernel function.
pub mod kernel;

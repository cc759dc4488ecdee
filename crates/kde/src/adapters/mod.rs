//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer turns a validated builder into an executable processor and maps
//! engine output to the public result type.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batch adapter for in-memory sample sets.
pub mod batch;

//! Layer 6: Adapters
//!
//! This layer wraps the `kde` adapters with parallel execution.

// Parallel batch adapter
pub mod batch;

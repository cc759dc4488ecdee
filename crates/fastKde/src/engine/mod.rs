//! Layer 5: Engine
//!
//! This layer provides the parallel passes for kernel density estimation.
//! It distributes per-sample evaluation and per-index reduction across CPU
//! cores.

// Parallel execution engine using CPU threads
pub mod executor;

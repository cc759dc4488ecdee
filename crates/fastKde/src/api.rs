//! High-level API for parallel kernel density estimation.
//!
//! ## Purpose
//!
//! This module reuses the `kde` builder and swaps in a `Batch` marker that
//! produces the parallel batch builder.
//!
//! ## Design notes
//!
//! * **Compatible**: `Kde::new()` is the same builder as in `kde`; only the
//!   adapter marker differs.
//! * **Parallel by default**: `.parallel(false)` opts out.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`KdeBuilder`] via `Kde::new()`.
//! 2. Chain configuration methods (`.spread()`, `.bandwidth()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` to get a parallel execution builder.

// Feature-gated imports
use crate::adapters::batch::ParallelBatchKdeBuilder;

// External dependencies
use num_traits::Float;

// Import base marker types for delegation
use kde::internals::api::Batch as BaseBatch;

// Publicly re-exported types
pub use kde::internals::api::{KdeAdapter, KdeBuilder};
pub use kde::internals::engine::output::KdeResult;
pub use kde::internals::evaluation::diagnostics::Diagnostics;
pub use kde::internals::primitives::errors::KdeError;
pub use kde::internals::primitives::grid::GridSpacing;

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Batch;
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for parallel in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> KdeAdapter<T> for Batch {
    type Output = ParallelBatchKdeBuilder<T>;

    fn convert(builder: KdeBuilder<T>) -> Self::Output {
        // Determine parallel mode: user choice OR default to true for fastKde Batch
        let parallel = builder.parallel.unwrap_or(true);

        // Delegate to base implementation to create base builder
        let mut base = <BaseBatch as KdeAdapter<T>>::convert(builder);
        base = base.parallel(parallel);

        // Wrap with extension fields
        ParallelBatchKdeBuilder { base }
    }
}

//! Batch adapter for parallel kernel density estimation.
//!
//! ## Purpose
//!
//! This module wraps the `kde` batch adapter and installs the parallel passes
//! when parallel execution is enabled (the default).
//!
//! ## Design notes
//!
//! * **Delegation**: Validation and execution stay in the `kde` crate.
//! * **Parallelism**: Adds parallel execution via `rayon` (fastKde extension).
//! * **Inputs**: `fit` accepts anything implementing [`KdeInput`].
//!
//! ## Invariants
//!
//! * Parallel and sequential runs return identical results.
//! * Output order matches input order.
//!
//! ## Non-goals
//!
//! * This adapter does not handle streaming data.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::{curve_pass_parallel, density_pass_parallel};

// External dependencies
use num_traits::Float;
use std::result::Result;

// Export dependencies from kde crate
use kde::internals::adapters::batch::{BatchKde, BatchKdeBuilder};
use kde::internals::engine::output::KdeResult;
use kde::internals::primitives::errors::KdeError;
use kde::internals::primitives::grid::Grid;

// Internal dependencies
use crate::input::KdeInput;

// ============================================================================
// Extended Batch KDE Builder
// ============================================================================

/// Builder for the parallel batch KDE processor.
#[derive(Debug, Clone)]
pub struct ParallelBatchKdeBuilder<T: Float> {
    /// Underlying sequential builder.
    pub base: BatchKdeBuilder<T>,
}

impl<T: Float> Default for ParallelBatchKdeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelBatchKdeBuilder<T> {
    fn new() -> Self {
        let base = BatchKdeBuilder::default().parallel(true); // Default to parallel in fastKde
        Self { base }
    }

    /// Enable or disable parallel execution.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the kernel standard deviation.
    pub fn spread(mut self, spread: T) -> Self {
        self.base = self.base.spread(spread);
        self
    }

    /// Set the bandwidth divisor.
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        self.base = self.base.bandwidth(bandwidth);
        self
    }

    /// Set the grid bounds `[min, max)`.
    pub fn grid_range(mut self, min: T, max: T) -> Self {
        self.base = self.base.grid_range(min, max);
        self
    }

    /// Use `resolution` grid points.
    pub fn grid_resolution(mut self, resolution: usize) -> Self {
        self.base = self.base.grid_resolution(resolution);
        self
    }

    /// Use an explicit distance between grid points.
    pub fn grid_step(mut self, step: T) -> Self {
        self.base = self.base.grid_step(step);
        self
    }

    /// Enable diagnostics of the estimate.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.base = self.base.return_diagnostics(enabled);
        self
    }
}

impl<T: Float + Send + Sync> ParallelBatchKdeBuilder<T> {
    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the processor.
    pub fn build(self) -> Result<ParallelBatchKde<T>, KdeError> {
        let mut builder = self.base;

        #[cfg(feature = "cpu")]
        {
            if builder.parallel.unwrap_or(true) {
                builder = builder
                    .custom_curve_pass(curve_pass_parallel)
                    .custom_density_pass(density_pass_parallel);
            } else {
                builder.custom_curve_pass = None;
                builder.custom_density_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            builder.custom_curve_pass = None;
            builder.custom_density_pass = None;
        }

        Ok(ParallelBatchKde {
            processor: builder.build()?,
        })
    }
}

// ============================================================================
// Extended Batch KDE Processor
// ============================================================================

/// Validated parallel batch KDE processor.
#[derive(Debug, Clone, Copy)]
pub struct ParallelBatchKde<T> {
    processor: BatchKde<T>,
}

impl<T: Float> ParallelBatchKde<T> {
    /// Grid every curve is evaluated on.
    pub fn grid(&self) -> &Grid<T> {
        self.processor.grid()
    }

    /// Whether the parallel passes are installed.
    pub fn is_parallel(&self) -> bool {
        let config = self.processor.config();
        config.parallel && config.custom_curve_pass.is_some()
    }

    /// Estimate the density of `samples`.
    pub fn fit<I>(&self, samples: &I) -> Result<KdeResult<T>, KdeError>
    where
        I: KdeInput<T> + ?Sized,
    {
        self.processor.fit(samples.as_kde_slice()?)
    }
}

//! Batch adapter for kernel density estimation.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: a complete sample set in
//! memory goes in, a [`KdeResult`] with per-sample curves and the density
//! estimate comes out.
//!
//! ## Design notes
//!
//! * **Processing**: Evaluates every sample on one grid in a single pass.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Fail-fast**: All parameters are validated in `build()`; `fit()` only
//!   checks the samples.
//! * **Reusable**: A built model can be fitted to any number of sample sets.
//!
//! ## Invariants
//!
//! * Output order matches input order.
//! * All values must be finite.
//!
//! ## Non-goals
//!
//! * This adapter does not handle streaming data.
//! * This adapter does not choose the bandwidth or grid from the data.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{CurvePassFn, DensityPassFn, KdeConfig, KdeExecutor};
use crate::engine::output::KdeResult;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::primitives::errors::KdeError;
use crate::primitives::grid::{Grid, GridSpacing};

// ============================================================================
// Defaults
// ============================================================================

const DEFAULT_SPREAD: f64 = 2.25;
const DEFAULT_BANDWIDTH: f64 = 0.7;
const DEFAULT_GRID_MIN: f64 = -10.0;
const DEFAULT_GRID_MAX: f64 = 25.1;

#[inline]
fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

// ============================================================================
// Batch KDE Builder
// ============================================================================

/// Builder for the batch KDE processor.
#[derive(Debug, Clone)]
pub struct BatchKdeBuilder<T> {
    /// Kernel standard deviation.
    pub spread: T,

    /// Bandwidth divisor.
    pub bandwidth: T,

    /// Inclusive lower grid bound.
    pub grid_min: T,

    /// Exclusive upper grid bound.
    pub grid_max: T,

    /// Point count or explicit step of the grid.
    pub grid_spacing: GridSpacing<T>,

    /// Whether to compute diagnostics of the estimate.
    pub return_diagnostics: bool,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom curve pass function.
    #[doc(hidden)]
    pub custom_curve_pass: Option<CurvePassFn<T>>,

    /// Custom density pass function.
    #[doc(hidden)]
    pub custom_density_pass: Option<DensityPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchKdeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchKdeBuilder<T> {
    fn new() -> Self {
        Self {
            spread: constant(DEFAULT_SPREAD),
            bandwidth: constant(DEFAULT_BANDWIDTH),
            grid_min: constant(DEFAULT_GRID_MIN),
            grid_max: constant(DEFAULT_GRID_MAX),
            grid_spacing: GridSpacing::default(),
            return_diagnostics: false,
            custom_curve_pass: None,
            custom_density_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the kernel standard deviation.
    pub fn spread(mut self, spread: T) -> Self {
        self.spread = spread;
        self
    }

    /// Set the bandwidth divisor.
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    /// Set the grid bounds `[min, max)`.
    pub fn grid_range(mut self, min: T, max: T) -> Self {
        self.grid_min = min;
        self.grid_max = max;
        self
    }

    /// Use `resolution` grid points.
    pub fn grid_resolution(mut self, resolution: usize) -> Self {
        self.grid_spacing = GridSpacing::Resolution(resolution);
        self
    }

    /// Use an explicit distance between grid points.
    pub fn grid_step(mut self, step: T) -> Self {
        self.grid_spacing = GridSpacing::Step(step);
        self
    }

    /// Enable diagnostics of the estimate.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.return_diagnostics = enabled;
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Set a custom curve pass function.
    #[doc(hidden)]
    pub fn custom_curve_pass(mut self, pass: CurvePassFn<T>) -> Self {
        self.custom_curve_pass = Some(pass);
        self
    }

    /// Set a custom density pass function.
    #[doc(hidden)]
    pub fn custom_density_pass(mut self, pass: DensityPassFn<T>) -> Self {
        self.custom_density_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the processor.
    pub fn build(self) -> Result<BatchKde<T>, KdeError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Validator::validate_spread(self.spread)?;
        Validator::validate_bandwidth(self.bandwidth)?;
        let grid = Validator::validate_grid(self.grid_min, self.grid_max, self.grid_spacing)?;

        let config = KdeConfig {
            spread: self.spread,
            bandwidth: self.bandwidth,
            grid,
            custom_curve_pass: self.custom_curve_pass,
            custom_density_pass: self.custom_density_pass,
            parallel: self.parallel.unwrap_or(false),
        };

        Ok(BatchKde {
            executor: KdeExecutor::from_config(&config)?,
            config,
            return_diagnostics: self.return_diagnostics,
        })
    }
}

// ============================================================================
// Batch KDE Processor
// ============================================================================

/// Validated batch KDE processor.
#[derive(Debug, Clone, Copy)]
pub struct BatchKde<T> {
    config: KdeConfig<T>,
    executor: KdeExecutor<T>,
    return_diagnostics: bool,
}

impl<T: Float> BatchKde<T> {
    /// Grid every curve is evaluated on.
    pub fn grid(&self) -> &Grid<T> {
        &self.config.grid
    }

    /// Execution configuration in effect.
    pub fn config(&self) -> &KdeConfig<T> {
        &self.config
    }

    /// Estimate the density of `samples`.
    pub fn fit(&self, samples: &[T]) -> Result<KdeResult<T>, KdeError> {
        let output = self.executor.run(samples)?;

        let diagnostics = self
            .return_diagnostics
            .then(|| Diagnostics::compute(&output.density));

        trace_info!(
            samples = samples.len(),
            grid_points = self.config.grid.len(),
            "batch fit finished"
        );

        Ok(KdeResult {
            samples: samples.to_vec(),
            grid: self.config.grid,
            spread: self.config.spread,
            bandwidth: self.config.bandwidth,
            curves: output.curves,
            density: output.density,
            diagnostics,
        })
    }
}

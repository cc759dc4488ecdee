//! Execution engine for kernel density estimation.
//!
//! ## Purpose
//!
//! This module runs the two passes of an estimation: the curve pass (one
//! kernel curve per sample) and the density pass (pointwise reduction). It
//! owns no data of its own; every run receives its configuration explicitly.
//!
//! ## Design notes
//!
//! * Provides both configuration-based and parameter-based entry points.
//! * Either pass can be replaced through a hidden function-pointer hook, which
//!   is how extension crates plug in parallel versions.
//! * A replacement pass must keep sample order in the curve pass and curve
//!   order in the density pass.
//!
//! ## Invariants
//!
//! * Every curve of a run is evaluated on the run's grid.
//! * `curves.len() == samples.len()`.
//!
//! ## Non-goals
//!
//! * This module does not validate builder options (handled by `validator`).
//! * This module does not format results (handled by `output`).
//! * This module does not handle parallel execution directly (handled by
//!   extension crates through the hooks).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::aggregation::aggregate;
use crate::algorithms::evaluator::KernelEvaluator;
use crate::engine::validator::Validator;
use crate::primitives::curve::{DensityEstimate, KernelCurve};
use crate::primitives::errors::KdeError;
use crate::primitives::grid::Grid;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for custom curve pass function
#[doc(hidden)]
pub type CurvePassFn<T> = fn(
    &[T],                 // samples
    &KernelEvaluator<T>,  // evaluator
) -> Result<Vec<KernelCurve<T>>, KdeError>;

/// Signature for custom density pass function
#[doc(hidden)]
pub type DensityPassFn<T> = fn(
    &[KernelCurve<T>], // curves
    usize,             // sample_count
    T,                 // bandwidth
) -> Result<DensityEstimate<T>, KdeError>;

/// Output from KDE execution.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// One kernel curve per sample, in sample order.
    pub curves: Vec<KernelCurve<T>>,

    /// Normalized pointwise sum of the curves.
    pub density: DensityEstimate<T>,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for KDE execution.
#[derive(Debug, Clone, Copy)]
pub struct KdeConfig<T> {
    /// Kernel standard deviation.
    pub spread: T,

    /// Bandwidth divisor.
    pub bandwidth: T,

    /// Evaluation grid.
    pub grid: Grid<T>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom curve pass function (enables parallel execution).
    #[doc(hidden)]
    pub custom_curve_pass: Option<CurvePassFn<T>>,

    /// Custom density pass function (enables parallel execution).
    #[doc(hidden)]
    pub custom_density_pass: Option<DensityPassFn<T>>,

    /// Whether to use parallel execution
    #[doc(hidden)]
    pub parallel: bool,
}

impl<T: Float> KdeConfig<T> {
    /// Sequential configuration with the given kernel parameters and grid.
    pub fn new(spread: T, bandwidth: T, grid: Grid<T>) -> Self {
        Self {
            spread,
            bandwidth,
            grid,
            custom_curve_pass: None,
            custom_density_pass: None,
            parallel: false,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the curve and density passes for one configuration.
#[derive(Debug, Clone, Copy)]
pub struct KdeExecutor<T> {
    evaluator: KernelEvaluator<T>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    #[doc(hidden)]
    pub custom_curve_pass: Option<CurvePassFn<T>>,

    #[doc(hidden)]
    pub custom_density_pass: Option<DensityPassFn<T>>,

    #[doc(hidden)]
    pub parallel: bool,
}

impl<T: Float> KdeExecutor<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an executor from a `KdeConfig`.
    pub fn from_config(config: &KdeConfig<T>) -> Result<Self, KdeError> {
        Ok(Self {
            evaluator: KernelEvaluator::new(config.spread, config.bandwidth, config.grid)?,
            custom_curve_pass: config.custom_curve_pass,
            custom_density_pass: config.custom_density_pass,
            parallel: config.parallel,
        })
    }

    /// The evaluator shared by every sample of the run.
    #[inline]
    pub fn evaluator(&self) -> &KernelEvaluator<T> {
        &self.evaluator
    }

    // ========================================================================
    // Passes
    // ========================================================================

    /// Evaluate one curve per sample.
    pub fn curve_pass(&self, samples: &[T]) -> Result<Vec<KernelCurve<T>>, KdeError> {
        trace_debug!(
            samples = samples.len(),
            grid_points = self.evaluator.grid().len(),
            parallel = self.parallel,
            "starting curve pass"
        );

        match self.custom_curve_pass {
            Some(pass) if self.parallel => pass(samples, &self.evaluator),
            _ => self.evaluator.evaluate_all(samples),
        }
    }

    /// Reduce curves into the density estimate.
    pub fn density_pass(
        &self,
        curves: &[KernelCurve<T>],
        sample_count: usize,
    ) -> Result<DensityEstimate<T>, KdeError> {
        let bandwidth = self.evaluator.bandwidth();
        let density = match self.custom_density_pass {
            Some(pass) if self.parallel => pass(curves, sample_count, bandwidth),
            _ => aggregate(curves, sample_count, bandwidth),
        }?;

        trace_debug!(curves = curves.len(), "density pass finished");
        Ok(density)
    }

    // ========================================================================
    // Main Entry Points
    // ========================================================================

    /// Run both passes on `samples`.
    pub fn run(&self, samples: &[T]) -> Result<ExecutorOutput<T>, KdeError> {
        Validator::validate_samples(samples)?;

        let curves = self.curve_pass(samples)?;
        let density = self.density_pass(&curves, samples.len())?;

        Ok(ExecutorOutput { curves, density })
    }

    /// Build an executor from `config` and run it on `samples`.
    pub fn run_with_config(
        samples: &[T],
        config: &KdeConfig<T>,
    ) -> Result<ExecutorOutput<T>, KdeError> {
        Self::from_config(config)?.run(samples)
    }
}

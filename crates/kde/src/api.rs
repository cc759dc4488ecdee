//! High-level API for kernel density estimation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the kernel and grid parameters and hands the result to
//! an execution adapter.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; every option has a default.
//! * **Polymorphic**: Marker types select the adapter builder.
//! * **Validated**: Parameters are validated when `.build()` is called on the
//!   adapter builder.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`KdeBuilder`] via `Kde::new()`.
//! 2. Chain configuration methods (`.spread()`, `.bandwidth()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` and call `.build()`.
//!
//! | option            | default |
//! |-------------------|---------|
//! | `spread`          | 2.25    |
//! | `bandwidth`       | 0.7     |
//! | `grid_range`      | [-10, 25.1) |
//! | `grid_resolution` | 1000    |

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchKdeBuilder;
use crate::engine::executor::{CurvePassFn, DensityPassFn};

// Publicly re-exported types
pub use crate::engine::output::KdeResult;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::errors::KdeError;
pub use crate::primitives::grid::GridSpacing;

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Batch;
}

// ============================================================================
// KDE Builder
// ============================================================================

/// Fluent builder for kernel density estimation.
///
/// Each option may be set once; a second call is reported as
/// [`KdeError::DuplicateParameter`] by `build()`. `grid_resolution` and
/// `grid_step` are two ways to set the same option, `grid_spacing`.
#[derive(Debug, Clone)]
pub struct KdeBuilder<T> {
    /// Kernel standard deviation.
    pub spread: Option<T>,

    /// Bandwidth divisor.
    pub bandwidth: Option<T>,

    /// Grid bounds `[min, max)`.
    pub grid_range: Option<(T, T)>,

    /// Point count or explicit step of the grid.
    pub grid_spacing: Option<GridSpacing<T>>,

    /// Whether to compute diagnostics.
    pub return_diagnostics: Option<bool>,

    // ======================================
    // DEV
    // ======================================
    /// Custom curve pass function.
    #[doc(hidden)]
    pub custom_curve_pass: Option<CurvePassFn<T>>,

    /// Custom density pass function.
    #[doc(hidden)]
    pub custom_density_pass: Option<DensityPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times.
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for KdeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> KdeBuilder<T> {
    /// Select an adapter and convert into its builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: KdeAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a builder with every option unset.
    pub fn new() -> Self {
        Self {
            spread: None,
            bandwidth: None,
            grid_range: None,
            grid_spacing: None,
            return_diagnostics: None,
            custom_curve_pass: None,
            custom_density_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the kernel standard deviation.
    pub fn spread(mut self, spread: T) -> Self {
        if self.spread.is_some() {
            self.duplicate_param = Some("spread");
        }
        self.spread = Some(spread);
        self
    }

    /// Set the bandwidth divisor.
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        if self.bandwidth.is_some() {
            self.duplicate_param = Some("bandwidth");
        }
        self.bandwidth = Some(bandwidth);
        self
    }

    /// Set the grid bounds `[min, max)`.
    pub fn grid_range(mut self, min: T, max: T) -> Self {
        if self.grid_range.is_some() {
            self.duplicate_param = Some("grid_range");
        }
        self.grid_range = Some((min, max));
        self
    }

    /// Use `resolution` evenly spaced grid points.
    pub fn grid_resolution(mut self, resolution: usize) -> Self {
        if self.grid_spacing.is_some() {
            self.duplicate_param = Some("grid_spacing");
        }
        self.grid_spacing = Some(GridSpacing::Resolution(resolution));
        self
    }

    /// Use an explicit distance between grid points.
    pub fn grid_step(mut self, step: T) -> Self {
        if self.grid_spacing.is_some() {
            self.duplicate_param = Some("grid_spacing");
        }
        self.grid_spacing = Some(GridSpacing::Step(step));
        self
    }

    /// Compute mass, peak, modes and tails of the estimate.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    // ==========================
    // Development Options
    // ==========================

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

    /// Set the parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

// ============================================================================
// Adapters
// ============================================================================

/// Conversion from [`KdeBuilder`] into an adapter-specific builder.
pub trait KdeAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`KdeBuilder`] into a specialized execution builder.
    fn convert(builder: KdeBuilder<T>) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> KdeAdapter<T> for Batch {
    type Output = BatchKdeBuilder<T>;

    fn convert(builder: KdeBuilder<T>) -> Self::Output {
        let mut result = BatchKdeBuilder::default();

        if let Some(spread) = builder.spread {
            result.spread = spread;
        }
        if let Some(bandwidth) = builder.bandwidth {
            result.bandwidth = bandwidth;
        }
        if let Some((min, max)) = builder.grid_range {
            result.grid_min = min;
            result.grid_max = max;
        }
        if let Some(spacing) = builder.grid_spacing {
            result.grid_spacing = spacing;
        }
        if let Some(rd) = builder.return_diagnostics {
            result.return_diagnostics = rd;
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(cp) = builder.custom_curve_pass {
            result.custom_curve_pass = Some(cp);
        }
        if let Some(dp) = builder.custom_density_pass {
            result.custom_density_pass = Some(dp);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

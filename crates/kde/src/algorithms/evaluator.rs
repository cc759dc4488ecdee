//! Kernel evaluation over the shared grid.
//!
//! ## Purpose
//!
//! This module turns one sample into one [`KernelCurve`]: the Gaussian kernel
//! centred on the sample, evaluated at every grid point and divided by the
//! bandwidth.
//!
//! ## Design notes
//!
//! * **Formula**: `v_i = exp(-0.5 * ((x_i - c) / s)^2) / (s * h * sqrt(2*pi))`.
//!   The division by the bandwidth `h` happens here *and* again in the
//!   aggregator; both are kept.
//! * **Fail-fast**: Spread, bandwidth and grid are checked when the evaluator
//!   is built, the centre when a curve is requested.
//! * **Reusable**: A [`KernelEvaluator`] holds the parameters of a run so the
//!   per-sample loop only carries the centre.
//!
//! ## Invariants
//!
//! * Every curve produced by one evaluator shares the evaluator's grid.
//! * `evaluate_all` returns curves in sample order.
//!
//! ## Non-goals
//!
//! * This module does not sum curves (see `aggregation`).
//! * This module does not parallelize (see the `fastKde` crate).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::GaussianKernel;
use crate::primitives::curve::KernelCurve;
use crate::primitives::errors::{KdeError, require_finite, require_positive};
use crate::primitives::grid::Grid;

// ============================================================================
// Kernel Evaluator
// ============================================================================

/// Evaluates bandwidth-scaled Gaussian kernels on a fixed grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelEvaluator<T> {
    kernel: GaussianKernel<T>,
    bandwidth: T,
    scale: T,
    grid: Grid<T>,
}

impl<T: Float> KernelEvaluator<T> {
    /// Create an evaluator for the given spread, bandwidth and grid.
    ///
    /// Fails if `spread * bandwidth` is so small that the leading factor is
    /// not finite.
    pub fn new(spread: T, bandwidth: T, grid: Grid<T>) -> Result<Self, KdeError> {
        let kernel = GaussianKernel::new(spread)?;
        require_positive("bandwidth", bandwidth)?;
        let scale = kernel.scaled_normalizer(bandwidth)?;
        Ok(Self {
            kernel,
            bandwidth,
            scale,
            grid,
        })
    }

    /// Kernel standard deviation.
    #[inline]
    pub fn spread(&self) -> T {
        self.kernel.spread()
    }

    /// Bandwidth divisor.
    #[inline]
    pub fn bandwidth(&self) -> T {
        self.bandwidth
    }

    /// Grid every curve is evaluated on.
    #[inline]
    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    /// Evaluate the kernel centred on `center`.
    pub fn evaluate(&self, center: T) -> Result<KernelCurve<T>, KdeError> {
        require_finite("center", center)?;

        let values: Vec<T> = self
            .grid
            .iter()
            .map(|x| self.scale * self.kernel.profile(x, center))
            .collect();

        KernelCurve::from_parts(self.grid, values)
    }

    /// Evaluate one curve per sample, preserving sample order.
    pub fn evaluate_all(&self, samples: &[T]) -> Result<Vec<KernelCurve<T>>, KdeError> {
        samples.iter().map(|&c| self.evaluate(c)).collect()
    }
}

// ============================================================================
// One-shot Evaluation
// ============================================================================

/// Evaluate a single kernel curve from raw parameters.
///
/// The grid spans `[grid_min, grid_max)` with spacing `grid_step`. Fails with
/// [`KdeError::InvalidParameter`] when `spread`, `bandwidth` or `grid_step`
/// is not strictly positive, when `grid_min >= grid_max`, or when any value is
/// not finite.
pub fn evaluate<T: Float>(
    center: T,
    spread: T,
    bandwidth: T,
    grid_min: T,
    grid_max: T,
    grid_step: T,
) -> Result<KernelCurve<T>, KdeError> {
    require_positive("spread", spread)?;
    require_positive("bandwidth", bandwidth)?;
    let grid = Grid::new(grid_min, grid_max, grid_step)?;

    KernelEvaluator::new(spread, bandwidth, grid)?.evaluate(center)
}

//! Reduction of kernel curves into a density estimate.
//!
//! ## Purpose
//!
//! This module sums per-sample kernel curves pointwise and scales the sum by
//! `1 / (sample_count * bandwidth)`.
//!
//! ## Design notes
//!
//! * **Grid identity**: Every curve is compared to the first one before any
//!   arithmetic; a mismatch is an error, never a resample.
//! * **Fixed order**: Each grid index is summed over curves in slice order.
//!   Any implementation that keeps this order (e.g. parallel over grid
//!   indices) yields bit-identical results.
//! * **Incremental**: [`DensityAccumulator`] supports adding curves one at a
//!   time when they are not all held in memory.
//!
//! ## Invariants
//!
//! * The estimate shares the grid of its input curves.
//!
//! ## Non-goals
//!
//! * This module does not evaluate kernels.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::curve::{DensityEstimate, KernelCurve};
use crate::primitives::errors::{KdeError, require_positive};
use crate::primitives::grid::{Grid, index_to_float};

// ============================================================================
// Validation Helpers
// ============================================================================

/// Check that `curves` is non-empty and shares one grid; return that grid.
pub fn check_curves<T: Float>(curves: &[KernelCurve<T>]) -> Result<Grid<T>, KdeError> {
    let grid = *curves.first().ok_or(KdeError::EmptyInput)?.grid();
    for (i, curve) in curves.iter().enumerate() {
        check_curve(&grid, i, curve)?;
    }
    Ok(grid)
}

/// The divisor `sample_count * bandwidth`.
pub fn normalization_divisor<T: Float>(sample_count: usize, bandwidth: T) -> Result<T, KdeError> {
    if sample_count == 0 {
        return Err(KdeError::invalid(
            "sample_count",
            format!("{sample_count} (must be at least 1)"),
        ));
    }
    require_positive("bandwidth", bandwidth)?;
    Ok(index_to_float::<T>(sample_count) * bandwidth)
}

fn check_curve<T: Float>(grid: &Grid<T>, index: usize, curve: &KernelCurve<T>) -> Result<(), KdeError> {
    if curve.grid() != grid || curve.len() != grid.len() {
        return Err(KdeError::InconsistentGrid {
            curve: index,
            expected_points: grid.len(),
            got_points: curve.len(),
        });
    }
    Ok(())
}

// ============================================================================
// Accumulator
// ============================================================================

/// Running pointwise sum of kernel curves on one grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityAccumulator<T> {
    grid: Grid<T>,
    sums: Vec<T>,
    curves: usize,
}

impl<T: Float> DensityAccumulator<T> {
    /// Start an empty sum on `grid`.
    pub fn new(grid: Grid<T>) -> Self {
        Self {
            grid,
            sums: vec![T::zero(); grid.len()],
            curves: 0,
        }
    }

    /// Number of curves added so far.
    #[inline]
    pub fn curves(&self) -> usize {
        self.curves
    }

    /// Add one curve; it must live on the accumulator's grid.
    pub fn add(&mut self, curve: &KernelCurve<T>) -> Result<(), KdeError> {
        check_curve(&self.grid, self.curves, curve)?;
        for (sum, &v) in self.sums.iter_mut().zip(curve.values()) {
            *sum = *sum + v;
        }
        self.curves += 1;
        Ok(())
    }

    /// Scale the sum by `1 / (sample_count * bandwidth)`.
    pub fn finish(self, sample_count: usize, bandwidth: T) -> Result<DensityEstimate<T>, KdeError> {
        if self.curves == 0 {
            return Err(KdeError::EmptyInput);
        }
        let divisor = normalization_divisor(sample_count, bandwidth)?;
        let values = self.sums.into_iter().map(|s| s / divisor).collect();
        KernelCurve::from_parts(self.grid, values)
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Sum `curves` pointwise and divide by `sample_count * bandwidth`.
///
/// Fails with [`KdeError::EmptyInput`] when `curves` is empty,
/// [`KdeError::InconsistentGrid`] when the curves disagree on their grid, and
/// [`KdeError::InvalidParameter`] for a zero `sample_count` or a non-positive
/// `bandwidth`.
pub fn aggregate<T: Float>(
    curves: &[KernelCurve<T>],
    sample_count: usize,
    bandwidth: T,
) -> Result<DensityEstimate<T>, KdeError> {
    let grid = check_curves(curves)?;
    normalization_divisor(sample_count, bandwidth)?;

    let mut acc = DensityAccumulator::new(grid);
    for curve in curves {
        acc.add(curve)?;
    }
    acc.finish(sample_count, bandwidth)
}

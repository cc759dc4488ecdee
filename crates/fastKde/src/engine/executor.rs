//! Parallel execution engine for kernel density estimation.
//!
//! ## Purpose
//!
//! This module provides the parallel curve and density passes that are
//! injected into the `kde` crate's execution engine.
//!
//! ## Design notes
//!
//! * **Curve pass**: Samples are independent; each one is evaluated on its
//!   own task and collected back in sample order.
//! * **Density pass**: Parallel over grid indices. Each index sums the curves
//!   in slice order, so the result is bit-identical to the sequential
//!   reduction; there is no tree-shaped floating-point sum.
//! * **Integration**: Plugs into the `kde` executor via the `CurvePassFn` and
//!   `DensityPassFn` hooks.
//!
//! ## Invariants
//!
//! * Output order matches input order.
//! * Errors are the same ones the sequential passes raise.
//!
//! ## Non-goals
//!
//! * This module does not validate builder options (handled by `kde`).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Export dependencies from kde crate
use kde::internals::algorithms::aggregation::{check_curves, normalization_divisor};
use kde::internals::algorithms::evaluator::KernelEvaluator;
use kde::internals::primitives::curve::{DensityEstimate, KernelCurve};
use kde::internals::primitives::errors::KdeError;

// ============================================================================
// Parallel Curve Pass
// ============================================================================

/// Evaluate one kernel curve per sample across CPU cores.
#[cfg(feature = "cpu")]
pub fn curve_pass_parallel<T>(
    samples: &[T],
    evaluator: &KernelEvaluator<T>,
) -> Result<Vec<KernelCurve<T>>, KdeError>
where
    T: Float + Send + Sync,
{
    samples
        .par_iter()
        .map(|&center| evaluator.evaluate(center))
        .collect()
}

// ============================================================================
// Parallel Density Pass
// ============================================================================

/// Reduce curves into the density estimate, one task per grid index.
#[cfg(feature = "cpu")]
pub fn density_pass_parallel<T>(
    curves: &[KernelCurve<T>],
    sample_count: usize,
    bandwidth: T,
) -> Result<DensityEstimate<T>, KdeError>
where
    T: Float + Send + Sync,
{
    let grid = check_curves(curves)?;
    let divisor = normalization_divisor(sample_count, bandwidth)?;

    let values: Vec<T> = (0..grid.len())
        .into_par_iter()
        .map(|i| {
            let sum = curves
                .iter()
                .fold(T::zero(), |acc, curve| acc + curve.values()[i]);
            sum / divisor
        })
        .collect();

    KernelCurve::from_parts(grid, values)
}

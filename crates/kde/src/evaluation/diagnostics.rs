//! Summary statistics of a density estimate.
//!
//! ## Purpose
//!
//! This module reduces a [`DensityEstimate`] to a handful of numbers that make
//! it easy to compare runs: integrated mass, global peak, local modes and tail
//! values.
//!
//! ## Design notes
//!
//! * **Grid-only**: Everything is computed from the estimate's grid and
//!   values; no samples or kernel parameters are needed.
//! * **Trapezoidal mass**: The integral uses the trapezoid rule on the grid
//!   step. Because the bandwidth divides twice, the mass of a well-contained
//!   estimate is about `1 / bandwidth^2`, not 1.
//! * **Plateaus**: A run of equal values counts as one mode, reported at its
//!   first point.
//!
//! ## Invariants
//!
//! * `peak_density >= 0` and `total_mass >= 0` for estimates built from
//!   Gaussian kernels.
//! * `modes` is sorted by x and never includes the first or last grid point.
//!
//! ## Non-goals
//!
//! * This module does not assess goodness of fit against a reference density.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, LowerExp, Result};
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::primitives::curve::DensityEstimate;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Summary statistics of a density estimate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostics<T> {
    /// Trapezoidal integral of the estimate over the grid.
    pub total_mass: T,

    /// Grid x of the global maximum (first on ties).
    pub peak_x: T,

    /// Estimate value at `peak_x`.
    pub peak_density: T,

    /// Grid x of every interior local maximum, in increasing order.
    pub modes: Vec<T>,

    /// Estimate value at the first grid point.
    pub left_tail: T,

    /// Estimate value at the last grid point.
    pub right_tail: T,
}

impl<T: Float> Diagnostics<T> {
    // ========================================================================
    // Main Computation
    // ========================================================================

    /// Compute diagnostics for `estimate`.
    pub fn compute(estimate: &DensityEstimate<T>) -> Self {
        let values = estimate.values();
        let grid = estimate.grid();
        let x_at = |i: usize| grid.point(i).unwrap_or_else(T::nan);

        let (peak_index, peak_density) = estimate.argmax().unwrap_or((0, T::nan()));

        Diagnostics {
            total_mass: Self::calculate_mass(values, grid.step()),
            peak_x: x_at(peak_index),
            peak_density,
            modes: Self::find_modes(values).into_iter().map(x_at).collect(),
            left_tail: values.first().copied().unwrap_or_else(T::nan),
            right_tail: values.last().copied().unwrap_or_else(T::nan),
        }
    }

    /// Number of interior local maxima.
    #[inline]
    pub fn mode_count(&self) -> usize {
        self.modes.len()
    }

    // ========================================================================
    // Metrics
    // ========================================================================

    /// Trapezoid rule: `step * sum (v_i + v_{i+1}) / 2`.
    pub fn calculate_mass(values: &[T], step: T) -> T {
        let two = T::one() + T::one();
        values
            .windows(2)
            .fold(T::zero(), |acc, w| acc + (w[0] + w[1]) / two)
            * step
    }

    /// Indices of the interior local maxima of `values`.
    ///
    /// A strict rise followed (after any plateau) by a strict fall is one
    /// mode at the start of the plateau.
    pub fn find_modes(values: &[T]) -> Vec<usize> {
        let n = values.len();
        let mut modes = Vec::new();
        let mut i = 1;
        while i + 1 < n {
            if values[i] > values[i - 1] {
                let mut end = i;
                while end + 1 < n && values[end + 1] == values[i] {
                    end += 1;
                }
                if end + 1 < n && values[end + 1] < values[i] {
                    modes.push(i);
                }
                i = end + 1;
            } else {
                i += 1;
            }
        }
        modes
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + LowerExp> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "KDE Diagnostics:")?;
        writeln!(f, "  Total mass:    {:.6}", self.total_mass)?;
        writeln!(f, "  Peak x:        {:.4}", self.peak_x)?;
        writeln!(f, "  Peak density:  {:.6}", self.peak_density)?;
        write!(f, "  Modes:        ")?;
        if self.modes.is_empty() {
            write!(f, " none")?;
        }
        for m in &self.modes {
            write!(f, " {:.4}", m)?;
        }
        writeln!(f)?;
        writeln!(f, "  Left tail:     {:.3e}", self.left_tail)?;
        writeln!(f, "  Right tail:    {:.3e}", self.right_tail)?;

        Ok(())
    }
}

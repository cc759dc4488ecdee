//! Output types for KDE runs.
//!
//! ## Purpose
//!
//! This module defines [`KdeResult`], everything a plotting front end needs
//! from one estimation: the samples as scatter points, one kernel curve per
//! sample, and the density estimate, together with the parameters used.
//!
//! ## Design notes
//!
//! * **Plot-ready**: Accessors return `(x, y)` pairs; samples sit at `y = 0`.
//! * **Serializable**: With the `serde` feature the whole result can be handed
//!   to an external renderer as JSON.
//! * **Ergonomics**: Implements `Display` for a human-readable table.
//!
//! ## Invariants
//!
//! * `curves.len() == samples.len()`, in sample order.
//! * Every curve and the density share `grid`.
//!
//! ## Non-goals
//!
//! * This module does not render plots.

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
use crate::evaluation::diagnostics::Diagnostics;
use crate::primitives::curve::{DensityEstimate, KernelCurve};
use crate::primitives::grid::Grid;

// ============================================================================
// Result Structure
// ============================================================================

/// Complete output of one kernel density estimation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "T: Float + Deserialize<'de>"))
)]
pub struct KdeResult<T> {
    /// Input samples, in input order.
    pub samples: Vec<T>,

    /// Grid shared by every curve and the estimate.
    pub grid: Grid<T>,

    /// Kernel standard deviation used.
    pub spread: T,

    /// Bandwidth divisor used.
    pub bandwidth: T,

    /// One kernel curve per sample, in input order.
    pub curves: Vec<KernelCurve<T>>,

    /// Normalized sum of the curves.
    pub density: DensityEstimate<T>,

    /// Summary statistics of the estimate, if requested.
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float> KdeResult<T> {
    // ========================================================================
    // Plot Data
    // ========================================================================

    /// Every sample paired with `y = 0`.
    pub fn scatter_points(&self) -> Vec<(T, T)> {
        self.samples.iter().map(|&s| (s, T::zero())).collect()
    }

    /// `(x, y)` pairs of the kernel curve for sample `i`.
    pub fn curve_points(&self, i: usize) -> Option<Vec<(T, T)>> {
        self.curves.get(i).map(KernelCurve::points)
    }

    /// `(x, y)` pairs of the density estimate.
    pub fn density_points(&self) -> Vec<(T, T)> {
        self.density.points()
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of samples.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Check if diagnostics were computed.
    pub fn has_diagnostics(&self) -> bool {
        self.diagnostics.is_some()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + LowerExp> Display for KdeResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Samples:     {}", self.samples.len())?;
        writeln!(f, "  Spread:      {}", self.spread)?;
        writeln!(f, "  Bandwidth:   {}", self.bandwidth)?;
        writeln!(
            f,
            "  Grid:        [{}, {}) step {} ({} points)",
            self.grid.min(),
            self.grid.max(),
            self.grid.step(),
            self.grid.len()
        )?;
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
        }

        writeln!(f, "Density Estimate:")?;
        writeln!(f, "{:>10} {:>14}", "X", "Density")?;
        writeln!(f, "{:-<25}", "")?;

        // Show first 10 and last 10 rows if more than 20 points
        let values = self.density.values();
        let n = values.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>10}", "...")?;
            }
            prev_idx = idx;

            let x = self.grid.point(idx).unwrap_or_else(T::nan);
            writeln!(f, "{:>10.4} {:>14.6e}", x, values[idx])?;
        }

        Ok(())
    }
}

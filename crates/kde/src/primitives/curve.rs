//! Discretized curves on an evaluation grid.
//!
//! ## Purpose
//!
//! This module defines [`KernelCurve`], the pair of a [`Grid`] and one value
//! per grid point. It is the output of the kernel evaluator (one curve per
//! sample) and, through the [`DensityEstimate`] alias, of the aggregator.
//!
//! ## Invariants
//!
//! * `values.len() == grid.len()`; the constructor rejects anything else.
//! * A curve is immutable once built.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::primitives::errors::KdeError;
use crate::primitives::grid::Grid;

// ============================================================================
// Kernel Curve
// ============================================================================

/// Values of a function sampled at every point of a [`Grid`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawCurve<T>",
        bound(deserialize = "T: Float + Deserialize<'de>")
    )
)]
pub struct KernelCurve<T> {
    grid: Grid<T>,
    values: Vec<T>,
}

/// Unchecked field layout of a serialized [`KernelCurve`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Float + Deserialize<'de>"))]
struct RawCurve<T> {
    grid: Grid<T>,
    values: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: Float> TryFrom<RawCurve<T>> for KernelCurve<T> {
    type Error = KdeError;

    fn try_from(raw: RawCurve<T>) -> Result<Self, KdeError> {
        Self::from_parts(raw.grid, raw.values)
    }
}

/// The reduced estimate has the same shape as a single kernel curve.
pub type DensityEstimate<T> = KernelCurve<T>;

impl<T: Float> KernelCurve<T> {
    /// Pair a grid with its values.
    ///
    /// Fails with [`KdeError::InconsistentGrid`] if the lengths differ.
    pub fn from_parts(grid: Grid<T>, values: Vec<T>) -> Result<Self, KdeError> {
        if values.len() != grid.len() {
            return Err(KdeError::InconsistentGrid {
                curve: 0,
                expected_points: grid.len(),
                got_points: values.len(),
            });
        }
        Ok(Self { grid, values })
    }

    /// The grid this curve was evaluated on.
    #[inline]
    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    /// One value per grid point.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the curve has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Grid x-coordinates.
    pub fn x(&self) -> Vec<T> {
        self.grid.points()
    }

    /// `(x, y)` pairs, ready for plotting.
    pub fn points(&self) -> Vec<(T, T)> {
        self.grid.iter().zip(self.values.iter().copied()).collect()
    }

    /// Index and value of the largest point (first one on ties).
    pub fn argmax(&self) -> Option<(usize, T)> {
        let mut best: Option<(usize, T)> = None;
        for (i, &v) in self.values.iter().enumerate() {
            match best {
                Some((_, b)) if v <= b => {}
                _ => best = Some((i, v)),
            }
        }
        best
    }

    /// Value at the grid point nearest to `x`.
    pub fn value_near(&self, x: T) -> Option<T> {
        self.grid
            .nearest_index(x)
            .and_then(|i| self.values.get(i).copied())
    }

    /// Consume the curve, returning its values.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

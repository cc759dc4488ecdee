//! Evaluation grid shared by every kernel curve of one estimation run.
//!
//! ## Purpose
//!
//! This module defines [`Grid`], an explicit value object describing the
//! ordered x-coordinates at which kernels and the density estimate are
//! evaluated. It replaces any shared, regenerated array: each evaluation
//! receives the grid by value, and grid identity can be checked by equality.
//!
//! ## Design notes
//!
//! * **Count-based**: Points are computed as `min + i * step`, never by
//!   repeated addition, so there is no drift across the grid.
//! * **Half-open**: Every point is strictly less than `max`, whatever the
//!   rounding of `(max - min) / step`.
//! * **Copy**: The grid is four scalars; passing it around is free.
//!
//! ## Invariants
//!
//! * `min < max`, both finite; `step > 0` and finite.
//! * `len >= 1` and `min + (len - 1) * step < max`.
//!
//! ## Non-goals
//!
//! * This module does not choose grid bounds from the data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::primitives::errors::{KdeError, require_finite, require_positive, to_f64};

// ============================================================================
// Grid Spacing
// ============================================================================

/// How the distance between grid points is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GridSpacing<T> {
    /// Fixed number of points; the step is `(max - min) / n`.
    Resolution(usize),

    /// Fixed distance between consecutive points.
    Step(T),
}

impl<T> Default for GridSpacing<T> {
    fn default() -> Self {
        Self::Resolution(Grid::<T>::DEFAULT_RESOLUTION)
    }
}

// ============================================================================
// Grid
// ============================================================================

/// Ordered set of x-coordinates `min, min + step, ...`, all `< max`.
///
/// Deserialized grids go through the same checks as constructed ones.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawGrid<T>",
        bound(deserialize = "T: Float + Deserialize<'de>")
    )
)]
pub struct Grid<T> {
    min: T,
    max: T,
    step: T,
    len: usize,
}

/// Unchecked field layout of a serialized [`Grid`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawGrid<T> {
    min: T,
    max: T,
    step: T,
    len: usize,
}

#[cfg(feature = "serde")]
impl<T: Float> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = KdeError;

    fn try_from(raw: RawGrid<T>) -> Result<Self, KdeError> {
        Self::from_parts(raw.min, raw.max, raw.step, raw.len)
    }
}

impl<T> Grid<T> {
    /// Number of points used when no spacing is configured.
    pub const DEFAULT_RESOLUTION: usize = 1000;
}

impl<T: Float> Grid<T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Build a grid over `[min, max)` with the given spacing.
    pub fn from_spacing(min: T, max: T, spacing: GridSpacing<T>) -> Result<Self, KdeError> {
        match spacing {
            GridSpacing::Resolution(n) => Self::with_resolution(min, max, n),
            GridSpacing::Step(step) => Self::new(min, max, step),
        }
    }

    /// Build a grid over `[min, max)` with an explicit step.
    pub fn new(min: T, max: T, step: T) -> Result<Self, KdeError> {
        check_bounds(min, max)?;
        check_step(step)?;

        let span = (max - min) / step;
        let estimate = span.ceil().to_usize().ok_or_else(|| {
            KdeError::invalid(
                "grid_step",
                format!(
                    "{} is too small for the range [{}, {})",
                    to_f64(step),
                    to_f64(min),
                    to_f64(max)
                ),
            )
        })?;

        let len = settle_len(min, max, step, estimate);
        Ok(Self {
            min,
            max,
            step,
            len,
        })
    }

    /// Rebuild a grid from its stored fields, checking every invariant.
    ///
    /// `len` may be any count from 1 up to the number of points below `max`.
    pub fn from_parts(min: T, max: T, step: T, len: usize) -> Result<Self, KdeError> {
        check_bounds(min, max)?;
        check_step(step)?;
        if len == 0 {
            return Err(KdeError::invalid(
                "grid_resolution",
                format!("{len} (must be at least 1)"),
            ));
        }
        if point_at(min, step, len - 1) >= max {
            return Err(KdeError::invalid(
                "grid_resolution",
                format!(
                    "{len} points of step {} overrun grid_max {}",
                    to_f64(step),
                    to_f64(max)
                ),
            ));
        }

        Ok(Self {
            min,
            max,
            step,
            len,
        })
    }

    /// Build a grid of `resolution` points over `[min, max)`.
    ///
    /// The step is `(max - min) / resolution`.
    pub fn with_resolution(min: T, max: T, resolution: usize) -> Result<Self, KdeError> {
        check_bounds(min, max)?;
        if resolution == 0 {
            return Err(KdeError::invalid(
                "grid_resolution",
                format!("{resolution} (must be at least 1)"),
            ));
        }

        let step = (max - min) / index_to_float::<T>(resolution);
        check_step(step)?;

        // The last point can only reach `max` through rounding; trim it then.
        let mut len = resolution;
        while len > 1 && point_at(min, step, len - 1) >= max {
            len -= 1;
        }

        Ok(Self {
            min,
            max,
            step,
            len,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Inclusive lower bound.
    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    /// Exclusive upper bound.
    #[inline]
    pub fn max(&self) -> T {
        self.max
    }

    /// Distance between consecutive points.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for a validated grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The `i`-th point, if in range.
    #[inline]
    pub fn point(&self, i: usize) -> Option<T> {
        (i < self.len).then(|| point_at(self.min, self.step, i))
    }

    /// Iterate over all points in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = T> + use<T> {
        let (min, step) = (self.min, self.step);
        (0..self.len).map(move |i| point_at(min, step, i))
    }

    /// Materialize all points.
    pub fn points(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Returns `true` if `x` lies in `[min, max)`.
    #[inline]
    pub fn contains(&self, x: T) -> bool {
        x >= self.min && x < self.max
    }

    /// Index of the grid point nearest to `x`, clamped to the grid.
    ///
    /// Returns `None` for non-finite `x` or an empty grid.
    pub fn nearest_index(&self, x: T) -> Option<usize> {
        if !x.is_finite() {
            return None;
        }
        let last = self.len.checked_sub(1)?;
        let offset = ((x - self.min) / self.step).round();
        if offset <= T::zero() {
            return Some(0);
        }
        Some(offset.to_usize().map_or(last, |i| i.min(last)))
    }
}

// ============================================================================
// Helpers
// ============================================================================

#[inline]
fn point_at<T: Float>(min: T, step: T, i: usize) -> T {
    min + index_to_float::<T>(i) * step
}

#[inline]
pub(crate) fn index_to_float<T: Float>(i: usize) -> T {
    T::from(i).unwrap_or_else(T::infinity)
}

/// Adjust a point count estimate so that exactly the points `< max` remain.
fn settle_len<T: Float>(min: T, max: T, step: T, estimate: usize) -> usize {
    let mut len = estimate.max(1);
    while len > 1 && point_at(min, step, len - 1) >= max {
        len -= 1;
    }
    while point_at(min, step, len) < max {
        len += 1;
    }
    len
}

fn check_bounds<T: Float>(min: T, max: T) -> Result<(), KdeError> {
    require_finite("grid_min", min)?;
    require_finite("grid_max", max)?;
    if min >= max {
        return Err(KdeError::invalid(
            "grid_min",
            format!(
                "{} must be less than grid_max {}",
                to_f64(min),
                to_f64(max)
            ),
        ));
    }
    Ok(())
}

fn check_step<T: Float>(step: T) -> Result<(), KdeError> {
    require_positive("grid_step", step)
}

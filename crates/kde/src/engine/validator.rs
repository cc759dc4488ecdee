//! Input validation for KDE configuration and data.
//!
//! ## Purpose
//!
//! This module checks builder parameters and sample data before any kernel is
//! evaluated, so that a run either starts with a valid configuration or does
//! not start at all.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordered**: Kernel parameters first, then the grid, then the samples.
//! * **Shared checks**: Scalar rules are the same ones the grid and kernel
//!   constructors apply, so error messages agree across entry points.
//!
//! ## Invariants
//!
//! * Nothing is clamped or replaced; invalid input is always an error.
//!
//! ## Non-goals
//!
//! * This module does not build the grid or evaluate kernels.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::{KdeError, require_positive, to_f64};
use crate::primitives::grid::{Grid, GridSpacing};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for KDE configuration and input data.
///
/// All methods return `Result<(), KdeError>` and fail on the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the sample sequence: non-empty and finite.
    pub fn validate_samples<T: Float>(samples: &[T]) -> Result<(), KdeError> {
        if samples.is_empty() {
            return Err(KdeError::EmptyInput);
        }

        if let Some((i, &bad)) = samples.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(KdeError::invalid(
                "samples",
                format!("samples[{i}]={} (must be finite)", to_f64(bad)),
            ));
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the kernel standard deviation.
    pub fn validate_spread<T: Float>(spread: T) -> Result<(), KdeError> {
        require_positive("spread", spread)
    }

    /// Validate the bandwidth divisor.
    pub fn validate_bandwidth<T: Float>(bandwidth: T) -> Result<(), KdeError> {
        require_positive("bandwidth", bandwidth)
    }

    /// Validate grid bounds and spacing, returning the grid they describe.
    pub fn validate_grid<T: Float>(
        grid_min: T,
        grid_max: T,
        spacing: GridSpacing<T>,
    ) -> Result<Grid<T>, KdeError> {
        Grid::from_spacing(grid_min, grid_max, spacing)
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), KdeError> {
        if let Some(param) = duplicate_param {
            return Err(KdeError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}

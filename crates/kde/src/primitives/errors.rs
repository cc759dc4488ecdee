//! Error types for kernel density estimation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while evaluating
//! kernel curves, reducing them into a density estimate, or configuring the
//! builder.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors name the offending parameter or curve.
//! * **Deferred**: Builder misuse is recorded and reported at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Parameter validation**: Spread, bandwidth, grid bounds, step and resolution.
//! 2. **Input validation**: Empty or non-finite sample sequences.
//! 3. **Grid identity**: Curves reduced together must share one grid.
//!
//! ## Invariants
//!
//! * Errors are raised before any computation; nothing is clamped or substituted.
//!
//! ## Non-goals
//!
//! * This module only hosts the scalar checks shared by the grid, the kernel
//!   and the validator; orchestration of validation lives in `engine::validator`.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for kernel density estimation.
#[derive(Debug, Clone, PartialEq)]
pub enum KdeError {
    /// A numeric parameter violates its constraint (e.g. non-positive spread).
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human-readable description of the violation.
        reason: String,
    },

    /// No samples (or no kernel curves) were supplied.
    EmptyInput,

    /// Curves passed to the aggregator were not evaluated on the same grid.
    InconsistentGrid {
        /// Index of the first curve that disagrees with curve 0.
        curve: usize,
        /// Number of grid points of the reference grid.
        expected_points: usize,
        /// Number of points carried by the offending curve.
        got_points: usize,
    },

    /// The input container cannot be used (e.g. non-contiguous memory).
    InvalidInput(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl KdeError {
    /// Shorthand for an [`KdeError::InvalidParameter`] with a formatted reason.
    pub(crate) fn invalid(parameter: &'static str, reason: String) -> Self {
        Self::InvalidParameter { parameter, reason }
    }
}

// ============================================================================
// Parameter Checks
// ============================================================================

/// Fail unless `value` is finite.
pub(crate) fn require_finite<T: Float>(
    parameter: &'static str,
    value: T,
) -> core::result::Result<(), KdeError> {
    if !value.is_finite() {
        return Err(KdeError::invalid(
            parameter,
            format!("{} (must be finite)", to_f64(value)),
        ));
    }
    Ok(())
}

/// Fail unless `value` is finite and strictly positive.
pub(crate) fn require_positive<T: Float>(
    parameter: &'static str,
    value: T,
) -> core::result::Result<(), KdeError> {
    if !value.is_finite() || value <= T::zero() {
        return Err(KdeError::invalid(
            parameter,
            format!("{} (must be > 0 and finite)", to_f64(value)),
        ));
    }
    Ok(())
}

/// Lossy conversion used only for error messages.
#[inline]
pub(crate) fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for KdeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidParameter { parameter, reason } => {
                write!(f, "Invalid parameter '{parameter}': {reason}")
            }
            Self::EmptyInput => write!(f, "Input is empty: at least one sample is required"),
            Self::InconsistentGrid {
                curve,
                expected_points,
                got_points,
            } => {
                write!(
                    f,
                    "Inconsistent grid: curve {curve} has {got_points} points on a different grid (expected {expected_points})"
                )
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for KdeError {}

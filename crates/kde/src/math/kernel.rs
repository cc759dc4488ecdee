//! Gaussian kernel for density estimation.
//!
//! ## Purpose
//!
//! This module provides the Gaussian kernel: the normal probability density
//! with a given standard deviation (the *spread*), centred on a sample.
//!
//! ## Design notes
//!
//! * **Closed form**: `K(x) = exp(-0.5 * ((x - c) / s)^2) / (s * sqrt(2*pi))`.
//! * **Separate scale**: The extra bandwidth divisor applied by the evaluator
//!   is folded into [`GaussianKernel::normalizer`], not into the exponent.
//! * **Underflow**: Far tails evaluate to exactly `0.0`; no positive floor is
//!   substituted.
//!
//! ## Invariants
//!
//! * The kernel is non-negative and symmetric around its centre.
//! * `spread > 0` and finite; enforced by [`GaussianKernel::new`].
//!
//! ## Non-goals
//!
//! * Other kernel shapes.
//! * Bandwidth selection.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::{KdeError, require_positive, to_f64};

// ============================================================================
// Mathematical Constants
// ============================================================================

/// Square root of 2*pi, the Gaussian normalizing constant.
pub const SQRT_2PI: f64 = 2.5066282746310005024157652848110452530069867406099_f64;

#[inline]
fn sqrt_2pi<T: Float>() -> T {
    // 2*pi == 8 * atan(1)
    T::from(SQRT_2PI).unwrap_or_else(|| {
        let two = T::one() + T::one();
        (two * two * two * T::one().atan()).sqrt()
    })
}

#[inline]
fn half<T: Float>() -> T {
    T::one() / (T::one() + T::one())
}

// ============================================================================
// Gaussian Kernel
// ============================================================================

/// Gaussian kernel with a fixed standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianKernel<T> {
    spread: T,
}

impl<T: Float> GaussianKernel<T> {
    /// Create a kernel with standard deviation `spread`.
    pub fn new(spread: T) -> Result<Self, KdeError> {
        require_positive("spread", spread)?;
        Ok(Self { spread })
    }

    /// Standard deviation of the kernel.
    #[inline]
    pub fn spread(&self) -> T {
        self.spread
    }

    /// Leading factor `1 / (spread * bandwidth * sqrt(2*pi))`.
    ///
    /// With `bandwidth == 1` this is the usual Gaussian normalizer. The
    /// product in the denominator must stay in the normal range of `T`; if it
    /// underflows to zero the factor is infinite (see
    /// [`GaussianKernel::scaled_normalizer`]).
    #[inline]
    pub fn normalizer(&self, bandwidth: T) -> T {
        T::one() / (self.spread * bandwidth * sqrt_2pi::<T>())
    }

    /// Unnormalized profile `exp(-0.5 * ((x - center) / spread)^2)`.
    #[inline]
    pub fn profile(&self, x: T, center: T) -> T {
        let z = (x - center) / self.spread;
        (-half::<T>() * z * z).exp()
    }

    /// [`normalizer`](Self::normalizer), rejecting a non-finite result.
    ///
    /// Fails when `spread * bandwidth` is too small to represent, which would
    /// otherwise turn every curve value into `inf` or `NaN`.
    pub fn scaled_normalizer(&self, bandwidth: T) -> Result<T, KdeError> {
        let factor = self.normalizer(bandwidth);
        if !factor.is_finite() {
            return Err(KdeError::invalid(
                "bandwidth",
                format!(
                    "spread * bandwidth = {} * {} underflows the kernel normalizer",
                    to_f64(self.spread),
                    to_f64(bandwidth)
                ),
            ));
        }
        Ok(factor)
    }
}

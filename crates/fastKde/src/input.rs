//! Input abstractions for kernel density estimation.
//!
//! ## Purpose
//!
//! This module lets `fit` accept slices, vectors and one-dimensional
//! `ndarray` arrays through a single trait.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Every implementation hands out a view of the existing
//!   buffer.
//! * **Fail-fast**: Non-contiguous arrays are rejected instead of copied.
//!
//! ## Invariants
//!
//! * Returned slices cover every element of the input container.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from kde crate
use kde::internals::primitives::errors::KdeError;

/// Containers that can be viewed as a contiguous slice of samples.
pub trait KdeInput<T: Float> {
    /// Borrow the samples as a slice.
    fn as_kde_slice(&self) -> Result<&[T], KdeError>;
}

impl<T: Float> KdeInput<T> for [T] {
    fn as_kde_slice(&self) -> Result<&[T], KdeError> {
        Ok(self)
    }
}

impl<T: Float, const N: usize> KdeInput<T> for [T; N] {
    fn as_kde_slice(&self) -> Result<&[T], KdeError> {
        Ok(self)
    }
}

impl<T: Float> KdeInput<T> for Vec<T> {
    fn as_kde_slice(&self) -> Result<&[T], KdeError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> KdeInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_kde_slice(&self) -> Result<&[T], KdeError> {
        self.as_slice().ok_or_else(|| {
            KdeError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}

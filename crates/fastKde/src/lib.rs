//! # Fast KDE (Parallel Gaussian Kernel Density Estimation)
//!
//! Parallel execution for the `kde` crate: per-sample kernel curves and the
//! pointwise reduction run on all CPU cores via `rayon`, with results
//! identical to the sequential path. Inputs may be slices, vectors or
//! one-dimensional `ndarray` arrays.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastKde::prelude::*;
//! use ndarray::Array1;
//!
//! let samples = Array1::from_vec(vec![0.1, 0.3, 0.5, -1.5, 8.0, 10.4]);
//!
//! // Build the model with parallel execution (default)
//! let model = Kde::new()
//!     .spread(2.25)
//!     .bandwidth(0.7)
//!     .grid_range(-10.0, 25.1)
//!     .grid_resolution(1000)
//!     .return_diagnostics()
//!     .adapter(Batch)     // Parallel by default
//!     .build()?;
//!
//! // Fit the model to the samples
//! let result = model.fit(&samples)?;
//!
//! assert_eq!(result.curves.len(), 6);
//! assert_eq!(result.density.len(), 1000);
//! println!("{}", result);
//! # Result::<(), KdeError>::Ok(())
//! ```
//!
//! ## Features
//!
//! * `cpu` (default): parallel passes via `rayon`. Without it every run is
//!   sequential.
//! * `serde`, `tracing`: forwarded to `kde`.
//! * `dev`: exposes internal layers under `internals`.

#![allow(non_snake_case)]

/// Parallel passes, usable with the `kde` executor hooks directly.
#[cfg(feature = "cpu")]
pub mod parallel {
    pub use crate::engine::executor::{curve_pass_parallel, density_pass_parallel};
}

// Layer 5: Engine - parallel passes.
mod engine;

// Layer 6: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for kernel density estimation.
mod api;

// Input data handling.
mod input;

// Standard fastKde prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::Batch, Diagnostics, GridSpacing, KdeBuilder as Kde, KdeError, KdeResult,
    };
    pub use crate::input::KdeInput;
    pub use kde::prelude::{
        DensityEstimate, Grid, KernelCurve, KernelEvaluator, aggregate, evaluate,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}

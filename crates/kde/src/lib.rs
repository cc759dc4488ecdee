//! # KDE (Gaussian Kernel Density Estimation for Rust)
//!
//! Evaluate a Gaussian kernel around every sample on a shared grid and reduce
//! the kernels into a smooth density estimate.
//!
//! ## What is KDE?
//!
//! Kernel density estimation places a small bump (here a normal density with
//! standard deviation *spread*) on every observation and sums the bumps. The
//! result is a smooth curve whose peaks show where observations cluster,
//! without assuming any parametric form for the underlying distribution.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use kde::prelude::*;
//!
//! let samples = vec![0.0, 2.0];
//!
//! // Build the model
//! let model = Kde::new()
//!     .spread(2.25)
//!     .bandwidth(0.7)
//!     .grid_range(-10.0, 25.1)
//!     .grid_step(0.0351)
//!     .adapter(Batch)
//!     .build()?;
//!
//! // Fit the model to the samples
//! let result = model.fit(&samples)?;
//!
//! assert_eq!(result.curves.len(), 2);
//! assert_eq!(result.scatter_points(), vec![(0.0, 0.0), (2.0, 0.0)]);
//! println!("{}", result);
//! # Result::<(), KdeError>::Ok(())
//! ```
//!
//! ### Building Blocks
//!
//! The two steps are also available as plain functions:
//!
//! ```rust
//! use kde::prelude::*;
//!
//! let a = evaluate(0.0, 2.25, 0.7, -10.0, 25.1, 0.0351)?;
//! let b = evaluate(2.0, 2.25, 0.7, -10.0, 25.1, 0.0351)?;
//! assert_eq!(a.grid(), b.grid());
//!
//! let density = aggregate(&[a, b], 2, 0.7)?;
//! assert_eq!(density.len(), 1000);
//! # Result::<(), KdeError>::Ok(())
//! ```
//!
//! ## Normalization
//!
//! Each kernel curve is divided by the bandwidth, and the aggregated sum is
//! divided by `sample_count * bandwidth` again. The estimate therefore
//! integrates to about `1 / bandwidth^2`, not to 1;
//! [`Diagnostics`](prelude::Diagnostics) reports the integral as `total_mass`.
//!
//! ## Parameters
//!
//! | Parameter         | Default     | Constraint         |
//! |-------------------|-------------|--------------------|
//! | `spread`          | 2.25        | > 0, finite        |
//! | `bandwidth`       | 0.7         | > 0, finite        |
//! | `grid_range`      | [-10, 25.1) | min < max, finite  |
//! | `grid_resolution` | 1000        | >= 1               |
//! | `grid_step`       | (unset)     | > 0, finite        |
//!
//! ## Features
//!
//! * `std` (default): standard library support; disable for `no_std` + `alloc`.
//! * `serde`: `Serialize`/`Deserialize` for grids, curves and results.
//! * `tracing`: debug and info events from the engine.
//! * `dev`: exposes every internal layer under `internals`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Emit a `tracing::info!` event when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

// Layer 1: Primitives - errors, grid and curve types.
mod primitives;

// Layer 2: Math - the Gaussian kernel.
mod math;

// Layer 3: Algorithms - kernel evaluation and aggregation.
mod algorithms;

// Layer 4: Evaluation - diagnostics of the estimate.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// Layer 6: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for kernel density estimation.
mod api;

// Standard KDE prelude.
pub mod prelude {
    pub use crate::algorithms::aggregation::aggregate;
    pub use crate::algorithms::evaluator::{KernelEvaluator, evaluate};
    pub use crate::api::{
        Adapter::Batch, Diagnostics, GridSpacing, KdeBuilder as Kde, KdeError, KdeResult,
    };
    pub use crate::primitives::curve::{DensityEstimate, KernelCurve};
    pub use crate::primitives::grid::Grid;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}

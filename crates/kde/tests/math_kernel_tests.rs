#![cfg(feature = "dev")]
//! Tests for the Gaussian kernel.
//!
//! ## Test Organization
//!
//! 1. **Constants** - Normalizing constant
//! 2. **Values** - Known points of the standard normal density
//! 3. **Properties** - Symmetry, integral, underflow
//! 4. **Validation** - Spread constraints

use approx::assert_relative_eq;

use kde::internals::math::kernel::{GaussianKernel, SQRT_2PI};
use kde::internals::primitives::errors::KdeError;

// ============================================================================
// Constants Tests
// ============================================================================

/// Test the normalizing constant against std.
#[test]
fn test_sqrt_2pi() {
    assert_relative_eq!(SQRT_2PI, (2.0 * std::f64::consts::PI).sqrt(), epsilon = 1e-15);
}

// ============================================================================
// Value Tests
// ============================================================================

/// Test the unit kernel against the standard normal density.
#[test]
fn test_unit_kernel_values() {
    let kernel = GaussianKernel::new(1.0).unwrap();
    let pdf = |u: f64| kernel.normalizer(1.0) * kernel.profile(u, 0.0);

    assert_relative_eq!(pdf(0.0), 0.398_942_280_401_432_7, epsilon = 1e-15);
    assert_relative_eq!(pdf(1.0), 0.241_970_724_519_143_37, epsilon = 1e-15);

    let kernel32 = GaussianKernel::new(1.0f32).unwrap();
    assert_relative_eq!(
        kernel32.normalizer(1.0) * kernel32.profile(2.0, 0.0),
        0.053_990_97f32,
        epsilon = 1e-6
    );
}

/// Test normalizer and profile combine to the bandwidth-scaled kernel.
#[test]
fn test_normalizer_and_profile() {
    let kernel = GaussianKernel::new(2.25).unwrap();

    assert_eq!(kernel.spread(), 2.25);
    assert_eq!(kernel.profile(3.0, 3.0), 1.0);
    assert_relative_eq!(
        kernel.normalizer(1.0),
        1.0 / (2.25 * SQRT_2PI),
        epsilon = 1e-15
    );
    assert_relative_eq!(
        kernel.normalizer(0.7),
        kernel.normalizer(1.0) / 0.7,
        epsilon = 1e-15
    );
    assert_relative_eq!(
        kernel.scaled_normalizer(0.7).unwrap(),
        kernel.normalizer(0.7),
        epsilon = 1e-15
    );
}

// ============================================================================
// Property Tests
// ============================================================================

/// Test symmetry around the centre.
#[test]
fn test_kernel_symmetry() {
    let kernel = GaussianKernel::new(0.8).unwrap();
    for d in [0.1, 0.5, 1.0, 2.5, 7.0] {
        assert_eq!(kernel.profile(d, 0.0), kernel.profile(-d, 0.0));
        assert_relative_eq!(
            kernel.profile(4.0 + d, 4.0),
            kernel.profile(4.0 - d, 4.0),
            epsilon = 1e-12
        );
    }
}

/// Test the density integrates to one (Riemann sum).
#[test]
fn test_kernel_integrates_to_one() {
    let kernel = GaussianKernel::new(1.5).unwrap();
    let step = 0.001;
    let total: f64 = (0..30_000)
        .map(|i| kernel.normalizer(1.0) * kernel.profile(-15.0 + i as f64 * step, 0.0) * step)
        .sum();

    assert_relative_eq!(total, 1.0, epsilon = 1e-6);
}

/// Test far tails underflow to exactly zero without a floor.
#[test]
fn test_kernel_far_tail_is_zero() {
    let kernel = GaussianKernel::new(0.1).unwrap();
    assert_eq!(kernel.profile(1000.0, 0.0), 0.0);
    assert_eq!(kernel.normalizer(1.0) * kernel.profile(-1000.0, 0.0), 0.0);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test non-positive or non-finite spreads are rejected.
#[test]
fn test_kernel_invalid_spread() {
    for spread in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = GaussianKernel::new(spread).unwrap_err();
        assert!(matches!(
            err,
            KdeError::InvalidParameter {
                parameter: "spread",
                ..
            }
        ));
    }
}

/// Test a product of spread and bandwidth that underflows is rejected.
#[test]
fn test_kernel_normalizer_underflow() {
    let kernel = GaussianKernel::<f64>::new(1e-200).unwrap();

    assert!(kernel.normalizer(1e-200).is_infinite());
    assert!(matches!(
        kernel.scaled_normalizer(1e-200).unwrap_err(),
        KdeError::InvalidParameter {
            parameter: "bandwidth",
            ..
        }
    ));
    assert!(kernel.scaled_normalizer(1.0).unwrap().is_finite());
}

//! Tests for reducing kernel curves into a density estimate.
//!
//! ## Test Organization
//!
//! 1. **Linearity** - Identical curves and scaling
//! 2. **Error Ordering** - Empty input, grid mismatch, parameters
//! 3. **End-to-end** - Two-sample study on the default grid
//! 4. **Accumulator** - Incremental summation (dev only)

use approx::assert_relative_eq;

use kde::prelude::*;

const SPREAD: f64 = 2.25;
const BANDWIDTH: f64 = 0.7;
const MIN: f64 = -10.0;
const MAX: f64 = 25.1;
const STEP: f64 = 0.0351;

fn study_curve(center: f64) -> KernelCurve<f64> {
    evaluate(center, SPREAD, BANDWIDTH, MIN, MAX, STEP).unwrap()
}

// ============================================================================
// Linearity Tests
// ============================================================================

/// Test N identical curves with sample_count N give the curve over the bandwidth.
#[test]
fn test_identical_curves() {
    let curve = study_curve(1.0);
    for n in [1usize, 3, 8] {
        let curves = vec![curve.clone(); n];
        let density = aggregate(&curves, n, BANDWIDTH).unwrap();

        assert_eq!(density.grid(), curve.grid());
        for (d, v) in density.values().iter().zip(curve.values()) {
            assert_relative_eq!(*d, v / BANDWIDTH, max_relative = 1e-12);
        }
    }
}

/// Test a single curve is divided by the bandwidth once more.
#[test]
fn test_single_curve_divided_again() {
    let curve = study_curve(0.0);
    let density = aggregate(std::slice::from_ref(&curve), 1, BANDWIDTH).unwrap();

    assert_eq!(density.values()[285], curve.values()[285] / BANDWIDTH);
}

/// Test sample order does not change the grid or the shape.
#[test]
fn test_aggregate_two_orders() {
    let forward = aggregate(&[study_curve(0.0), study_curve(2.0)], 2, BANDWIDTH).unwrap();
    let backward = aggregate(&[study_curve(2.0), study_curve(0.0)], 2, BANDWIDTH).unwrap();

    assert_eq!(forward.grid(), backward.grid());
    for (a, b) in forward.values().iter().zip(backward.values()) {
        assert_relative_eq!(*a, *b, max_relative = 1e-15);
    }
}

// ============================================================================
// Error Ordering Tests
// ============================================================================

/// Test empty input is reported before any parameter problem.
#[test]
fn test_empty_input() {
    let err = aggregate::<f64>(&[], 0, 1.0).unwrap_err();
    assert_eq!(err, KdeError::EmptyInput);
}

/// Test curves on different grids are rejected.
#[test]
fn test_inconsistent_grid() {
    let a = study_curve(0.0);
    let b = evaluate(0.0, SPREAD, BANDWIDTH, MIN, MAX, 0.05).unwrap();
    let c = study_curve(1.0);

    let err = aggregate(&[a, c, b], 3, BANDWIDTH).unwrap_err();
    assert_eq!(
        err,
        KdeError::InconsistentGrid {
            curve: 2,
            expected_points: 1000,
            got_points: 702,
        }
    );
}

/// Test a grid with the same length but different bounds is also rejected.
#[test]
fn test_inconsistent_grid_same_length() {
    let a = evaluate(0.0, 1.0, 1.0, 0.0, 1.0, 0.25).unwrap();
    let b = evaluate(0.0, 1.0, 1.0, 1.0, 2.0, 0.25).unwrap();
    assert_eq!(a.len(), b.len());

    let err = aggregate(&[a, b], 2, 1.0).unwrap_err();
    assert!(matches!(err, KdeError::InconsistentGrid { curve: 1, .. }));
}

/// Test a zero sample count is rejected.
#[test]
fn test_zero_sample_count() {
    let err = aggregate(&[study_curve(0.0)], 0, BANDWIDTH).unwrap_err();
    assert!(matches!(
        err,
        KdeError::InvalidParameter {
            parameter: "sample_count",
            ..
        }
    ));
}

/// Test a non-positive bandwidth is rejected.
#[test]
fn test_invalid_bandwidth() {
    for h in [0.0, -0.7, f64::NAN] {
        let err = aggregate(&[study_curve(0.0)], 1, h).unwrap_err();
        assert!(matches!(
            err,
            KdeError::InvalidParameter {
                parameter: "bandwidth",
                ..
            }
        ));
    }
}

// ============================================================================
// End-to-end Tests
// ============================================================================

/// Test the two-sample study: equal per-sample peaks, one merged mode, vanishing tails.
///
/// Two kernels with spread 2.25 are 2 apart, far less than twice the spread,
/// so their sum has a single maximum between them.
#[test]
fn test_two_sample_study() {
    let curves = [study_curve(0.0), study_curve(2.0)];

    let (p0, h0) = curves[0].argmax().unwrap();
    let (p1, h1) = curves[1].argmax().unwrap();
    assert_relative_eq!(curves[0].x()[p0], 0.0, epsilon = STEP);
    assert_relative_eq!(curves[1].x()[p1], 2.0, epsilon = STEP);
    assert_relative_eq!(h0, h1, max_relative = 1e-5);

    let density = aggregate(&curves, 2, BANDWIDTH).unwrap();
    let (peak, peak_value) = density.argmax().unwrap();
    assert_relative_eq!(density.x()[peak], 1.0, epsilon = 2.0 * STEP);

    let values = density.values();
    assert!(values[0] / peak_value < 1e-4);
    assert!(values[values.len() - 1] < 1e-12);
}

/// Test narrower kernels separate into two modes near the samples.
#[test]
fn test_two_sample_narrow_kernels() {
    let curves = [
        evaluate(0.0, 0.5, BANDWIDTH, MIN, MAX, STEP).unwrap(),
        evaluate(2.0, 0.5, BANDWIDTH, MIN, MAX, STEP).unwrap(),
    ];
    let density = aggregate(&curves, 2, BANDWIDTH).unwrap();
    let v = density.values();

    // Local maxima at the grid points nearest 0 and 2, a dip in between
    for i in [285, 342] {
        assert!(v[i] > v[i - 1] && v[i] > v[i + 1], "index {i}");
    }
    assert!(v[313] < v[285]);
}

// ============================================================================
// Accumulator Tests
// ============================================================================

#[cfg(feature = "dev")]
mod accumulator {
    use super::*;
    use kde::internals::algorithms::aggregation::{
        DensityAccumulator, check_curves, normalization_divisor,
    };

    /// Test incremental summation matches the one-shot reduction exactly.
    #[test]
    fn test_accumulator_matches_aggregate() {
        let curves = [study_curve(0.0), study_curve(2.0), study_curve(5.5)];

        let mut acc = DensityAccumulator::new(*curves[0].grid());
        for c in &curves {
            acc.add(c).unwrap();
        }
        assert_eq!(acc.curves(), 3);

        let incremental = acc.finish(3, BANDWIDTH).unwrap();
        assert_eq!(incremental, aggregate(&curves, 3, BANDWIDTH).unwrap());
    }

    /// Test an empty accumulator reports empty input.
    #[test]
    fn test_accumulator_empty() {
        let grid = Grid::new(0.0, 1.0, 0.1).unwrap();
        let acc = DensityAccumulator::new(grid);
        assert_eq!(acc.finish(1, 1.0).unwrap_err(), KdeError::EmptyInput);
    }

    /// Test the accumulator rejects a curve from another grid.
    #[test]
    fn test_accumulator_rejects_other_grid() {
        let grid = Grid::new(0.0, 1.0, 0.1).unwrap();
        let mut acc = DensityAccumulator::new(grid);
        let err = acc.add(&study_curve(0.0)).unwrap_err();

        assert!(matches!(err, KdeError::InconsistentGrid { curve: 0, .. }));
        assert_eq!(acc.curves(), 0);
    }

    /// Test the helpers used by alternative reductions.
    #[test]
    fn test_helpers() {
        let curves = [study_curve(0.0)];
        assert_eq!(check_curves(&curves).unwrap(), *curves[0].grid());
        assert_relative_eq!(normalization_divisor(4, 0.5).unwrap(), 2.0);
        assert!(normalization_divisor(0, 0.5).is_err());
    }
}

#![cfg(feature = "cpu")]
//! Tests for the parallel passes used through the executor hooks.

use fastKde::parallel::{curve_pass_parallel, density_pass_parallel};
use fastKde::prelude::*;

fn evaluator() -> KernelEvaluator<f64> {
    let grid = Grid::new(-10.0, 25.1, 0.0351).unwrap();
    KernelEvaluator::new(2.25, 0.7, grid).unwrap()
}

/// Test the parallel curve pass keeps sample order and values.
#[test]
fn test_curve_pass_matches_sequential() {
    let samples: Vec<f64> = (0..64).map(|i| i as f64 * 0.37 - 8.0).collect();
    let ev = evaluator();

    let par = curve_pass_parallel(&samples, &ev).unwrap();
    let seq = ev.evaluate_all(&samples).unwrap();

    assert_eq!(par, seq);
}

/// Test the parallel curve pass reports a bad centre.
#[test]
fn test_curve_pass_error() {
    let err = curve_pass_parallel(&[0.0, f64::INFINITY], &evaluator()).unwrap_err();
    assert!(matches!(
        err,
        KdeError::InvalidParameter {
            parameter: "center",
            ..
        }
    ));
}

/// Test the parallel density pass is bit-identical to `aggregate`.
#[test]
fn test_density_pass_matches_aggregate() {
    let samples: Vec<f64> = (0..40).map(|i| (i as f64 * 1.3).sin() * 6.0).collect();
    let curves = evaluator().evaluate_all(&samples).unwrap();

    let par = density_pass_parallel(&curves, curves.len(), 0.7).unwrap();
    let seq = aggregate(&curves, curves.len(), 0.7).unwrap();

    assert_eq!(par, seq);
}

/// Test the parallel density pass raises the same errors as `aggregate`.
#[test]
fn test_density_pass_errors() {
    let ev = evaluator();
    let a = ev.evaluate(0.0).unwrap();
    let b = evaluate(0.0, 2.25, 0.7, -10.0, 25.1, 0.05).unwrap();

    assert_eq!(
        density_pass_parallel::<f64>(&[], 1, 0.7).unwrap_err(),
        aggregate::<f64>(&[], 1, 0.7).unwrap_err()
    );

    let curves = [a.clone(), b];
    assert_eq!(
        density_pass_parallel(&curves, 2, 0.7).unwrap_err(),
        aggregate(&curves, 2, 0.7).unwrap_err()
    );

    assert_eq!(
        density_pass_parallel(std::slice::from_ref(&a), 0, 0.7).unwrap_err(),
        aggregate(std::slice::from_ref(&a), 0, 0.7).unwrap_err()
    );
}

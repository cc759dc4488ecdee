//! Tests for the fluent builder and the batch adapter.
//!
//! ## Test Organization
//!
//! 1. **Defaults** - Unset options
//! 2. **Builder Validation** - Duplicates and invalid parameters
//! 3. **Fitting** - End-to-end estimation and plot data
//! 4. **Diagnostics** - Opt-in summary statistics
//! 5. **Display** - Result table

use approx::assert_relative_eq;

use kde::prelude::*;

const STUDY_DATA: [f64; 14] = [
    0.1, 0.3, 0.5, -1.5, 0.5, -1.1, 8.0, 2.4, 5.4, 10.4, 10.5, 2.5, 2.1, 3.1,
];

// ============================================================================
// Default Tests
// ============================================================================

/// Test the defaults give 1000 points over [-10, 25.1).
#[test]
fn test_default_model() {
    let model = Kde::<f64>::new().adapter(Batch).build().unwrap();
    let grid = model.grid();

    assert_eq!(grid.len(), Grid::<f64>::DEFAULT_RESOLUTION);
    assert_eq!(grid.min(), -10.0);
    assert_eq!(grid.max(), 25.1);
    assert_relative_eq!(grid.step(), 0.0351, epsilon = 1e-12);
    assert_eq!(model.config().spread, 2.25);
    assert_eq!(model.config().bandwidth, 0.7);
}

/// Test the defaults match the explicit study step.
#[test]
fn test_default_matches_explicit_step() {
    let default = Kde::new().adapter(Batch).build().unwrap();
    let explicit = Kde::new()
        .spread(2.25)
        .bandwidth(0.7)
        .grid_range(-10.0, 25.1)
        .grid_step(0.0351)
        .adapter(Batch)
        .build()
        .unwrap();

    let a = default.fit(&[0.0, 2.0]).unwrap();
    let b = explicit.fit(&[0.0, 2.0]).unwrap();
    assert_eq!(a.density.len(), b.density.len());
    for (x, y) in a.density.values().iter().zip(b.density.values()) {
        assert_relative_eq!(*x, *y, max_relative = 1e-9);
    }
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test setting a parameter twice is reported at build time.
#[test]
fn test_duplicate_spread() {
    let err = Kde::new()
        .spread(1.0)
        .spread(2.0)
        .adapter(Batch)
        .build()
        .unwrap_err();
    assert_eq!(err, KdeError::DuplicateParameter { parameter: "spread" });
}

/// Test resolution and step are the same option.
#[test]
fn test_duplicate_grid_spacing() {
    let err = Kde::<f64>::new()
        .grid_resolution(200)
        .grid_step(0.1)
        .adapter(Batch)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        KdeError::DuplicateParameter {
            parameter: "grid_spacing"
        }
    );
}

/// Test duplicates are reported before invalid values.
#[test]
fn test_duplicate_before_invalid() {
    let err = Kde::new()
        .bandwidth(-1.0)
        .bandwidth(-2.0)
        .adapter(Batch)
        .build()
        .unwrap_err();
    assert!(matches!(err, KdeError::DuplicateParameter { .. }));
}

/// Test invalid parameters are rejected by build, naming the parameter.
#[test]
fn test_build_invalid_parameters() {
    let cases = [
        (Kde::new().spread(0.0), "spread"),
        (Kde::new().bandwidth(f64::NAN), "bandwidth"),
        (Kde::new().grid_range(3.0, 3.0), "grid_min"),
        (Kde::new().grid_step(-0.1), "grid_step"),
        (Kde::new().grid_resolution(0), "grid_resolution"),
    ];

    for (builder, name) in cases {
        match builder.adapter(Batch).build() {
            Err(KdeError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, name),
            other => panic!("expected InvalidParameter for {name}, got {other:?}"),
        }
    }
}

/// Test spread is validated before bandwidth.
#[test]
fn test_build_validation_order() {
    let err = Kde::new()
        .spread(-1.0)
        .bandwidth(-1.0)
        .adapter(Batch)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        KdeError::InvalidParameter {
            parameter: "spread",
            ..
        }
    ));
}

// ============================================================================
// Fitting Tests
// ============================================================================

/// Test a two-sample fit end to end.
#[test]
fn test_fit_two_samples() {
    let model = Kde::new().adapter(Batch).build().unwrap();
    let result = model.fit(&[0.0, 2.0]).unwrap();

    assert_eq!(result.sample_count(), 2);
    assert_eq!(result.curves.len(), 2);
    assert_eq!(result.spread, 2.25);
    assert_eq!(result.bandwidth, 0.7);
    assert!(result.curves.iter().all(|c| c.grid() == &result.grid));
    assert_eq!(result.density.grid(), &result.grid);
    assert!(!result.has_diagnostics());

    let direct = aggregate(&result.curves, 2, 0.7).unwrap();
    assert_eq!(result.density, direct);
}

/// Test plot data accessors.
#[test]
fn test_plot_data() {
    let model = Kde::new()
        .grid_range(-5.0, 5.0)
        .grid_step(0.5)
        .adapter(Batch)
        .build()
        .unwrap();
    let result = model.fit(&[0.0, 2.0]).unwrap();

    assert_eq!(result.scatter_points(), vec![(0.0, 0.0), (2.0, 0.0)]);

    let curve = result.curve_points(1).unwrap();
    assert_eq!(curve.len(), 20);
    assert_eq!(curve[0].0, -5.0);
    let (peak_x, _) = curve
        .iter()
        .copied()
        .fold((0.0, f64::MIN), |best, p| if p.1 > best.1 { p } else { best });
    assert_eq!(peak_x, 2.0);
    assert!(result.curve_points(2).is_none());

    let density = result.density_points();
    assert_eq!(density.len(), 20);
    assert_eq!(density[10].0, 0.0);
    assert_eq!(density[10].1, result.density.values()[10]);
}

/// Test a model can be reused for different sample sets.
#[test]
fn test_model_reuse() {
    let model = Kde::new().adapter(Batch).build().unwrap();
    let first = model.fit(&[0.0]).unwrap();
    let second = model.fit(&[5.0, 6.0, 7.0]).unwrap();

    assert_eq!(first.curves.len(), 1);
    assert_eq!(second.curves.len(), 3);
    assert_eq!(first.grid, second.grid);
}

/// Test fit rejects empty and non-finite samples.
#[test]
fn test_fit_invalid_samples() {
    let model = Kde::new().adapter(Batch).build().unwrap();

    assert_eq!(model.fit(&[]).unwrap_err(), KdeError::EmptyInput);
    assert!(matches!(
        model.fit(&[1.0, f64::NEG_INFINITY]).unwrap_err(),
        KdeError::InvalidParameter {
            parameter: "samples",
            ..
        }
    ));
}

/// Test single precision end to end.
#[test]
fn test_fit_f32() {
    let model = Kde::<f32>::new().grid_resolution(100).adapter(Batch).build().unwrap();
    let result = model.fit(&[0.0f32, 2.0]).unwrap();

    assert_eq!(result.density.len(), 100);
    assert!(result.density.values().iter().all(|v| v.is_finite() && *v >= 0.0));
}

// ============================================================================
// Diagnostics Tests
// ============================================================================

/// Test diagnostics are computed only when requested.
#[test]
fn test_diagnostics_opt_in() {
    let model = Kde::new().return_diagnostics().adapter(Batch).build().unwrap();
    let result = model.fit(&STUDY_DATA).unwrap();
    let diag = result.diagnostics.as_ref().unwrap();

    assert_eq!(diag.mode_count(), 2);
    assert_relative_eq!(diag.peak_x, 1.0565, epsilon = 1e-3);
    assert_relative_eq!(diag.total_mass, 1.0 / 0.49, max_relative = 1e-3);
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the result table.
#[test]
fn test_display() {
    let model = Kde::new().return_diagnostics().adapter(Batch).build().unwrap();
    let text = model.fit(&[0.0, 2.0]).unwrap().to_string();

    assert!(text.starts_with("Summary:"));
    assert!(text.contains("Samples:     2"));
    assert!(text.contains("KDE Diagnostics:"));
    assert!(text.contains("Density Estimate:"));
    assert!(text.contains("..."));
}

/// Test short estimates are printed in full.
#[test]
fn test_display_short() {
    let model = Kde::new()
        .grid_range(0.0, 1.0)
        .grid_resolution(5)
        .adapter(Batch)
        .build()
        .unwrap();
    let text = model.fit(&[0.5]).unwrap().to_string();

    assert!(!text.contains("..."));
    assert!(!text.contains("KDE Diagnostics:"));
}

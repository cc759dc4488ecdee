//! fastKde Density Study
//!
//! This example estimates the density of a small fixed data set:
//! - Parallel fit with the default parameters
//! - Per-sample kernel curves and the combined estimate
//! - Bandwidth sweep showing how peak and mass respond
//! - Spread sweep showing when the clusters separate

use fastKde::prelude::*;
use ndarray::Array1;
use std::time::Instant;

const STUDY_DATA: [f64; 14] = [
    0.1, 0.3, 0.5, -1.5, 0.5, -1.1, 8.0, 2.4, 5.4, 10.4, 10.5, 2.5, 2.1, 3.1,
];

fn main() -> Result<(), KdeError> {
    println!("{}", "=".repeat(80));
    println!("fastKde Density Study");
    println!("{}", "=".repeat(80));
    println!();

    example_1_study_fit()?;
    example_2_kernel_curves()?;
    example_3_bandwidth_sweep()?;
    example_4_spread_sweep()?;

    Ok(())
}

/// Example 1: Study Fit
/// Fits the study data with the default parameters
fn example_1_study_fit() -> Result<(), KdeError> {
    println!("Example 1: Study Fit");
    println!("{}", "-".repeat(80));

    let samples = Array1::from_vec(STUDY_DATA.to_vec());

    let start = Instant::now();
    let model = Kde::new()
        .spread(2.25)
        .bandwidth(0.7)
        .grid_range(-10.0, 25.1)
        .grid_resolution(1000)
        .return_diagnostics()
        .adapter(Batch)
        .build()?;

    let result = model.fit(&samples)?;
    let duration = start.elapsed();

    println!("Estimated {} samples in {:?}", result.sample_count(), duration);
    println!("Execution mode: {}", if model.is_parallel() { "Parallel" } else { "Sequential" });
    println!("{}", result);

    println!();
    Ok(())
}

/// Example 2: Kernel Curves
/// Shows where each sample's kernel peaks and how high
fn example_2_kernel_curves() -> Result<(), KdeError> {
    println!("Example 2: Kernel Curves");
    println!("{}", "-".repeat(80));

    let result = Kde::<f64>::new().adapter(Batch).build()?.fit(&STUDY_DATA)?;

    println!("{:>8} {:>10} {:>12}", "Sample", "Peak x", "Peak value");
    for (sample, curve) in result.samples.iter().zip(&result.curves) {
        if let Some((i, value)) = curve.argmax() {
            let x = result.grid.point(i).unwrap_or(f64::NAN);
            println!("{:>8.2} {:>10.4} {:>12.6}", sample, x, value);
        }
    }

    println!();
    Ok(())
}

/// Example 3: Bandwidth Sweep
/// The estimate is divided by the bandwidth twice, so its mass tracks 1/h^2
fn example_3_bandwidth_sweep() -> Result<(), KdeError> {
    println!("Example 3: Bandwidth Sweep");
    println!("{}", "-".repeat(80));

    println!(
        "{:>10} {:>10} {:>12} {:>12} {:>10}",
        "Bandwidth", "Peak x", "Peak", "Mass", "1/h^2"
    );
    for bandwidth in [0.35, 0.5, 0.7, 1.0, 1.4] {
        let result = Kde::new()
            .bandwidth(bandwidth)
            .return_diagnostics()
            .adapter(Batch)
            .build()?
            .fit(&STUDY_DATA)?;

        if let Some(diag) = result.diagnostics {
            println!(
                "{:>10.2} {:>10.4} {:>12.6} {:>12.6} {:>10.4}",
                bandwidth,
                diag.peak_x,
                diag.peak_density,
                diag.total_mass,
                1.0 / (bandwidth * bandwidth)
            );
        }
    }

    println!();
    Ok(())
}

/// Example 4: Spread Sweep
/// Narrow kernels resolve more modes
fn example_4_spread_sweep() -> Result<(), KdeError> {
    println!("Example 4: Spread Sweep");
    println!("{}", "-".repeat(80));

    println!("{:>8} {:>6}  {}", "Spread", "Modes", "Locations");
    for spread in [0.5, 1.0, 1.5, 2.25, 3.0] {
        let result = Kde::new()
            .spread(spread)
            .return_diagnostics()
            .adapter(Batch)
            .build()?
            .fit(&STUDY_DATA)?;

        if let Some(diag) = result.diagnostics {
            let locations: Vec<String> = diag.modes.iter().map(|m| format!("{m:.2}")).collect();
            println!(
                "{:>8.2} {:>6}  {}",
                spread,
                diag.mode_count(),
                locations.join(", ")
            );
        }
    }

    println!();
    Ok(())
}

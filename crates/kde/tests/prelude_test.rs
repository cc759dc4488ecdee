//! Check that the prelude is enough for the common workflow.

use kde::prelude::*;

#[test]
fn test_prelude_workflow() -> Result<(), KdeError> {
    let grid = Grid::from_spacing(-10.0, 25.1, GridSpacing::default())?;
    let evaluator = KernelEvaluator::new(2.25, 0.7, grid)?;
    let curves: Vec<KernelCurve<f64>> = evaluator.evaluate_all(&[0.0, 2.0])?;
    let density: DensityEstimate<f64> = aggregate(&curves, curves.len(), 0.7)?;

    let result: KdeResult<f64> = Kde::new().adapter(Batch).build()?.fit(&[0.0, 2.0])?;
    assert_eq!(result.density, density);

    let diag: Diagnostics<f64> = Kde::new()
        .return_diagnostics()
        .adapter(Batch)
        .build()?
        .fit(&[0.0, 2.0])?
        .diagnostics
        .ok_or(KdeError::EmptyInput)?;
    assert_eq!(diag.mode_count(), 1);

    Ok(())
}

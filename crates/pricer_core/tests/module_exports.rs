//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that solver types are accessible via absolute path.
#[test]
fn test_solvers_module_exports() {
    use pricer_core::math::solvers::solve_tridiagonal;
    use pricer_core::math::solvers::SolverConfig;
    use pricer_core::math::solvers::TridiagonalSolver;

    let config: SolverConfig<f64> = SolverConfig::default();
    let mut solver = TridiagonalSolver::new(config);
    let mut out = vec![0.0; 2];
    solver
        .solve_into(&[0.0, 0.0], &[1.0, 1.0], &[0.0, 0.0], &[2.0, 3.0], &mut out)
        .unwrap();
    assert_eq!(out, vec![2.0, 3.0]);

    let x = solve_tridiagonal(&[0.0], &[2.0], &[0.0], &[1.0]).unwrap();
    assert_eq!(x, vec![0.5]);
}

/// Test that error types are accessible via absolute path and convert.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::PricingError;
    use pricer_core::types::SolverError;

    let err: PricingError = SolverError::ZeroPivot {
        index: 0,
        pivot: 0.0,
    }
    .into();
    assert!(matches!(err, PricingError::NumericalInstability(_)));
}

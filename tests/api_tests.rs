use approx::{assert_abs_diff_eq, assert_relative_eq};

use polyfit_rs::prelude::*;
use polyfit_rs::{DEFAULT_DEGREE, abs_value, power};

// ============================================================================
// Builder Tests
// ============================================================================

#[test]
fn test_builder_defaults() {
    let model = PolyFit::<f64>::new().build().unwrap();
    assert_eq!(model.degree(), DEFAULT_DEGREE);
    assert_eq!(*model.thresholds(), Thresholds::default());
    assert!(model.thresholds().pivot_check);
}

#[test]
fn test_builder_custom_configuration() {
    let model = PolyFit::<f64>::new()
        .degree(4)
        .absolute_threshold(1e-9)
        .relative_threshold(0.0)
        .pivot_check(false)
        .build()
        .unwrap();

    assert_eq!(model.degree(), 4);
    assert_eq!(model.thresholds().absolute, 1e-9);
    assert_eq!(model.thresholds().relative, 0.0);
    assert!(!model.thresholds().pivot_check);
}

#[test]
fn test_builder_rejects_duplicate_parameter() {
    let err = PolyFit::<f32>::new().degree(2).degree(3).build().unwrap_err();
    assert_eq!(err, PolyfitError::DuplicateParameter { parameter: "degree" });

    let err = PolyFit::<f32>::new()
        .absolute_threshold(1e-3)
        .absolute_threshold(1e-4)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        PolyfitError::DuplicateParameter {
            parameter: "absolute_threshold"
        }
    );
}

#[test]
fn test_builder_rejects_invalid_degree() {
    let err = PolyFit::<f64>::new().degree(MAX_DEGREE + 1).build().unwrap_err();
    assert!(matches!(err, PolyfitError::InvalidDegree { .. }));
}

#[test]
fn test_builder_rejects_invalid_thresholds() {
    let err = PolyFit::<f64>::new()
        .absolute_threshold(-1.0)
        .build()
        .unwrap_err();
    assert_eq!(err, PolyfitError::InvalidThreshold(-1.0));

    let err = PolyFit::<f64>::new()
        .relative_threshold(f64::NAN)
        .build()
        .unwrap_err();
    assert!(matches!(err, PolyfitError::InvalidThreshold(_)));
    assert_eq!(err.as_str(), "Invalid input parameters");
}

// ============================================================================
// Fit Tests
// ============================================================================

#[test]
fn test_fit_cubic() {
    let x = [0.0f32, 2.0, 4.0, 5.0];
    let y = [0.0f32, 8.0, 64.0, 125.0];

    let result = PolyFit::new().degree(3).build().unwrap().fit(&x, &y).unwrap();

    assert_eq!(result.polynomial.degree(), 3);
    assert_eq!(result.x, x);
    assert_eq!(result.fitted.len(), 4);
    assert!(result.diagnostics.is_none());
    assert_relative_eq!(result.evaluate(20.0).unwrap(), 8000.0, max_relative = 1e-3);
}

#[test]
fn test_model_is_reusable() {
    let model = PolyFit::<f64>::new().degree(1).build().unwrap();

    let a = model.fit(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
    let b = model.fit(&[0.0, 1.0, 2.0], &[5.0, 3.0, 1.0]).unwrap();

    assert_abs_diff_eq!(a.polynomial.coefficients()[1], 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(b.polynomial.coefficients()[1], -2.0, epsilon = 1e-12);
}

#[test]
fn test_fit_propagates_errors() {
    let model = PolyFit::<f64>::new().degree(3).build().unwrap();
    assert_eq!(
        model.fit(&[1.0, 2.0], &[1.0, 2.0]).unwrap_err(),
        PolyfitError::InsufficientPoints { got: 2, min: 4 }
    );
    assert!(matches!(
        model.fit(&[1.0; 6], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
        Err(PolyfitError::SingularMatrix { .. })
    ));
}

/// Fitted values honor the model's thresholds, not the defaults.
#[test]
fn test_fitted_values_use_model_thresholds() {
    let x = [0.0f64, 1.0, 2.0, 3.0];
    let y = [0.5f64, 1.5, 2.5, 3.5];

    let snapped = PolyFit::new()
        .degree(1)
        .absolute_threshold(1.0)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();
    assert_eq!(snapped.fitted[0], 0.0);
    assert_eq!(snapped.evaluate(0.0).unwrap(), 0.0);

    let raw = PolyFit::new().degree(1).build().unwrap().fit(&x, &y).unwrap();
    assert_abs_diff_eq!(raw.fitted[0], 0.5, epsilon = 1e-12);
}

// ============================================================================
// Diagnostics Tests
// ============================================================================

#[test]
fn test_diagnostics_for_exact_fit() {
    let x: Vec<f64> = (0..8).map(|v| v as f64).collect();
    let y: Vec<f64> = x.iter().map(|v| 3.0 + 2.0 * v).collect();

    let result = PolyFit::new()
        .degree(1)
        .return_diagnostics()
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let diag = result.diagnostics.expect("diagnostics requested");
    assert_eq!(diag.residuals.len(), 8);
    assert_abs_diff_eq!(diag.rmse, 0.0, epsilon = 1e-10);
    assert_abs_diff_eq!(diag.max_abs_residual, 0.0, epsilon = 1e-10);
    assert_relative_eq!(diag.r_squared, 1.0, epsilon = 1e-10);
}

#[test]
fn test_diagnostics_for_noisy_fit() {
    let x = [0.0f64, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0f64, 1.2, 1.8, 3.3, 3.9];

    let poly = {
        let mut p = Polynomial::new(1).unwrap();
        fit_least_squares(&x, &y, 1, &mut p).unwrap();
        p
    };
    let diag = Diagnostics::compute(&poly, &x, &y, &Thresholds::default()).unwrap();

    assert!(diag.rmse > 0.0);
    assert!(diag.mae <= diag.rmse);
    assert!(diag.max_abs_residual >= diag.mae);
    assert!(diag.r_squared > 0.9 && diag.r_squared < 1.0);

    // Least-squares residuals with an intercept sum to zero
    let sum: f64 = diag.residuals.iter().sum();
    assert_abs_diff_eq!(sum, 0.0, epsilon = 1e-10);
}

#[test]
fn test_diagnostics_rejects_bad_input() {
    let poly = Polynomial::from_coefficients(vec![1.0f64, 1.0]).unwrap();
    assert!(matches!(
        Diagnostics::compute(&poly, &[1.0, 2.0], &[1.0], &Thresholds::default()),
        Err(PolyfitError::MismatchedInputs { .. })
    ));
    assert_eq!(
        Diagnostics::<f64>::from_fitted(&[], &[]).unwrap_err(),
        PolyfitError::EmptyInput
    );
}

/// Recomputed diagnostics agree with the fit result when given the model's thresholds.
#[test]
fn test_diagnostics_use_supplied_thresholds() {
    let x = [0.0f64, 1.0, 2.0, 3.0];
    let y = [0.5f64, 1.5, 2.5, 3.5];

    let model = PolyFit::new()
        .degree(1)
        .absolute_threshold(1.0)
        .return_diagnostics()
        .build()
        .unwrap();
    let result = model.fit(&x, &y).unwrap();

    let same = Diagnostics::compute(&result.polynomial, &x, &y, model.thresholds()).unwrap();
    assert_eq!(Some(&same), result.diagnostics.as_ref());
    assert_abs_diff_eq!(same.residuals[0], 0.5, epsilon = 1e-12);

    let raw = Diagnostics::compute(&result.polynomial, &x, &y, &Thresholds::disabled()).unwrap();
    assert_abs_diff_eq!(raw.residuals[0], 0.0, epsilon = 1e-12);
}

#[test]
fn test_constant_target_r_squared() {
    let diag = Diagnostics::from_fitted(&[2.0f64, 2.0, 2.0], &[2.0, 2.0, 2.0]).unwrap();
    assert_eq!(diag.r_squared, 1.0);
    let diag = Diagnostics::from_fitted(&[2.0f64, 2.0, 2.0], &[2.0, 2.5, 2.0]).unwrap();
    assert_eq!(diag.r_squared, 0.0);
}

// ============================================================================
// Display Tests
// ============================================================================

#[test]
fn test_result_display() {
    let result = PolyFit::new()
        .degree(1)
        .return_diagnostics()
        .build()
        .unwrap()
        .fit(&[0.0f64, 1.0, 2.0], &[1.0, 3.0, 5.0])
        .unwrap();

    let text = result.to_string();
    assert!(text.contains("Summary:"));
    assert!(text.contains("Data points: 3"));
    assert!(text.contains("Degree: 1"));
    assert!(text.contains("Fitted Data:"));
    assert!(text.contains("Diagnostics:"));
}

// ============================================================================
// Root Re-export Tests
// ============================================================================

#[test]
fn test_scalar_helpers_are_exported() {
    assert_eq!(power(3.0f64, 4), 81.0);
    assert_eq!(abs_value(-2.5f32), 2.5);
}

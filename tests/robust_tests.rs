//! Classical vs HC1 robust standard error tests.

mod common;

use approx::assert_relative_eq;
use common::{column, EDUC, WAGE};
use econ_regress::core::StandardErrorType;
use econ_regress::inference::hc1_correction;
use econ_regress::solvers::{estimate, FittedModel};

#[test]
fn test_constant_residual_magnitude_se_coincide() {
    let (y, x) = common::constant_magnitude_residual_data(0.5);

    let classical = estimate(&y, &x, StandardErrorType::Classical).unwrap();
    let robust = estimate(&y, &x, StandardErrorType::Robust).unwrap();

    // Coefficients do not depend on the SE mode.
    assert_relative_eq!(classical.coefficients()[0], 2.0, epsilon = 1e-10);
    assert_relative_eq!(classical.coefficients()[1], 3.0, epsilon = 1e-10);
    for j in 0..2 {
        assert_eq!(classical.coefficients()[j], robust.coefficients()[j]);
        assert_relative_eq!(
            classical.std_errors()[j],
            robust.std_errors()[j],
            max_relative = 1e-8
        );
    }

    for r in robust.result().residuals.iter() {
        assert_relative_eq!(r.abs(), 0.5, epsilon = 1e-10);
    }
}

#[test]
fn test_heteroskedastic_residuals_se_differ() {
    let (y, x) = common::generate_heteroskedastic_data(6, 17);

    let classical = estimate(&y, &x, StandardErrorType::Classical).unwrap();
    let robust = estimate(&y, &x, StandardErrorType::Robust).unwrap();

    assert_eq!(classical.k(), 2);
    assert_eq!(classical.n(), 6);
    assert!((classical.std_errors()[1] - robust.std_errors()[1]).abs() > 1e-6);
}

#[test]
fn test_wage_on_education_robust() {
    let x = column(&EDUC);
    let fitted = estimate(&WAGE, &x, StandardErrorType::Robust).unwrap();
    let result = fitted.result();

    // Slope = Sxy / Sxx = 45.7 / 47.5
    assert_relative_eq!(result.coefficients[1], 45.7 / 47.5, epsilon = 1e-9);
    assert!(result.coefficients[1] > 0.8 && result.coefficients[1] < 1.3);
    assert!(result.r_squared > 0.9);
    assert_eq!(result.se_type, StandardErrorType::Robust);
    assert!(result.std_errors.iter().all(|se| se.is_finite() && *se > 0.0));

    let classical = estimate(&WAGE, &x, StandardErrorType::Classical).unwrap();
    assert!((classical.std_errors()[1] - fitted.std_errors()[1]).abs() > 1e-6);
}

#[test]
fn test_robust_vcov_formula() {
    // Recompute HC1 for a single covariate by hand.
    let x = column(&EDUC);
    let fitted = estimate(&WAGE, &x, StandardErrorType::Robust).unwrap();
    let result = fitted.result();

    let n = EDUC.len() as f64;
    let s1: f64 = EDUC.iter().sum();
    let s2: f64 = EDUC.iter().map(|v| v * v).sum();
    let det = n * s2 - s1 * s1;
    let inv = [[s2 / det, -s1 / det], [-s1 / det, n / det]];

    let mut meat = [[0.0; 2]; 2];
    for (i, &xi) in EDUC.iter().enumerate() {
        let e2 = result.residuals[i].powi(2);
        let row = [1.0, xi];
        for r in 0..2 {
            for c in 0..2 {
                meat[r][c] += e2 * row[r] * row[c];
            }
        }
    }

    let mut v = [[0.0; 2]; 2];
    for r in 0..2 {
        for c in 0..2 {
            for a in 0..2 {
                for b in 0..2 {
                    v[r][c] += inv[r][a] * meat[a][b] * inv[b][c];
                }
            }
            v[r][c] *= hc1_correction(6, 2);
        }
    }

    for j in 0..2 {
        assert_relative_eq!(result.vcov[(j, j)], v[j][j], max_relative = 1e-8);
        assert_relative_eq!(result.std_errors[j], v[j][j].sqrt(), max_relative = 1e-8);
    }
    assert_relative_eq!(result.vcov[(0, 1)], result.vcov[(1, 0)], max_relative = 1e-10);
}

#[test]
fn test_classical_vcov_formula() {
    let x = column(&EDUC);
    let fitted = estimate(&WAGE, &x, StandardErrorType::Classical).unwrap();
    let result = fitted.result();

    // Var(slope) = σ̂² / Sxx
    let sxx = 47.5;
    assert_relative_eq!(
        result.std_errors[1],
        (result.sigma_squared / sxx).sqrt(),
        max_relative = 1e-9
    );
}

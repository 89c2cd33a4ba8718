//! Heteroskedasticity-consistent (HC1) covariance.
//!
//! Sandwich estimator `V = (X'X)⁻¹ X' Ω X (X'X)⁻¹` with
//! `Ω = diag(e_i²) · n/(n-k)`.
//!
//! # References
//!
//! - White, H. (1980). "A Heteroskedasticity-Consistent Covariance Matrix Estimator
//!   and a Direct Test for Heteroskedasticity." *Econometrica*, 48(4), 817–838.
//! - MacKinnon, J.G. & White, H. (1985). "Some Heteroskedasticity-Consistent
//!   Covariance Matrix Estimators with Improved Finite Sample Properties."
//!   *Journal of Econometrics*, 29(3), 305–325.

use crate::utils::sandwich;
use faer::{Col, Mat};

/// HC1 small-sample correction factor `n / (n - k)`.
///
/// Returns NaN when `n <= k`.
pub fn hc1_correction(n: usize, k: usize) -> f64 {
    if n <= k {
        f64::NAN
    } else {
        n as f64 / (n - k) as f64
    }
}

/// Compute the HC1 variance-covariance matrix.
///
/// # Arguments
/// * `x` - Design matrix (n × k), including the constant column
/// * `xtx_inv` - (X'X)⁻¹
/// * `residuals` - OLS residuals
pub fn hc1_vcov(x: &Mat<f64>, xtx_inv: &Mat<f64>, residuals: &Col<f64>) -> Mat<f64> {
    let n = x.nrows();
    let k = x.ncols();
    let correction = hc1_correction(n, k);

    let omega = Col::from_fn(n, |i| correction * residuals[i] * residuals[i]);
    sandwich(xtx_inv, x, &omega)
}

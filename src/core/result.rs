//! Regression result structures.

use super::options::StandardErrorType;
use faer::{Col, Mat};

/// Complete result from an OLS fit.
///
/// Every per-coefficient vector follows the design-matrix column order:
/// intercept first, then covariates in input order.
#[derive(Debug, Clone)]
pub struct OlsResult {
    // ========== Core Results ==========
    /// Estimated coefficients, intercept first.
    pub coefficients: Col<f64>,

    /// Standard errors of the coefficients.
    pub std_errors: Col<f64>,

    /// Coefficient variance-covariance matrix (k × k).
    pub vcov: Mat<f64>,

    /// Residuals (y - fitted_values).
    pub residuals: Col<f64>,

    /// Fitted values.
    pub fitted_values: Col<f64>,

    /// Number of observations (n).
    pub n_observations: usize,

    /// Number of parameters including the intercept (k).
    pub n_parameters: usize,

    /// Variance estimator used for `vcov` and `std_errors`.
    pub se_type: StandardErrorType,

    // ========== Fit Statistics ==========
    /// Residual sum of squares.
    pub rss: f64,

    /// Total sum of squares around the outcome mean.
    pub tss: f64,

    /// Coefficient of determination, `1 - RSS/TSS`. Not clamped.
    ///
    /// When TSS is at round-off level (a constant outcome) R² is 1.0 for an
    /// exact fit and NaN otherwise.
    pub r_squared: f64,

    /// Adjusted R².
    pub adj_r_squared: f64,

    /// Residual variance estimate `RSS / (n - k)`.
    pub sigma_squared: f64,

    // ========== Inference Statistics ==========
    /// t-statistics (β / SE).
    pub t_statistics: Col<f64>,

    /// Two-sided p-values from Student's t with `n - k` df.
    pub p_values: Col<f64>,

    /// Lower bounds of Wald confidence intervals.
    pub conf_interval_lower: Col<f64>,

    /// Upper bounds of Wald confidence intervals.
    pub conf_interval_upper: Col<f64>,

    /// Confidence level used for intervals.
    pub confidence_level: f64,
}

impl OlsResult {
    /// Residual degrees of freedom (n - k).
    pub fn residual_df(&self) -> usize {
        self.n_observations.saturating_sub(self.n_parameters)
    }

    /// Model degrees of freedom (k - 1).
    pub fn model_df(&self) -> usize {
        self.n_parameters.saturating_sub(1)
    }

    /// Intercept estimate.
    pub fn intercept(&self) -> f64 {
        self.coefficients[0]
    }

    /// Slope estimates, covariates only.
    pub fn slopes(&self) -> Vec<f64> {
        (1..self.n_parameters).map(|j| self.coefficients[j]).collect()
    }

    /// Explained sum of squares (ESS = TSS - RSS).
    pub fn ess(&self) -> f64 {
        self.tss - self.rss
    }

    /// Root mean squared error of the residuals, `sqrt(σ̂²)`.
    pub fn sigma(&self) -> f64 {
        self.sigma_squared.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> OlsResult {
        let k = 3;
        let n = 10;
        OlsResult {
            coefficients: Col::from_fn(k, |i| (i + 1) as f64),
            std_errors: Col::from_fn(k, |_| 0.5),
            vcov: Mat::from_fn(k, k, |i, j| if i == j { 0.25 } else { 0.0 }),
            residuals: Col::zeros(n),
            fitted_values: Col::zeros(n),
            n_observations: n,
            n_parameters: k,
            se_type: StandardErrorType::Classical,
            rss: 2.0,
            tss: 10.0,
            r_squared: 0.8,
            adj_r_squared: 1.0 - 0.2 * 9.0 / 7.0,
            sigma_squared: 2.0 / 7.0,
            t_statistics: Col::zeros(k),
            p_values: Col::zeros(k),
            conf_interval_lower: Col::zeros(k),
            conf_interval_upper: Col::zeros(k),
            confidence_level: 0.95,
        }
    }

    #[test]
    fn test_degrees_of_freedom() {
        let result = sample_result();
        assert_eq!(result.residual_df(), 7);
        assert_eq!(result.model_df(), 2);
    }

    #[test]
    fn test_intercept_and_slopes() {
        let result = sample_result();
        assert_eq!(result.intercept(), 1.0);
        assert_eq!(result.slopes(), vec![2.0, 3.0]);
    }

    #[test]
    fn test_ess() {
        let result = sample_result();
        assert!((result.ess() - 8.0).abs() < 1e-12);
    }
}

//! Coefficient inference calculations.

use faer::{Col, Mat};
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

/// Computes inference statistics for regression coefficients.
pub struct CoefficientInference;

impl CoefficientInference {
    /// Classical variance-covariance matrix.
    ///
    /// V = σ̂² (X'X)⁻¹ with σ̂² = RSS / (n - k)
    pub fn classical_vcov(xtx_inv: &Mat<f64>, sigma_squared: f64) -> Mat<f64> {
        let k = xtx_inv.nrows();
        Mat::from_fn(k, k, |i, j| sigma_squared * xtx_inv[(i, j)])
    }

    /// Standard errors from the diagonal of a variance-covariance matrix.
    ///
    /// A negative diagonal entry (round-off) yields NaN.
    pub fn standard_errors(vcov: &Mat<f64>) -> Col<f64> {
        Col::from_fn(vcov.nrows(), |j| {
            let var = vcov[(j, j)];
            if var >= 0.0 {
                var.sqrt()
            } else {
                f64::NAN
            }
        })
    }

    /// Compute t-statistics for coefficients.
    ///
    /// t_j = β_j / SE(β_j)
    pub fn t_statistics(coefficients: &Col<f64>, std_errors: &Col<f64>) -> Col<f64> {
        Col::from_fn(coefficients.nrows(), |j| {
            if std_errors[j].is_nan() || std_errors[j] == 0.0 {
                f64::NAN
            } else {
                coefficients[j] / std_errors[j]
            }
        })
    }

    /// Compute p-values from t-statistics.
    ///
    /// p_j = 2 * P(|T| > |t_j|) where T ~ t(df)
    pub fn p_values(t_statistics: &Col<f64>, df: f64) -> Col<f64> {
        let n = t_statistics.nrows();
        let t_dist = if df > 0.0 {
            StudentsT::new(0.0, 1.0, df).ok()
        } else {
            None
        };

        Col::from_fn(n, |j| match &t_dist {
            Some(d) if !t_statistics[j].is_nan() => {
                2.0 * (1.0 - d.cdf(t_statistics[j].abs()))
            }
            _ => f64::NAN,
        })
    }

    /// Two-sided standard-normal critical value for a confidence level.
    ///
    /// 0.95 gives ≈ 1.96.
    pub fn normal_critical_value(confidence_level: f64) -> f64 {
        let alpha = 1.0 - confidence_level;
        Normal::new(0.0, 1.0).map_or(f64::NAN, |d| d.inverse_cdf(1.0 - alpha / 2.0))
    }

    /// Compute Wald confidence intervals for coefficients.
    ///
    /// CI_j = β_j ± z_{α/2} * SE(β_j)
    pub fn wald_intervals(
        coefficients: &Col<f64>,
        std_errors: &Col<f64>,
        confidence_level: f64,
    ) -> (Col<f64>, Col<f64>) {
        let n = coefficients.nrows();
        let z = Self::normal_critical_value(confidence_level);

        let lower = Col::from_fn(n, |j| coefficients[j] - z * std_errors[j]);
        let upper = Col::from_fn(n, |j| coefficients[j] + z * std_errors[j]);

        (lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_t_statistics() {
        let coefficients = Col::from_fn(3, |i| (i + 1) as f64);
        let std_errors = Col::from_fn(3, |_| 0.5);

        let t_stats = CoefficientInference::t_statistics(&coefficients, &std_errors);

        assert!((t_stats[0] - 2.0).abs() < 1e-10);
        assert!((t_stats[1] - 4.0).abs() < 1e-10);
        assert!((t_stats[2] - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_t_statistics_zero_se() {
        let coefficients = Col::from_fn(1, |_| 1.0);
        let std_errors = Col::zeros(1);
        let t_stats = CoefficientInference::t_statistics(&coefficients, &std_errors);
        assert!(t_stats[0].is_nan());
    }

    #[test]
    fn test_p_values_bounds() {
        let t_stats = Col::from_fn(3, |i| (i + 1) as f64);
        let p_vals = CoefficientInference::p_values(&t_stats, 10.0);

        for p in p_vals.iter() {
            assert!(*p >= 0.0 && *p <= 1.0);
        }
        assert!(p_vals[0] > p_vals[1]);
        assert!(p_vals[1] > p_vals[2]);
    }

    #[test]
    fn test_p_values_no_df() {
        let t_stats = Col::from_fn(2, |_| 2.0);
        let p_vals = CoefficientInference::p_values(&t_stats, 0.0);
        assert!(p_vals.iter().all(|p| p.is_nan()));
    }

    #[test]
    fn test_normal_critical_value() {
        let z = CoefficientInference::normal_critical_value(0.95);
        assert!((z - 1.959964).abs() < 1e-5);
    }

    #[test]
    fn test_wald_intervals() {
        let coefficients = Col::from_fn(2, |i| i as f64);
        let std_errors = Col::from_fn(2, |_| 1.0);
        let (lower, upper) =
            CoefficientInference::wald_intervals(&coefficients, &std_errors, 0.95);

        assert!((upper[0] - 1.96).abs() < 1e-3);
        assert!((lower[0] + 1.96).abs() < 1e-3);
        assert!((upper[1] - lower[1] - 2.0 * 1.959964).abs() < 1e-5);
    }

    #[test]
    fn test_classical_vcov_scales_inverse() {
        let xtx_inv = Mat::from_fn(2, 2, |i, j| if i == j { 2.0 } else { 0.5 });
        let vcov = CoefficientInference::classical_vcov(&xtx_inv, 3.0);
        assert!((vcov[(0, 0)] - 6.0).abs() < 1e-12);
        assert!((vcov[(0, 1)] - 1.5).abs() < 1e-12);

        let se = CoefficientInference::standard_errors(&vcov);
        assert!((se[1] - 6.0_f64.sqrt()).abs() < 1e-12);
    }
}

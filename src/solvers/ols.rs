//! Ordinary Least Squares estimator.

use crate::core::{
    CoefficientTable, EstimatorOptions, EstimatorOptionsBuilder, InversionStrategy, OlsResult,
    StandardErrorType, INTERCEPT_TERM,
};
use crate::inference::{hc1_vcov, CoefficientInference};
use crate::solvers::traits::{EstimationError, Estimator, FittedModel};
use crate::utils::{
    center_covariates, cross_product, design_matrix, equilibrate, invert_closed_form,
    invert_partial_piv_lu, uncenter_coefficients, uncenter_inverse, unscale_inverse,
};
use faer::{Col, Mat};

/// Ordinary Least Squares estimator with classical or HC1 standard errors.
///
/// The design matrix always carries a constant column, so coefficients are
/// reported intercept first, then covariates in input column order.
///
/// # Example
///
/// ```rust
/// use econ_regress::solvers::{Estimator, FittedModel, OlsEstimator};
/// use econ_regress::core::StandardErrorType;
///
/// let wage = [10.2, 11.0, 12.5, 14.0, 15.5, 18.2];
/// let educ: Vec<Vec<f64>> = [10.0, 11.0, 12.0, 14.0, 16.0, 18.0]
///     .iter()
///     .map(|&e| vec![e])
///     .collect();
///
/// let fitted = OlsEstimator::builder()
///     .se_type(StandardErrorType::Robust)
///     .build()
///     .fit(&wage, &educ)
///     .unwrap();
///
/// assert!(fitted.r_squared() > 0.9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OlsEstimator {
    options: EstimatorOptions,
}

impl OlsEstimator {
    /// Create a new estimator with the given options.
    pub fn new(options: EstimatorOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the estimator.
    pub fn builder() -> OlsEstimatorBuilder {
        OlsEstimatorBuilder::default()
    }

    /// Get the options used by this estimator.
    pub fn options(&self) -> &EstimatorOptions {
        &self.options
    }

    /// Validate inputs in the documented order and return `(n, k)`.
    fn validate(
        &self,
        outcomes: &[f64],
        covariate_rows: &[Vec<f64>],
    ) -> Result<(usize, usize), EstimationError> {
        let n_covariates = covariate_rows.first().map_or(0, Vec::len);
        if n_covariates == 0 {
            return Err(EstimationError::InsufficientSpecification);
        }

        if let Some((row, r)) = covariate_rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != n_covariates)
        {
            return Err(EstimationError::RaggedCovariates {
                row,
                expected: n_covariates,
                got: r.len(),
            });
        }

        if outcomes.len() != covariate_rows.len() {
            return Err(EstimationError::DimensionMismatch {
                outcomes: outcomes.len(),
                rows: covariate_rows.len(),
            });
        }

        let all_finite = outcomes.iter().all(|v| v.is_finite())
            && covariate_rows.iter().flatten().all(|v| v.is_finite());
        if !all_finite {
            return Err(EstimationError::NonFiniteInput);
        }

        let n = outcomes.len();
        let k = n_covariates + 1;
        if n <= k {
            log::warn!("rejecting design with n = {n} observations and k = {k} parameters");
            return Err(EstimationError::SingularDesign);
        }

        if self.options.inversion == InversionStrategy::ClosedForm && !(2..=3).contains(&k) {
            return Err(EstimationError::UnsupportedDimension { k });
        }

        Ok((n, k))
    }

    /// Invert the cross-product of a centered design with the configured strategy.
    ///
    /// The matrix is scaled to unit diagonal first so the singularity
    /// threshold does not depend on covariate units or offsets.
    fn invert_cross_product(&self, ztz: &Mat<f64>) -> Result<Mat<f64>, EstimationError> {
        let tol = self.options.singular_tolerance;
        let (scaled, scale) = match equilibrate(ztz) {
            Some(parts) => parts,
            None => {
                log::warn!("design has a covariate with zero variance");
                return Err(EstimationError::SingularDesign);
            }
        };

        let scaled_inv = match self.options.inversion {
            InversionStrategy::PartialPivLu => invert_partial_piv_lu(&scaled, tol),
            InversionStrategy::ClosedForm => invert_closed_form(&scaled, tol),
        };

        match scaled_inv {
            Some(inv) => Ok(unscale_inverse(&inv, &scale)),
            None => {
                log::warn!(
                    "cross-product matrix ({0}x{0}) is singular under tolerance {tol:e}",
                    ztz.nrows()
                );
                Err(EstimationError::SingularDesign)
            }
        }
    }
}

impl Estimator for OlsEstimator {
    type Fitted = OlsFit;

    /// Fit OLS with an intercept.
    ///
    /// The covariate count comes from the first row, so an empty
    /// `covariate_rows` is `InsufficientSpecification`. Use
    /// `ObservationSet::estimate` to get `SingularDesign` for an empty set
    /// with covariates selected.
    fn fit(
        &self,
        outcomes: &[f64],
        covariate_rows: &[Vec<f64>],
    ) -> Result<Self::Fitted, EstimationError> {
        self.options.validate()?;
        let (n, k) = self.validate(outcomes, covariate_rows)?;

        let x = design_matrix(covariate_rows);
        let y = Col::from_fn(n, |i| outcomes[i]);

        // Centering separates the constant from the covariates, so large
        // covariate offsets do not look collinear with the intercept.
        let (z, means) = center_covariates(&x);
        let ztz_inv = self.invert_cross_product(&cross_product(&z))?;
        let xtx_inv = uncenter_inverse(&ztz_inv, &means);

        // β = T⁻¹ (Z'Z)⁻¹ Z'y, which equals (X'X)⁻¹ X'y
        let centered_coefficients = &ztz_inv * &(z.transpose() * &y);
        let coefficients = uncenter_coefficients(&centered_coefficients, &means);

        let fitted_values = &x * &coefficients;
        let residuals = &y - &fitted_values;

        let y_mean = outcomes.iter().sum::<f64>() / n as f64;
        let tss: f64 = outcomes.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
        let rss: f64 = residuals.iter().map(|&r| r.powi(2)).sum();

        // TSS of an outcome that is constant up to round-off.
        let sum_sq: f64 = outcomes.iter().map(|&yi| yi * yi).sum();
        let tss_floor = (100.0 * n as f64 * f64::EPSILON).powi(2) * sum_sq;

        // Never clamped: a fit worse than the mean reports negative R².
        let r_squared = if tss > tss_floor {
            1.0 - rss / tss
        } else if rss <= tss_floor {
            1.0
        } else {
            f64::NAN
        };

        let df_resid = (n - k) as f64;
        let adj_r_squared = 1.0 - (1.0 - r_squared) * (n - 1) as f64 / df_resid;
        let sigma_squared = rss / df_resid;

        let vcov = match self.options.se_type {
            StandardErrorType::Classical => {
                CoefficientInference::classical_vcov(&xtx_inv, sigma_squared)
            }
            StandardErrorType::Robust => hc1_vcov(&x, &xtx_inv, &residuals),
        };

        let std_errors = CoefficientInference::standard_errors(&vcov);
        let t_statistics = CoefficientInference::t_statistics(&coefficients, &std_errors);
        let p_values = CoefficientInference::p_values(&t_statistics, df_resid);
        let (conf_interval_lower, conf_interval_upper) = CoefficientInference::wald_intervals(
            &coefficients,
            &std_errors,
            self.options.confidence_level,
        );

        log::debug!(
            "OLS fit: n = {n}, k = {k}, se = {}, R² = {r_squared:.6}",
            self.options.se_type
        );

        let result = OlsResult {
            coefficients,
            std_errors,
            vcov,
            residuals,
            fitted_values,
            n_observations: n,
            n_parameters: k,
            se_type: self.options.se_type,
            rss,
            tss,
            r_squared,
            adj_r_squared,
            sigma_squared,
            t_statistics,
            p_values,
            conf_interval_lower,
            conf_interval_upper,
            confidence_level: self.options.confidence_level,
        };

        Ok(OlsFit::new(result))
    }
}

/// Estimate OLS coefficients with default options and the given SE mode.
///
/// Shorthand for `OlsEstimator::builder().se_type(se_type).build().fit(..)`.
pub fn estimate(
    outcomes: &[f64],
    covariate_rows: &[Vec<f64>],
    se_type: StandardErrorType,
) -> Result<OlsFit, EstimationError> {
    OlsEstimator::builder()
        .se_type(se_type)
        .build()
        .fit(outcomes, covariate_rows)
}

/// A fitted OLS model.
#[derive(Debug, Clone)]
pub struct OlsFit {
    result: OlsResult,
    terms: Vec<String>,
}

impl OlsFit {
    fn new(result: OlsResult) -> Self {
        let mut terms = Vec::with_capacity(result.n_parameters);
        terms.push(INTERCEPT_TERM.to_string());
        terms.extend((1..result.n_parameters).map(|j| format!("x{j}")));
        Self { result, terms }
    }

    /// Replace the default `x1, x2, ...` term names.
    ///
    /// `terms` must have one entry per coefficient, intercept included.
    pub fn with_terms(mut self, terms: Vec<String>) -> Result<Self, EstimationError> {
        if terms.len() != self.result.n_parameters {
            return Err(EstimationError::SelectionMismatch {
                expected: self.result.n_parameters,
                got: terms.len(),
            });
        }
        self.terms = terms;
        Ok(self)
    }

    /// Term names, intercept first.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of observations.
    pub fn n(&self) -> usize {
        self.result.n_observations
    }

    /// Number of parameters including the intercept.
    pub fn k(&self) -> usize {
        self.result.n_parameters
    }
}

impl FittedModel for OlsFit {
    fn result(&self) -> &OlsResult {
        &self.result
    }

    fn predict(&self, covariate_rows: &[Vec<f64>]) -> Result<Col<f64>, EstimationError> {
        let expected = self.result.n_parameters - 1;
        if let Some((row, r)) = covariate_rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != expected)
        {
            return Err(EstimationError::RaggedCovariates {
                row,
                expected,
                got: r.len(),
            });
        }

        let beta = &self.result.coefficients;
        Ok(Col::from_fn(covariate_rows.len(), |i| {
            beta[0]
                + covariate_rows[i]
                    .iter()
                    .enumerate()
                    .map(|(j, &v)| beta[j + 1] * v)
                    .sum::<f64>()
        }))
    }

    fn coefficient_table(&self) -> CoefficientTable {
        CoefficientTable::from_result(&self.result, &self.terms)
    }
}

/// Builder for `OlsEstimator`.
#[derive(Debug, Clone, Default)]
pub struct OlsEstimatorBuilder {
    builder: EstimatorOptionsBuilder,
}

impl OlsEstimatorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the standard error formula.
    pub fn se_type(mut self, se_type: StandardErrorType) -> Self {
        self.builder = self.builder.se_type(se_type);
        self
    }

    /// Set the inversion strategy for X'X.
    pub fn inversion(mut self, inversion: InversionStrategy) -> Self {
        self.builder = self.builder.inversion(inversion);
        self
    }

    /// Set the confidence level for Wald intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.builder = self.builder.confidence_level(level);
        self
    }

    /// Set the singularity threshold.
    pub fn singular_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.singular_tolerance(tol);
        self
    }

    /// Build the estimator.
    ///
    /// Options are validated when fitting, so an invalid configuration
    /// surfaces as `EstimationError::InvalidOptions`.
    pub fn build(self) -> OlsEstimator {
        OlsEstimator::new(self.builder.build_unchecked())
    }
}

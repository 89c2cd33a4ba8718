//! Core traits for regression estimators.

use crate::core::{CoefficientTable, OlsResult};
use faer::Col;
use thiserror::Error;

/// Errors that can occur during estimation.
#[derive(Debug, Error, PartialEq)]
pub enum EstimationError {
    #[error("insufficient specification: at least one covariate must be selected")]
    InsufficientSpecification,

    #[error("design matrix is singular: need more observations than parameters and no perfectly collinear covariates")]
    SingularDesign,

    #[error("unsupported dimension: closed-form inversion handles 2 or 3 parameters, got {k}")]
    UnsupportedDimension { k: usize },

    #[error("covariate row {row} has {got} values, expected {expected}")]
    RaggedCovariates {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("dimension mismatch: {outcomes} outcomes but {rows} covariate rows")]
    DimensionMismatch { outcomes: usize, rows: usize },

    #[error("non-finite value in estimation input")]
    NonFiniteInput,

    #[error("selection has {got} flags but the observation set has {expected} covariates")]
    SelectionMismatch { expected: usize, got: usize },

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] crate::core::OptionsError),
}

/// An estimator that can be fit to an outcome vector and covariate rows.
///
/// Fitting returns a fitted model; the estimator itself holds only options
/// and can be reused across calls.
pub trait Estimator {
    /// The type of the fitted model.
    type Fitted: FittedModel;

    /// Fit the model.
    ///
    /// # Arguments
    /// * `outcomes` - Outcome values, length n
    /// * `covariate_rows` - n rows of covariate values (without the constant)
    fn fit(
        &self,
        outcomes: &[f64],
        covariate_rows: &[Vec<f64>],
    ) -> Result<Self::Fitted, EstimationError>;
}

/// A fitted regression model.
pub trait FittedModel {
    /// Access the estimation results.
    fn result(&self) -> &OlsResult;

    /// Predict outcomes for new covariate rows (constant added internally).
    fn predict(&self, covariate_rows: &[Vec<f64>]) -> Result<Col<f64>, EstimationError>;

    /// Coefficient table with term names, estimates and intervals.
    fn coefficient_table(&self) -> CoefficientTable;

    /// Get the coefficients, intercept first (convenience method).
    fn coefficients(&self) -> &Col<f64> {
        &self.result().coefficients
    }

    /// Get the standard errors, intercept first (convenience method).
    fn std_errors(&self) -> &Col<f64> {
        &self.result().std_errors
    }

    /// Get R² (convenience method).
    fn r_squared(&self) -> f64 {
        self.result().r_squared
    }
}

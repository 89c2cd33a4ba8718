//! Regression estimators.

mod traits;
mod ols;

pub use traits::{EstimationError, Estimator, FittedModel};
pub use ols::{estimate, OlsEstimator, OlsEstimatorBuilder, OlsFit};

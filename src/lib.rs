//! Ordinary least squares for teaching-scale econometrics.
//!
//! This library estimates linear models with an intercept and reports
//! coefficients with classical or heteroskedasticity-robust (HC1) standard
//! errors, t-statistics, p-values, Wald confidence intervals and R².
//!
//! # Example
//!
//! ```rust
//! use econ_regress::prelude::*;
//!
//! let data = wage_sample();
//!
//! // wage on educ, robust standard errors
//! let fitted = data
//!     .estimate(&[true, false, false], &OlsEstimator::new(EstimatorOptions::robust()))
//!     .unwrap();
//!
//! let table = fitted.coefficient_table();
//! println!("{table}");
//! assert_eq!(table.terms(), vec!["(Intercept)", "educ"]);
//! ```

pub mod core;
pub mod datasets;
pub mod inference;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        CoefficientRow, CoefficientTable, EstimatorOptions, EstimatorOptionsBuilder,
        InversionStrategy, Observation, ObservationSet, OlsResult, OptionsError,
        StandardErrorType,
    };
    pub use crate::datasets::wage_sample;
    pub use crate::solvers::{
        estimate, EstimationError, Estimator, FittedModel, OlsEstimator, OlsFit,
    };
}

pub use crate::core::{
    CoefficientTable, EstimatorOptions, InversionStrategy, ObservationSet, OlsResult,
    StandardErrorType,
};
pub use crate::solvers::{estimate, EstimationError, Estimator, FittedModel, OlsEstimator, OlsFit};

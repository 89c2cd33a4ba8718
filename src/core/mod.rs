//! Core types for regression analysis.

mod observations;
mod options;
mod result;
mod table;

pub use observations::{Observation, ObservationSet, Selection};
pub use options::{
    EstimatorOptions, EstimatorOptionsBuilder, InversionStrategy, OptionsError, StandardErrorType,
};
pub use result::OlsResult;
pub use table::{CoefficientRow, CoefficientTable, INTERCEPT_TERM};

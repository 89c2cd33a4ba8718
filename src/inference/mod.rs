//! Statistical inference (standard errors, p-values, confidence intervals).

mod coefficient;
mod robust;

pub use coefficient::CoefficientInference;
pub use robust::{hc1_correction, hc1_vcov};

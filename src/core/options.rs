//! Estimator options and configuration.

use std::fmt;

use thiserror::Error;

/// Variance estimator used for coefficient standard errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StandardErrorType {
    /// Homoskedastic errors: `σ̂² (X'X)⁻¹` with `σ̂² = RSS / (n - k)`.
    #[default]
    Classical,
    /// HC1 sandwich: `n/(n-k) · (X'X)⁻¹ X' diag(e²) X (X'X)⁻¹`.
    ///
    /// Consistent under heteroskedasticity of unknown form.
    Robust,
}

impl StandardErrorType {
    /// Short label used in result tables.
    pub fn label(&self) -> &'static str {
        match self {
            StandardErrorType::Classical => "classical",
            StandardErrorType::Robust => "robust (HC1)",
        }
    }
}

impl fmt::Display for StandardErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Strategy for inverting the cross-product matrix X'X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InversionStrategy {
    /// Gaussian elimination with partial pivoting via LU (default, any size).
    #[default]
    PartialPivLu,
    /// Cofactor expansion, limited to 2×2 and 3×3 systems.
    ///
    /// Models with more than two covariates fail with
    /// `EstimationError::UnsupportedDimension`.
    ClosedForm,
}

/// Configuration options for the OLS estimator.
#[derive(Debug, Clone)]
pub struct EstimatorOptions {
    /// Standard error formula (default: classical).
    pub se_type: StandardErrorType,
    /// Inversion strategy for X'X (default: partial-pivot LU).
    pub inversion: InversionStrategy,
    /// Confidence level for Wald intervals (default: 0.95).
    pub confidence_level: f64,
    /// Singularity threshold applied to the unit-diagonal scaled X'X.
    pub singular_tolerance: f64,
}

impl Default for EstimatorOptions {
    fn default() -> Self {
        Self {
            se_type: StandardErrorType::Classical,
            inversion: InversionStrategy::PartialPivLu,
            confidence_level: 0.95,
            singular_tolerance: 1e-10,
        }
    }
}

/// Errors that can occur when validating estimator options.
#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("confidence_level must be in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),
    #[error("singular_tolerance must be positive and below 1, got {0}")]
    InvalidTolerance(f64),
}

impl EstimatorOptions {
    /// Create a new builder for estimator options.
    pub fn builder() -> EstimatorOptionsBuilder {
        EstimatorOptionsBuilder::default()
    }

    /// Default options with classical standard errors.
    pub fn classical() -> Self {
        Self::default()
    }

    /// Default options with HC1 robust standard errors.
    pub fn robust() -> Self {
        Self {
            se_type: StandardErrorType::Robust,
            ..Default::default()
        }
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.confidence_level.is_nan()
            || self.confidence_level <= 0.0
            || self.confidence_level >= 1.0
        {
            return Err(OptionsError::InvalidConfidenceLevel(self.confidence_level));
        }
        if self.singular_tolerance.is_nan()
            || self.singular_tolerance <= 0.0
            || self.singular_tolerance >= 1.0
        {
            return Err(OptionsError::InvalidTolerance(self.singular_tolerance));
        }
        Ok(())
    }
}

/// Builder for `EstimatorOptions`.
#[derive(Debug, Clone, Default)]
pub struct EstimatorOptionsBuilder {
    options: EstimatorOptions,
}

impl EstimatorOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the standard error formula.
    pub fn se_type(mut self, se_type: StandardErrorType) -> Self {
        self.options.se_type = se_type;
        self
    }

    /// Set the inversion strategy.
    pub fn inversion(mut self, inversion: InversionStrategy) -> Self {
        self.options.inversion = inversion;
        self
    }

    /// Set the confidence level for Wald intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.options.confidence_level = level;
        self
    }

    /// Set the singularity threshold.
    pub fn singular_tolerance(mut self, tol: f64) -> Self {
        self.options.singular_tolerance = tol;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<EstimatorOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> EstimatorOptions {
        self.options
    }
}

//! Coefficient table for display.

use std::fmt;

use super::options::StandardErrorType;
use super::result::OlsResult;

/// Name used for the constant term.
pub const INTERCEPT_TERM: &str = "(Intercept)";

/// One row of a coefficient table.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientRow {
    /// Term name (`(Intercept)` or the covariate name).
    pub term: String,
    /// Point estimate.
    pub estimate: f64,
    /// Standard error under the fitted variance estimator.
    pub std_error: f64,
    /// t-statistic.
    pub t_statistic: f64,
    /// Two-sided p-value.
    pub p_value: f64,
    /// Lower bound of the Wald interval.
    pub ci_lower: f64,
    /// Upper bound of the Wald interval.
    pub ci_upper: f64,
}

/// Coefficient table consumed by the results panel.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    /// One row per design-matrix column, intercept first.
    pub rows: Vec<CoefficientRow>,
    /// Variance estimator behind the standard errors.
    pub se_type: StandardErrorType,
    /// Confidence level of the intervals.
    pub confidence_level: f64,
    /// Number of observations.
    pub n_observations: usize,
    /// Number of parameters.
    pub n_parameters: usize,
    /// R² of the fit.
    pub r_squared: f64,
}

impl CoefficientTable {
    /// Assemble a table from a result and its term names.
    ///
    /// Rows follow the coefficients. Missing names fall back to `x{j}` and
    /// extra names are ignored.
    pub fn from_result(result: &OlsResult, terms: &[String]) -> Self {
        let rows = (0..result.n_parameters)
            .map(|j| CoefficientRow {
                term: match terms.get(j) {
                    Some(term) => term.clone(),
                    None if j == 0 => INTERCEPT_TERM.to_string(),
                    None => format!("x{j}"),
                },
                estimate: result.coefficients[j],
                std_error: result.std_errors[j],
                t_statistic: result.t_statistics[j],
                p_value: result.p_values[j],
                ci_lower: result.conf_interval_lower[j],
                ci_upper: result.conf_interval_upper[j],
            })
            .collect();

        Self {
            rows,
            se_type: result.se_type,
            confidence_level: result.confidence_level,
            n_observations: result.n_observations,
            n_parameters: result.n_parameters,
            r_squared: result.r_squared,
        }
    }

    /// Look up a row by term name.
    pub fn row(&self, term: &str) -> Option<&CoefficientRow> {
        self.rows.iter().find(|r| r.term == term)
    }

    /// Term names in table order.
    pub fn terms(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.term.as_str()).collect()
    }
}

impl fmt::Display for CoefficientTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|r| r.term.len())
            .max()
            .unwrap_or(0)
            .max(4);
        let pct = self.confidence_level * 100.0;

        writeln!(
            f,
            "{:<width$}  {:>10}  {:>10}  {:>8}  {:>8}  {:>21}",
            "term",
            "estimate",
            "std.error",
            "t",
            "p",
            format!("{pct:.0}% CI"),
        )?;
        for r in &self.rows {
            writeln!(
                f,
                "{:<width$}  {:>10.4}  {:>10.4}  {:>8.3}  {:>8.4}  [{:>9.4}, {:>9.4}]",
                r.term, r.estimate, r.std_error, r.t_statistic, r.p_value, r.ci_lower, r.ci_upper,
            )?;
        }
        write!(
            f,
            "n = {}, k = {}, R² = {:.4}, SE: {}",
            self.n_observations, self.n_parameters, self.r_squared, self.se_type
        )
    }
}

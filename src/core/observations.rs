//! Named observation sets and covariate selection.

use super::table::INTERCEPT_TERM;
use crate::solvers::{EstimationError, Estimator, OlsEstimator, OlsFit};

/// One observation: an outcome value and its covariate values.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub outcome: f64,
    pub covariates: Vec<f64>,
}

impl Observation {
    pub fn new(outcome: f64, covariates: Vec<f64>) -> Self {
        Self {
            outcome,
            covariates,
        }
    }
}

/// Covariates picked out of an observation set, ready for estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Term names, `(Intercept)` first.
    pub terms: Vec<String>,
    /// Outcome values.
    pub outcomes: Vec<f64>,
    /// Selected covariate values per row.
    pub rows: Vec<Vec<f64>>,
}

/// An immutable, named set of observations.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSet {
    outcome_name: String,
    covariate_names: Vec<String>,
    observations: Vec<Observation>,
}

impl ObservationSet {
    /// Create an observation set.
    ///
    /// Every observation must carry one value per covariate name.
    pub fn new(
        outcome_name: impl Into<String>,
        covariate_names: Vec<String>,
        observations: Vec<Observation>,
    ) -> Result<Self, EstimationError> {
        let expected = covariate_names.len();
        if let Some((row, obs)) = observations
            .iter()
            .enumerate()
            .find(|(_, o)| o.covariates.len() != expected)
        {
            return Err(EstimationError::RaggedCovariates {
                row,
                expected,
                got: obs.covariates.len(),
            });
        }

        Ok(Self {
            outcome_name: outcome_name.into(),
            covariate_names,
            observations,
        })
    }

    /// Build a set whose rows are known to match `covariate_names`.
    pub(crate) fn from_parts(
        outcome_name: &str,
        covariate_names: &[&str],
        observations: Vec<Observation>,
    ) -> Self {
        debug_assert!(observations
            .iter()
            .all(|o| o.covariates.len() == covariate_names.len()));
        Self {
            outcome_name: outcome_name.to_string(),
            covariate_names: covariate_names.iter().map(|s| s.to_string()).collect(),
            observations,
        }
    }

    pub fn outcome_name(&self) -> &str {
        &self.outcome_name
    }

    pub fn covariate_names(&self) -> &[String] {
        &self.covariate_names
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns true if there are no observations.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Outcome column.
    pub fn outcomes(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.outcome).collect()
    }

    /// Values of a named covariate column.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let j = self.covariate_names.iter().position(|n| n == name)?;
        Some(self.observations.iter().map(|o| o.covariates[j]).collect())
    }

    /// Apply per-covariate inclusion flags.
    ///
    /// An all-false selection is returned as-is; the estimator rejects it
    /// with `InsufficientSpecification`.
    pub fn select(&self, include: &[bool]) -> Result<Selection, EstimationError> {
        if include.len() != self.covariate_names.len() {
            return Err(EstimationError::SelectionMismatch {
                expected: self.covariate_names.len(),
                got: include.len(),
            });
        }

        let picked: Vec<usize> = include
            .iter()
            .enumerate()
            .filter_map(|(j, &keep)| keep.then_some(j))
            .collect();

        let mut terms = Vec::with_capacity(picked.len() + 1);
        terms.push(INTERCEPT_TERM.to_string());
        terms.extend(picked.iter().map(|&j| self.covariate_names[j].clone()));

        let rows = self
            .observations
            .iter()
            .map(|o| picked.iter().map(|&j| o.covariates[j]).collect())
            .collect();

        Ok(Selection {
            terms,
            outcomes: self.outcomes(),
            rows,
        })
    }

    /// Fit the selected covariates and attach their term names.
    ///
    /// An empty set with at least one covariate selected is `SingularDesign`
    /// (n = 0 <= k); an empty selection is `InsufficientSpecification`.
    pub fn estimate(
        &self,
        include: &[bool],
        estimator: &OlsEstimator,
    ) -> Result<OlsFit, EstimationError> {
        let selection = self.select(include)?;
        if selection.rows.is_empty() && selection.terms.len() > 1 {
            return Err(EstimationError::SingularDesign);
        }
        let fit = estimator.fit(&selection.outcomes, &selection.rows)?;
        fit.with_terms(selection.terms)
    }
}

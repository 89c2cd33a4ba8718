//! Built-in sample data for the lab pages.

use crate::core::{Observation, ObservationSet};

/// Wage sample used by the regression lab: six workers with hourly wage,
/// years of education, years of experience and a female indicator.
pub fn wage_sample() -> ObservationSet {
    const WAGE: [f64; 6] = [10.2, 11.0, 12.5, 14.0, 15.5, 18.2];
    const EDUC: [f64; 6] = [10.0, 11.0, 12.0, 14.0, 16.0, 18.0];
    const EXPER: [f64; 6] = [8.0, 6.0, 9.0, 4.0, 7.0, 3.0];
    const FEMALE: [f64; 6] = [1.0, 0.0, 1.0, 0.0, 1.0, 0.0];

    let observations = (0..WAGE.len())
        .map(|i| Observation::new(WAGE[i], vec![EDUC[i], EXPER[i], FEMALE[i]]))
        .collect();

    ObservationSet::from_parts("wage", &["educ", "exper", "female"], observations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wage_sample_shape() {
        let data = wage_sample();
        assert_eq!(data.len(), 6);
        assert_eq!(data.outcome_name(), "wage");
        assert_eq!(data.covariate_names(), ["educ", "exper", "female"]);
        assert_eq!(
            data.column("educ"),
            Some(vec![10.0, 11.0, 12.0, 14.0, 16.0, 18.0])
        );
    }
}

//! Common test utilities and data generators.
#![allow(dead_code)]

/// Deterministic pseudo-random draw in [-1, 1).
fn next_rand(state: &mut u64) -> f64 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
    ((*state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
}

/// Generate linear data: y = intercept + x * beta + noise, beta_j = j + 1.
///
/// Returns (outcomes, covariate rows, true slopes).
pub fn generate_linear_data(
    n_samples: usize,
    n_features: usize,
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> (Vec<f64>, Vec<Vec<f64>>, Vec<f64>) {
    let mut rng_state = seed;
    let slopes: Vec<f64> = (0..n_features).map(|j| (j + 1) as f64).collect();

    let mut rows = Vec::with_capacity(n_samples);
    let mut y = Vec::with_capacity(n_samples);

    for _ in 0..n_samples {
        let row: Vec<f64> = (0..n_features).map(|_| next_rand(&mut rng_state)).collect();
        let mut yi = intercept;
        for (xj, bj) in row.iter().zip(&slopes) {
            yi += xj * bj;
        }
        yi += noise_std * next_rand(&mut rng_state);
        y.push(yi);
        rows.push(row);
    }

    (y, rows, slopes)
}

/// Generate data whose noise grows with the covariate: y = 1 + 2x + x·u.
pub fn generate_heteroskedastic_data(n_samples: usize, seed: u64) -> (Vec<f64>, Vec<Vec<f64>>) {
    let mut rng_state = seed;
    let mut rows = Vec::with_capacity(n_samples);
    let mut y = Vec::with_capacity(n_samples);

    for i in 0..n_samples {
        let x = (i + 1) as f64;
        y.push(1.0 + 2.0 * x + x * next_rand(&mut rng_state));
        rows.push(vec![x]);
    }

    (y, rows)
}

/// Six observations whose residuals are exactly ±c around y = 2 + 3x.
///
/// The sign pattern is orthogonal to both the constant and x, so OLS
/// recovers (2, 3) and every residual has magnitude c.
pub fn constant_magnitude_residual_data(c: f64) -> (Vec<f64>, Vec<Vec<f64>>) {
    let x = [1.0, 2.0, 3.0, 5.0, 6.0, 7.0];
    let signs = [1.0, -1.0, -1.0, 1.0, 1.0, -1.0];

    let y = x
        .iter()
        .zip(signs.iter())
        .map(|(&xi, &s)| 2.0 + 3.0 * xi + s * c)
        .collect();
    let rows = x.iter().map(|&xi| vec![xi]).collect();

    (y, rows)
}

/// Wrap a single covariate column as rows.
pub fn column(values: &[f64]) -> Vec<Vec<f64>> {
    values.iter().map(|&v| vec![v]).collect()
}

/// Lab wage outcomes.
pub const WAGE: [f64; 6] = [10.2, 11.0, 12.5, 14.0, 15.5, 18.2];

/// Lab years-of-education covariate.
pub const EDUC: [f64; 6] = [10.0, 11.0, 12.0, 14.0, 16.0, 18.0];

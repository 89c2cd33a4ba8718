//! Matrix utility functions.

use faer::linalg::solvers::Solve;
use faer::{Col, Mat};

/// Build the design matrix `[1 | X]` from covariate rows.
///
/// Rows are assumed rectangular; callers validate widths first.
pub fn design_matrix(rows: &[Vec<f64>]) -> Mat<f64> {
    let n_rows = rows.len();
    let n_covariates = rows.first().map_or(0, Vec::len);

    Mat::from_fn(n_rows, n_covariates + 1, |i, j| {
        if j == 0 {
            1.0
        } else {
            rows[i][j - 1]
        }
    })
}

/// Compute the cross-product matrix X'X.
pub fn cross_product(x: &Mat<f64>) -> Mat<f64> {
    x.transpose() * x
}

/// Center the covariate columns of a design matrix `[1 | X]`.
///
/// Returns `Z = [1 | X - x̄]` and the column means, with a zero mean for the
/// constant column. `X = Z T` where `T = [[1, x̄'], [0, I]]`.
pub fn center_covariates(x: &Mat<f64>) -> (Mat<f64>, Col<f64>) {
    let n_rows = x.nrows();
    let n_cols = x.ncols();

    let mut means = Col::<f64>::zeros(n_cols);
    let mut centered = x.clone();

    for j in 1..n_cols {
        let sum: f64 = (0..n_rows).map(|i| x[(i, j)]).sum();
        means[j] = sum / n_rows as f64;

        for i in 0..n_rows {
            centered[(i, j)] = x[(i, j)] - means[j];
        }
    }

    (centered, means)
}

/// Map `(Z'Z)⁻¹` from [`center_covariates`] back to `(X'X)⁻¹ = T⁻¹ (Z'Z)⁻¹ T⁻ᵀ`.
pub fn uncenter_inverse(centered_inv: &Mat<f64>, means: &Col<f64>) -> Mat<f64> {
    let k = centered_inv.nrows();
    // T⁻¹ = [[1, -x̄'], [0, I]]
    let t_inv = Mat::from_fn(k, k, |i, j| {
        if i == j {
            1.0
        } else if i == 0 {
            -means[j]
        } else {
            0.0
        }
    });
    let t_inv_t = Mat::from_fn(k, k, |i, j| t_inv[(j, i)]);

    let left = &t_inv * centered_inv;
    &left * &t_inv_t
}

/// Map coefficients on the centered design back to `[1 | X]`.
///
/// Slopes are unchanged; the intercept absorbs `-x̄'β`.
pub fn uncenter_coefficients(centered: &Col<f64>, means: &Col<f64>) -> Col<f64> {
    let k = centered.nrows();
    let shift: f64 = (1..k).map(|j| means[j] * centered[j]).sum();

    Col::from_fn(k, |j| if j == 0 { centered[0] - shift } else { centered[j] })
}

/// Compute the HC sandwich `A (X' diag(w) X) A`.
///
/// `bread` is (X'X)⁻¹, `weights` are the per-observation meat weights.
pub fn sandwich(bread: &Mat<f64>, x: &Mat<f64>, weights: &Col<f64>) -> Mat<f64> {
    let weighted = Mat::<f64>::from_fn(x.nrows(), x.ncols(), |i, j| weights[i] * x[(i, j)]);
    let meat = x.transpose() * &weighted;

    let temp = bread * &meat;
    &temp * bread
}

/// Symmetric equilibration of a square matrix to unit diagonal.
///
/// Returns `D A D` with `D = diag(1 / sqrt(a_ii))` along with the scale
/// vector. Returns `None` when a diagonal entry is not strictly positive.
pub fn equilibrate(a: &Mat<f64>) -> Option<(Mat<f64>, Col<f64>)> {
    let k = a.nrows();
    let mut scale = Col::zeros(k);

    for i in 0..k {
        let d = a[(i, i)];
        if d.is_nan() || d <= 0.0 || d.is_infinite() {
            return None;
        }
        scale[i] = 1.0 / d.sqrt();
    }

    let scaled = Mat::from_fn(k, k, |i, j| a[(i, j)] * scale[i] * scale[j]);
    Some((scaled, scale))
}

/// Undo [`equilibrate`] on an inverse: `A⁻¹ = D B⁻¹ D`.
pub fn unscale_inverse(b_inv: &Mat<f64>, scale: &Col<f64>) -> Mat<f64> {
    let k = b_inv.nrows();
    Mat::from_fn(k, k, |i, j| b_inv[(i, j)] * scale[i] * scale[j])
}

/// Invert a 2×2 or 3×3 matrix by cofactor expansion.
///
/// Returns `None` for other sizes, or when `|det| <= tolerance`.
pub fn invert_closed_form(a: &Mat<f64>, tolerance: f64) -> Option<Mat<f64>> {
    match a.nrows() {
        2 => {
            let det = a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)];
            if det.abs() <= tolerance {
                return None;
            }
            let mut inv = Mat::<f64>::zeros(2, 2);
            inv[(0, 0)] = a[(1, 1)] / det;
            inv[(0, 1)] = -a[(0, 1)] / det;
            inv[(1, 0)] = -a[(1, 0)] / det;
            inv[(1, 1)] = a[(0, 0)] / det;
            Some(inv)
        }
        3 => {
            // Cofactors of the first row double as the determinant expansion.
            let c00 = a[(1, 1)] * a[(2, 2)] - a[(1, 2)] * a[(2, 1)];
            let c01 = a[(1, 2)] * a[(2, 0)] - a[(1, 0)] * a[(2, 2)];
            let c02 = a[(1, 0)] * a[(2, 1)] - a[(1, 1)] * a[(2, 0)];
            let det = a[(0, 0)] * c00 + a[(0, 1)] * c01 + a[(0, 2)] * c02;
            if det.abs() <= tolerance {
                return None;
            }

            let c10 = a[(0, 2)] * a[(2, 1)] - a[(0, 1)] * a[(2, 2)];
            let c11 = a[(0, 0)] * a[(2, 2)] - a[(0, 2)] * a[(2, 0)];
            let c12 = a[(0, 1)] * a[(2, 0)] - a[(0, 0)] * a[(2, 1)];
            let c20 = a[(0, 1)] * a[(1, 2)] - a[(0, 2)] * a[(1, 1)];
            let c21 = a[(0, 2)] * a[(1, 0)] - a[(0, 0)] * a[(1, 2)];
            let c22 = a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)];

            // Inverse is the transposed cofactor matrix over det.
            let adj = [[c00, c10, c20], [c01, c11, c21], [c02, c12, c22]];
            Some(Mat::from_fn(3, 3, |i, j| adj[i][j] / det))
        }
        _ => None,
    }
}

/// Invert a square matrix through faer's partial-pivot LU factorization.
///
/// Returns `None` when a diagonal entry of U is at or below `tolerance`.
pub fn invert_partial_piv_lu(a: &Mat<f64>, tolerance: f64) -> Option<Mat<f64>> {
    let k = a.nrows();
    let lu = a.partial_piv_lu();

    let u = lu.U();
    for i in 0..k {
        let pivot = u[(i, i)].abs();
        if pivot.is_nan() || pivot <= tolerance {
            return None;
        }
    }

    let identity = Mat::<f64>::from_fn(k, k, |i, j| if i == j { 1.0 } else { 0.0 });
    Some(lu.solve(identity.as_ref()))
}

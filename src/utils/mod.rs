//! Utility functions for matrix operations.

mod matrix;

pub use matrix::{
    center_covariates, cross_product, design_matrix, equilibrate, invert_closed_form,
    invert_partial_piv_lu, sandwich, uncenter_coefficients, uncenter_inverse, unscale_inverse,
};

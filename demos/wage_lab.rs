//! Regression lab walk-through on the built-in wage sample.
//!
//! Fits wage on each covariate selection with classical and robust
//! standard errors and prints the coefficient tables.
//!
//! Run with: cargo run --example wage_lab

use econ_regress::prelude::*;

fn main() -> Result<(), EstimationError> {
    let data = wage_sample();

    println!("{}", "=".repeat(72));
    println!(
        "{} on {:?} ({} observations)",
        data.outcome_name(),
        data.covariate_names(),
        data.len()
    );
    println!("{}", "=".repeat(72));

    let selections: [[bool; 3]; 4] = [
        [true, false, false],
        [true, true, false],
        [true, false, true],
        [true, true, true],
    ];

    for include in &selections {
        for se_type in [StandardErrorType::Classical, StandardErrorType::Robust] {
            let estimator = OlsEstimator::builder().se_type(se_type).build();
            let fitted = data.estimate(include, &estimator)?;
            println!("\n{}", fitted.coefficient_table());
        }
    }

    // Failed estimations leave the results panel empty rather than aborting.
    println!("\n--- Rejected specifications ---");
    match data.estimate(&[false, false, false], &OlsEstimator::default()) {
        Err(e) => println!("no covariates: {e}"),
        Ok(_) => println!("no covariates: unexpectedly fitted"),
    }

    let closed_form = OlsEstimator::builder()
        .inversion(InversionStrategy::ClosedForm)
        .build();
    match data.estimate(&[true, true, true], &closed_form) {
        Err(e) => println!("closed-form, three covariates: {e}"),
        Ok(_) => println!("closed-form, three covariates: unexpectedly fitted"),
    }

    Ok(())
}

//! # Straight-Line Least Squares
//!
//! Fits `y = a + b·x` to a small noisy dataset, prints the fit statistics,
//! coefficient inference and interval estimates, then shows how degenerate
//! inputs and invalid inputs are reported.
//!
//! Run with: `cargo run --example simple_line`

use faer::Col;
use simple_regression::core::IntervalType;
use simple_regression::diagnostics::{
    compute_leverage, high_leverage_points, residual_outliers, studentized_residuals,
};
use simple_regression::solvers::{fit, fit_pairs, statistics, FittedRegressor, LineRegressor, Regressor};

fn main() {
    println!("=== Straight-Line Least Squares ===\n");

    kernels();
    estimator();
    edge_cases();
}

/// The two core operations on plain slices.
fn kernels() {
    println!("--- fit / statistics ---\n");

    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [2.1, 3.9, 6.2, 7.8, 10.1];

    let line = fit(&x, &y).expect("fit should succeed");
    let stats = statistics(&x, &y).expect("statistics should succeed");

    println!("y = {:.4} + {:.4}·x", line.intercept, line.slope);
    println!("SE(intercept): {:.6}", stats.se_intercept);
    println!("SE(slope):     {:.6}", stats.se_slope);
    println!("RSS: {:.6}  ESS: {:.6}  R²: {:.6}", stats.rss, stats.ess, stats.r_squared);

    let pairs = [(0.0, 1.0), (1.0, 2.9), (2.0, 5.2), (3.0, 7.1)];
    let from_pairs = fit_pairs(&pairs).expect("fit should succeed");
    println!("From pairs: y = {:.4} + {:.4}·x\n", from_pairs.intercept, from_pairs.slope);
}

/// The estimator: inference, intervals and diagnostics.
fn estimator() {
    println!("--- LineRegressor ---\n");

    let n = 30;
    let noise = |i: usize| ((i * 7 % 11) as f64 - 5.0) * 0.2;
    let x = Col::from_fn(n, |i| i as f64 * 0.5);
    let y = Col::from_fn(n, |i| 4.0 + 1.5 * (i as f64 * 0.5) + noise(i));

    let fitted = LineRegressor::builder()
        .confidence_level(0.95)
        .build()
        .expect("valid options")
        .fit(&x, &y)
        .expect("fit should succeed");
    let result = fitted.result();

    println!("R²: {:.4}  adjusted R²: {:.4}", result.r_squared, result.adj_r_squared);
    println!("F: {:.2} (p = {:.3e})", result.f_statistic, result.f_pvalue);

    for (name, summary) in [
        ("intercept", result.intercept_inference),
        ("slope", result.slope_inference),
    ] {
        if let Some(s) = summary {
            println!(
                "{name:>9}: {:.4} ± {:.4}  t = {:.2}  p = {:.3e}  95% CI [{:.4}, {:.4}]",
                s.estimate, s.std_error, s.t_statistic, s.p_value, s.conf_interval.0, s.conf_interval.1
            );
        }
    }

    let x_new = Col::from_fn(3, |i| [0.0, 7.5, 20.0][i]);
    let pred = fitted.predict_with_interval(&x_new, Some(IntervalType::Prediction), 0.95);
    println!("\nPrediction intervals:");
    for i in 0..pred.len() {
        println!(
            "  x = {:5.1}: {:.3} [{:.3}, {:.3}]",
            x_new[i], pred.fit[i], pred.lower[i], pred.upper[i]
        );
    }

    let leverage = compute_leverage(&x);
    println!("\nHigh leverage: {:?}", high_leverage_points(&leverage, None));
    let stud = studentized_residuals(result, &x).expect("x is the training predictor");
    println!("Outliers (|r| > 2): {:?}\n", residual_outliers(&stud, 2.0));
}

/// Degenerate inputs propagate as non-finite values; malformed inputs are errors.
fn edge_cases() {
    println!("--- Edge cases ---\n");

    let line = fit(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).expect("constant x is not an error");
    println!("Constant x: slope = {}", line.slope);

    let stats = statistics(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]).expect("constant y is not an error");
    println!("Constant y: R² = {}", stats.r_squared);

    if let Err(e) = fit(&[1.0, 2.0, 3.0], &[1.0, 2.0]) {
        println!("Error: {e}");
    }
    if let Err(e) = fit(&[1.0], &[1.0]) {
        println!("Error: {e}");
    }
}

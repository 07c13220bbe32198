//! Leverage (hat values) for a fitted line.

use crate::inference::LineSample;
use faer::Col;

/// Compute the leverage of each observation: `h_i = 1/n + (x_i - x̄)² / Sxx`.
///
/// Leverage values lie in `[1/n, 1]` and sum to 2, the number of line
/// parameters. A constant predictor gives NaN everywhere.
pub fn compute_leverage(x: &Col<f64>) -> Col<f64> {
    let values: Vec<f64> = x.iter().copied().collect();
    let sample = LineSample::from_predictor(&values);

    Col::from_fn(values.len(), |i| sample.leverage_at(values[i]))
}

/// Identify observations with high leverage.
///
/// Uses `threshold` if given, otherwise the usual cutoff `2p/n` with `p = 2`.
pub fn high_leverage_points(leverage: &Col<f64>, threshold: Option<f64>) -> Vec<usize> {
    let n = leverage.nrows();
    let cutoff = threshold.unwrap_or(4.0 / n as f64);

    leverage
        .iter()
        .enumerate()
        .filter(|(_, &h)| h > cutoff)
        .map(|(i, _)| i)
        .collect()
}

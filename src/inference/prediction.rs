//! Interval estimates for predictions at new predictor values.

use crate::core::{IntervalType, LineFit, PredictionResult, RegressionResult};
use crate::inference::CoefficientInference;
use crate::utils::center_vector;
use faer::Col;

/// Predictor quantities of a training sample that fix the leverage of any point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSample {
    /// Number of observations.
    pub n: usize,
    /// Mean of the predictor.
    pub x_mean: f64,
    /// Σ (x - x̄)².
    pub x_sum_squares: f64,
}

impl LineSample {
    /// Summarize the predictor values of a training sample.
    pub fn from_predictor(x: &[f64]) -> Self {
        let (centered, x_mean) = center_vector(x);
        Self {
            n: x.len(),
            x_mean,
            x_sum_squares: centered.iter().map(|c| c * c).sum(),
        }
    }

    /// The training sample recorded in a fit result.
    pub fn from_result(result: &RegressionResult) -> Self {
        Self {
            n: result.n_observations,
            x_mean: result.x_mean,
            x_sum_squares: result.x_sum_squares,
        }
    }

    /// Leverage of a point `x₀`: `1/n + (x₀ - x̄)² / Sxx`.
    pub fn leverage_at(&self, x0: f64) -> f64 {
        let dx = x0 - self.x_mean;
        1.0 / self.n as f64 + dx * dx / self.x_sum_squares
    }
}

/// Computes confidence or prediction intervals at new points.
///
/// # Arguments
/// * `x_new` - New predictor values
/// * `line` - The fitted line
/// * `sample` - Training sample of the fit
/// * `mse` - Residual variance `RSS / (n - 2)` of the fit
/// * `confidence_level` - Confidence level, strictly between 0 and 1
/// * `interval_type` - Confidence or Prediction interval
///
/// Intervals are NaN when the level lies outside `(0, 1)`, the fit has no
/// residual degrees of freedom or the residual variance is not positive.
/// Point predictions are always filled in.
pub fn compute_prediction_intervals(
    x_new: &Col<f64>,
    line: &LineFit,
    sample: &LineSample,
    mse: f64,
    confidence_level: f64,
    interval_type: IntervalType,
) -> PredictionResult {
    let predictions = Col::from_fn(x_new.nrows(), |i| line.predict(x_new[i]));

    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return PredictionResult::undefined_intervals(predictions);
    }

    let df = sample.n.saturating_sub(2) as f64;
    if df <= 0.0 || mse.is_nan() || mse <= 0.0 {
        return PredictionResult::undefined_intervals(predictions);
    }

    let t_crit = CoefficientInference::t_critical(df, confidence_level);

    let se = Col::from_fn(x_new.nrows(), |i| {
        let h = sample.leverage_at(x_new[i]);
        let var = match interval_type {
            IntervalType::Confidence => mse * h,
            IntervalType::Prediction => mse * (1.0 + h),
        };
        if var >= 0.0 {
            var.sqrt()
        } else {
            f64::NAN
        }
    });

    let lower = Col::from_fn(x_new.nrows(), |i| predictions[i] - t_crit * se[i]);
    let upper = Col::from_fn(x_new.nrows(), |i| predictions[i] + t_crit * se[i]);

    PredictionResult::with_intervals(predictions, lower, upper, se)
}

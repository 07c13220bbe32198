//! Point predictions and interval estimates at new predictor values.

use faer::Col;

/// Kind of interval reported around a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalType {
    /// Interval for the mean response on the line at `x₀`.
    Confidence,

    /// Interval for a single new observation at `x₀`; wider, since it adds
    /// the residual variance.
    #[default]
    Prediction,
}

/// Predictions at new points with optional interval bounds.
#[derive(Debug, Clone)]
pub struct PredictionResult {
    /// Point predictions `a + b·x₀`.
    pub fit: Col<f64>,
    /// Lower interval bounds.
    pub lower: Col<f64>,
    /// Upper interval bounds.
    pub upper: Col<f64>,
    /// Standard error used for each bound.
    pub se: Col<f64>,
}

impl PredictionResult {
    /// Point predictions only; bounds equal the fit and errors are zero.
    pub fn point_only(fit: Col<f64>) -> Self {
        let n = fit.nrows();
        Self {
            lower: fit.clone(),
            upper: fit.clone(),
            se: Col::zeros(n),
            fit,
        }
    }

    /// Predictions whose bounds cannot be computed; bounds and errors are NaN.
    pub fn undefined_intervals(fit: Col<f64>) -> Self {
        let n = fit.nrows();
        Self {
            fit,
            lower: Col::from_fn(n, |_| f64::NAN),
            upper: Col::from_fn(n, |_| f64::NAN),
            se: Col::from_fn(n, |_| f64::NAN),
        }
    }

    /// Predictions with computed bounds and the standard error behind each.
    pub fn with_intervals(fit: Col<f64>, lower: Col<f64>, upper: Col<f64>, se: Col<f64>) -> Self {
        Self {
            fit,
            lower,
            upper,
            se,
        }
    }

    /// Number of predictions.
    pub fn len(&self) -> usize {
        self.fit.nrows()
    }

    /// Returns true if there are no predictions.
    pub fn is_empty(&self) -> bool {
        self.fit.nrows() == 0
    }
}

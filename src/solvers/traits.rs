//! Core traits for line estimators.

use crate::core::{IntervalType, PredictionResult, RegressionResult};
use faer::Col;
use thiserror::Error;

/// Errors that can occur while fitting a line.
#[derive(Debug, Error, PartialEq)]
pub enum RegressionError {
    #[error("length mismatch: x has {x_len} elements but y has {y_len} elements")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("insufficient samples: need at least {needed}, got {got}")]
    InsufficientSamples { needed: usize, got: usize },

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] crate::core::OptionsError),
}

/// An estimator that can be fit to paired observations.
///
/// Fitting returns a fitted model that can then make predictions.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model to the data.
    ///
    /// # Arguments
    /// * `x` - Predictor values
    /// * `y` - Response values, same length as `x`
    fn fit(&self, x: &Col<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError>;
}

/// A fitted line that can make predictions.
pub trait FittedRegressor {
    /// Evaluate the fitted line at each value of `x`.
    fn predict(&self, x: &Col<f64>) -> Col<f64>;

    /// Access the full fit result.
    fn result(&self) -> &RegressionResult;

    /// Intercept of the fitted line.
    fn intercept(&self) -> f64 {
        self.result().line.intercept
    }

    /// Slope of the fitted line.
    fn slope(&self) -> f64 {
        self.result().line.slope
    }

    /// R² on the training data.
    fn r_squared(&self) -> f64 {
        self.result().r_squared
    }

    /// Calculate R² on new data.
    ///
    /// Follows the same `1 - RSS/TSS` rule as the training statistics, so a
    /// constant `y` gives NaN or `-inf`.
    fn score(&self, x: &Col<f64>, y: &Col<f64>) -> f64 {
        let predictions = self.predict(x);
        let n = y.nrows();

        let y_mean: f64 = y.iter().sum::<f64>() / n as f64;

        let tss: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
        let rss: f64 = y
            .iter()
            .zip(predictions.iter())
            .map(|(&yi, &pi)| (yi - pi).powi(2))
            .sum();

        1.0 - rss / tss
    }

    /// Make predictions with confidence or prediction intervals.
    ///
    /// # Arguments
    /// * `x` - New predictor values
    /// * `interval` - `None` for point predictions only,
    ///   `Some(IntervalType::Confidence)` for the mean response,
    ///   `Some(IntervalType::Prediction)` for new observations
    /// * `level` - Confidence level (e.g., 0.95)
    ///
    /// # Example
    /// ```ignore
    /// let fitted = LineRegressor::builder().build().fit(&x, &y)?;
    /// let pred = fitted.predict_with_interval(&x_new, Some(IntervalType::Prediction), 0.95);
    /// println!("Lower: {:?}, Upper: {:?}", pred.lower, pred.upper);
    /// ```
    fn predict_with_interval(
        &self,
        x: &Col<f64>,
        interval: Option<IntervalType>,
        level: f64,
    ) -> PredictionResult;
}

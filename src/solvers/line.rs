//! Straight-line regression estimator.

use crate::core::{
    FitOptions, FitOptionsBuilder, IntervalType, PredictionResult, RegressionResult,
};
use crate::inference::{compute_prediction_intervals, CoefficientInference, LineSample};
use crate::solvers::least_squares::solve;
use crate::solvers::traits::{FittedRegressor, RegressionError, Regressor};
use crate::utils::unzip_pairs;
use faer::Col;
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// Ordinary least-squares estimator for `y = a + b·x`.
///
/// Wraps [`fit`](crate::solvers::fit) and [`statistics`](crate::solvers::statistics) and adds fitted values, residuals,
/// F-test and coefficient inference.
///
/// # Example
///
/// ```rust,ignore
/// use simple_regression::solvers::{FittedRegressor, LineRegressor, Regressor};
/// use faer::Col;
///
/// let x = Col::from_fn(50, |i| i as f64);
/// let y = Col::from_fn(50, |i| 1.0 + 2.0 * i as f64);
///
/// let fitted = LineRegressor::builder()
///     .confidence_level(0.99)
///     .build()?
///     .fit(&x, &y)?;
///
/// println!("slope = {}", fitted.slope());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineRegressor {
    options: FitOptions,
}

impl LineRegressor {
    /// Create a new regressor with the given options.
    pub fn new(options: FitOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> LineRegressorBuilder {
        LineRegressorBuilder::default()
    }

    /// Get the options used by this regressor.
    pub fn options(&self) -> &FitOptions {
        &self.options
    }

    /// Fit the model to predictor and response slices.
    pub fn fit_slices(&self, x: &[f64], y: &[f64]) -> Result<FittedLine, RegressionError> {
        self.options.validate()?;

        let solution = solve(x, y)?;
        let (line, moments, stats) = (solution.line, solution.moments, solution.statistics);
        let n = x.len();

        let fitted_values = Col::from_fn(n, |i| line.predict(x[i]));
        let residuals = Col::from_fn(n, |i| y[i] - fitted_values[i]);

        let df_resid = n.saturating_sub(2) as f64;
        let mse = CoefficientInference::residual_variance(stats.rss, n);
        let rmse = mse.sqrt();

        let adj_r_squared = if df_resid > 0.0 {
            1.0 - (1.0 - stats.r_squared) * (n - 1) as f64 / df_resid
        } else {
            f64::NAN
        };

        let f_statistic = if df_resid > 0.0 && mse > 0.0 {
            stats.ess / mse
        } else {
            f64::NAN
        };

        let f_pvalue = if f_statistic.is_finite() {
            FisherSnedecor::new(1.0, df_resid).map_or(f64::NAN, |d| 1.0 - d.cdf(f_statistic))
        } else {
            f64::NAN
        };

        let mut result = RegressionResult {
            line,
            statistics: stats,
            residuals,
            fitted_values,
            n_observations: n,
            x_mean: moments.x_mean,
            x_sum_squares: moments.sxx,
            r_squared: stats.r_squared,
            adj_r_squared,
            mse,
            rmse,
            f_statistic,
            f_pvalue,
            intercept_inference: None,
            slope_inference: None,
            confidence_level: self.options.confidence_level,
        };

        if self.options.compute_inference {
            self.compute_inference(&mut result);
        }

        Ok(FittedLine {
            options: self.options.clone(),
            result,
        })
    }

    /// Fit the model to a sequence of `(x, y)` pairs.
    pub fn fit_pairs(&self, samples: &[(f64, f64)]) -> Result<FittedLine, RegressionError> {
        let (x, y) = unzip_pairs(samples);
        self.fit_slices(&x, &y)
    }

    /// Compute t-based inference for intercept and slope.
    fn compute_inference(&self, result: &mut RegressionResult) {
        let df = result.residual_df() as f64;
        let level = self.options.confidence_level;

        let se_slope = CoefficientInference::slope_std_error(result.mse, result.x_sum_squares);
        let se_intercept = CoefficientInference::intercept_std_error(
            result.mse,
            result.n_observations,
            result.x_mean,
            result.x_sum_squares,
        );

        result.slope_inference = Some(CoefficientInference::summarize(
            result.line.slope,
            se_slope,
            df,
            level,
        ));
        result.intercept_inference = Some(CoefficientInference::summarize(
            result.line.intercept,
            se_intercept,
            df,
            level,
        ));
    }
}

impl Regressor for LineRegressor {
    type Fitted = FittedLine;

    fn fit(&self, x: &Col<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        // The kernels take slices; copying keeps this independent of faer's
        // stride and slice accessors, and the columns are read several times anyway.
        let x: Vec<f64> = x.iter().copied().collect();
        let y: Vec<f64> = y.iter().copied().collect();
        self.fit_slices(&x, &y)
    }
}

/// A fitted straight line.
#[derive(Debug, Clone)]
pub struct FittedLine {
    options: FitOptions,
    result: RegressionResult,
}

impl FittedLine {
    /// Get the options used to fit this model.
    pub fn options(&self) -> &FitOptions {
        &self.options
    }
}

impl FittedRegressor for FittedLine {
    fn predict(&self, x: &Col<f64>) -> Col<f64> {
        Col::from_fn(x.nrows(), |i| self.result.line.predict(x[i]))
    }

    fn result(&self) -> &RegressionResult {
        &self.result
    }

    fn predict_with_interval(
        &self,
        x: &Col<f64>,
        interval: Option<IntervalType>,
        level: f64,
    ) -> PredictionResult {
        match interval {
            None => PredictionResult::point_only(self.predict(x)),
            Some(interval_type) => compute_prediction_intervals(
                x,
                &self.result.line,
                &LineSample::from_result(&self.result),
                self.result.mse,
                level,
                interval_type,
            ),
        }
    }
}

/// Builder for `LineRegressor`.
#[derive(Debug, Clone, Default)]
pub struct LineRegressorBuilder {
    builder: FitOptionsBuilder,
}

impl LineRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to compute inference statistics.
    pub fn compute_inference(mut self, compute: bool) -> Self {
        self.builder = self.builder.compute_inference(compute);
        self
    }

    /// Set the confidence level for confidence intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.builder = self.builder.confidence_level(level);
        self
    }

    /// Build the regressor, validating the options.
    pub fn build(self) -> Result<LineRegressor, RegressionError> {
        Ok(LineRegressor::new(self.builder.build()?))
    }
}

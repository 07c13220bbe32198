//! Coefficient inference for a fitted line.

use crate::core::CoefficientSummary;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Computes inference statistics for the intercept and slope of a line.
///
/// All quantities use the residual variance `σ² = RSS / (n - 2)` and a
/// t-distribution with `n - 2` degrees of freedom.
pub struct CoefficientInference;

impl CoefficientInference {
    /// Residual variance `RSS / (n - 2)`; NaN when no degrees of freedom remain.
    pub fn residual_variance(rss: f64, n: usize) -> f64 {
        let df = n.saturating_sub(2);
        if df == 0 {
            f64::NAN
        } else {
            rss / df as f64
        }
    }

    /// SE(b) = sqrt(σ² / Sxx)
    pub fn slope_std_error(mse: f64, x_sum_squares: f64) -> f64 {
        (mse / x_sum_squares).sqrt()
    }

    /// SE(a) = sqrt(σ² · (1/n + x̄² / Sxx))
    pub fn intercept_std_error(mse: f64, n: usize, x_mean: f64, x_sum_squares: f64) -> f64 {
        (mse * (1.0 / n as f64 + x_mean * x_mean / x_sum_squares)).sqrt()
    }

    /// t = estimate / SE
    pub fn t_statistic(estimate: f64, std_error: f64) -> f64 {
        if std_error.is_nan() || std_error == 0.0 {
            f64::NAN
        } else {
            estimate / std_error
        }
    }

    /// Two-tailed p-value: 2 · P(|T| > |t|) where T ~ t(df).
    pub fn p_value(t_statistic: f64, df: f64) -> f64 {
        if df <= 0.0 || !t_statistic.is_finite() {
            return f64::NAN;
        }

        StudentsT::new(0.0, 1.0, df)
            .map_or(f64::NAN, |d| 2.0 * (1.0 - d.cdf(t_statistic.abs())))
    }

    /// Critical value `t_{1-α/2, df}` for the given confidence level.
    ///
    /// NaN unless `0 < confidence_level < 1` and `df > 0`.
    pub fn t_critical(df: f64, confidence_level: f64) -> f64 {
        if df <= 0.0 || !(confidence_level > 0.0 && confidence_level < 1.0) {
            return f64::NAN;
        }

        let alpha = 1.0 - confidence_level;
        StudentsT::new(0.0, 1.0, df).map_or(f64::NAN, |d| d.inverse_cdf(1.0 - alpha / 2.0))
    }

    /// CI = estimate ± t_{α/2, df} · SE
    pub fn confidence_interval(
        estimate: f64,
        std_error: f64,
        df: f64,
        confidence_level: f64,
    ) -> (f64, f64) {
        if std_error.is_nan() {
            return (f64::NAN, f64::NAN);
        }

        let margin = Self::t_critical(df, confidence_level) * std_error;
        (estimate - margin, estimate + margin)
    }

    /// Bundle estimate, standard error, t-statistic, p-value and interval.
    pub fn summarize(
        estimate: f64,
        std_error: f64,
        df: f64,
        confidence_level: f64,
    ) -> CoefficientSummary {
        let t_statistic = Self::t_statistic(estimate, std_error);

        CoefficientSummary {
            estimate,
            std_error,
            t_statistic,
            p_value: Self::p_value(t_statistic, df),
            conf_interval: Self::confidence_interval(estimate, std_error, df, confidence_level),
        }
    }
}

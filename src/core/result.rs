//! Fit result structures.

use faer::Col;

/// Intercept and slope of a fitted line `y = intercept + slope·x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    /// Value of the line at `x = 0`.
    pub intercept: f64,
    /// Change in `y` per unit of `x`.
    pub slope: f64,
}

impl LineFit {
    /// Line `y = intercept + slope·x`.
    pub fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Evaluate the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// True when both coefficients are finite.
    ///
    /// A zero-variance predictor yields a non-finite slope.
    pub fn is_finite(&self) -> bool {
        self.intercept.is_finite() && self.slope.is_finite()
    }
}

/// Residual-based statistics of a line fit.
///
/// The standard errors are `sqrt(RSS·Σx² / D)` and `sqrt(RSS·n / D)` with
/// `D = n·Σx² - (Σx)²`. They are not divided by the residual degrees of
/// freedom; see [`CoefficientSummary`] for the t-based inference values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitStatistics {
    /// Standard error of the intercept.
    pub se_intercept: f64,
    /// Standard error of the slope.
    pub se_slope: f64,
    /// Residual sum of squares.
    pub rss: f64,
    /// Explained sum of squares (`TSS - RSS`).
    pub ess: f64,
    /// Coefficient of determination (`1 - RSS/TSS`).
    pub r_squared: f64,
}

impl FitStatistics {
    /// Total sum of squares, recovered as `RSS + ESS`.
    pub fn tss(&self) -> f64 {
        self.rss + self.ess
    }
}

/// Inference summary for a single coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientSummary {
    /// Point estimate.
    pub estimate: f64,
    /// Standard error based on `σ² = RSS / (n - 2)`.
    pub std_error: f64,
    /// `estimate / std_error`.
    pub t_statistic: f64,
    /// Two-sided p-value for `H0: coefficient = 0`.
    pub p_value: f64,
    /// Confidence interval `(lower, upper)`.
    pub conf_interval: (f64, f64),
}

/// Complete result from fitting a line.
#[derive(Debug, Clone)]
pub struct RegressionResult {
    // ========== Core Results ==========
    /// Fitted intercept and slope.
    pub line: LineFit,

    /// Residual statistics of the fit.
    pub statistics: FitStatistics,

    /// Residuals (y - fitted_values).
    pub residuals: Col<f64>,

    /// Fitted values (predictions on training data).
    pub fitted_values: Col<f64>,

    /// Number of observations.
    pub n_observations: usize,

    /// Mean of the predictor.
    pub x_mean: f64,

    /// Σ (x - x̄)², needed for interval estimates at new points.
    pub x_sum_squares: f64,

    // ========== Fit Statistics ==========
    /// Coefficient of determination (R²).
    pub r_squared: f64,

    /// Adjusted R².
    pub adj_r_squared: f64,

    /// Residual variance estimate `RSS / (n - 2)`.
    pub mse: f64,

    /// Root of `mse`.
    pub rmse: f64,

    /// F-statistic for the slope.
    pub f_statistic: f64,

    /// P-value for the F-statistic.
    pub f_pvalue: f64,

    // ========== Inference Statistics (Optional) ==========
    /// Intercept inference.
    pub intercept_inference: Option<CoefficientSummary>,

    /// Slope inference.
    pub slope_inference: Option<CoefficientSummary>,

    /// Confidence level used for intervals.
    pub confidence_level: f64,
}

impl RegressionResult {
    /// Residual degrees of freedom (n - 2).
    pub fn residual_df(&self) -> usize {
        self.n_observations.saturating_sub(2)
    }

    /// Model degrees of freedom; a line has a single slope parameter.
    pub fn model_df(&self) -> usize {
        1
    }

    /// Intercept of the fitted line.
    pub fn intercept(&self) -> f64 {
        self.line.intercept
    }

    /// Slope of the fitted line.
    pub fn slope(&self) -> f64 {
        self.line.slope
    }

    /// Residual sum of squares (RSS).
    pub fn rss(&self) -> f64 {
        self.statistics.rss
    }

    /// Explained sum of squares (ESS = TSS - RSS).
    pub fn ess(&self) -> f64 {
        self.statistics.ess
    }

    /// Total sum of squares (TSS).
    pub fn tss(&self) -> f64 {
        self.statistics.tss()
    }

    /// Check if the fit is usable for inference: finite coefficients and
    /// at least one residual degree of freedom.
    pub fn is_valid(&self) -> bool {
        self.line.is_finite() && self.residual_df() > 0
    }
}

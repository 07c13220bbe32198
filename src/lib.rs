//! Ordinary least-squares fitting of a straight line.
//!
//! Given paired observations `(x[i], y[i])`, the crate estimates the intercept
//! and slope of `y = a + b·x` and reports residual statistics: standard errors
//! of the coefficients, residual and explained sums of squares, and R².
//!
//! # Example
//!
//! ```rust
//! use simple_regression::prelude::*;
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [2.1, 3.9, 6.2, 7.8, 10.1];
//!
//! let line = fit(&x, &y)?;
//! let stats = statistics(&x, &y)?;
//!
//! assert!((line.slope - 2.0).abs() < 0.1);
//! assert!(stats.r_squared > 0.99);
//! # Ok::<(), RegressionError>(())
//! ```
//!
//! Degenerate but well-formed inputs are not errors: a constant `x` yields a
//! non-finite slope and a constant `y` yields a NaN R².

pub mod core;
pub mod diagnostics;
pub mod inference;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        CoefficientSummary, FitOptions, FitOptionsBuilder, FitStatistics, IntervalType, LineFit,
        OptionsError, PredictionResult, RegressionResult,
    };
    pub use crate::diagnostics::{
        compute_leverage, high_leverage_points, residual_outliers, standardized_residuals,
        studentized_residuals,
    };
    pub use crate::solvers::{
        fit, fit_pairs, statistics, FittedLine, FittedRegressor, LineRegressor, RegressionError,
        Regressor,
    };
}

pub use crate::core::{FitStatistics, LineFit};
pub use crate::solvers::{fit, fit_pairs, statistics, RegressionError};

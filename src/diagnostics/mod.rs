//! Regression diagnostics for a fitted line.
//!
//! - **Leverage**: how far each predictor value sits from the mean
//! - **Residuals**: standardized and studentized residuals for outlier detection
//!
//! # Example
//!
//! ```rust,ignore
//! use simple_regression::diagnostics::{
//!     compute_leverage, high_leverage_points, residual_outliers, studentized_residuals,
//! };
//!
//! let influential = high_leverage_points(&compute_leverage(&x), None);
//! let stud = studentized_residuals(fitted.result(), &x)?;
//! let outliers = residual_outliers(&stud, 2.0);
//! ```

mod leverage;
mod residuals;

pub use leverage::{compute_leverage, high_leverage_points};
pub use residuals::{residual_outliers, standardized_residuals, studentized_residuals};

//! Line fitting kernels and the estimator built on them.

mod least_squares;
mod line;
mod traits;

pub use least_squares::{fit, fit_pairs, statistics, MIN_SAMPLES};
pub use line::{FittedLine, LineRegressor, LineRegressorBuilder};
pub use traits::{FittedRegressor, RegressionError, Regressor};

//! Core types for line fitting.

mod options;
mod prediction;
mod result;

pub use options::{FitOptions, FitOptionsBuilder, OptionsError};
pub use prediction::{IntervalType, PredictionResult};
pub use result::{CoefficientSummary, FitStatistics, LineFit, RegressionResult};

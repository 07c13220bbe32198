//! Least-squares line fitting kernels.
//!
//! [`fit`] estimates intercept and slope with the two-pass mean/covariance
//! method; [`statistics`] derives residual statistics from that same fit.
//!
//! Degenerate inputs are not errors. A predictor with zero variance gives a
//! non-finite slope and a constant response gives a NaN R², following IEEE 754
//! division.

use crate::core::{FitStatistics, LineFit};
use crate::solvers::traits::RegressionError;
use crate::utils::{unzip_pairs, CenteredMoments, RawSums};
use log::{debug, trace};

/// Minimum number of observations needed to determine a line.
pub const MIN_SAMPLES: usize = 2;

/// Check that `x` and `y` pair up and hold enough observations.
pub(crate) fn validate_samples(x_len: usize, y_len: usize) -> Result<(), RegressionError> {
    if x_len != y_len {
        return Err(RegressionError::LengthMismatch { x_len, y_len });
    }

    if x_len < MIN_SAMPLES {
        return Err(RegressionError::InsufficientSamples {
            needed: MIN_SAMPLES,
            got: x_len,
        });
    }

    Ok(())
}

/// Fit `y = intercept + slope·x` by ordinary least squares.
///
/// # Errors
/// * [`RegressionError::LengthMismatch`] if `x` and `y` differ in length
/// * [`RegressionError::InsufficientSamples`] if fewer than two observations are given
///
/// # Example
///
/// ```rust
/// use simple_regression::solvers::fit;
///
/// let line = fit(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]).unwrap();
/// assert_eq!(line.intercept, 0.0);
/// assert_eq!(line.slope, 2.0);
/// ```
pub fn fit(x: &[f64], y: &[f64]) -> Result<LineFit, RegressionError> {
    validate_samples(x.len(), y.len())?;
    Ok(fit_centered(x, y).0)
}

/// Line fit plus the centered moments it was computed from.
///
/// Inputs must already be validated.
fn fit_centered(x: &[f64], y: &[f64]) -> (LineFit, CenteredMoments) {
    let moments = CenteredMoments::compute(x, y);
    if moments.sxx == 0.0 {
        debug!(
            "predictor has zero variance over {} samples, slope is undefined",
            x.len()
        );
    }

    let slope = moments.sxy / moments.sxx;
    let intercept = moments.y_mean - slope * moments.x_mean;

    trace!(
        "fitted line over {} samples: intercept={intercept}, slope={slope}",
        x.len()
    );

    (LineFit { intercept, slope }, moments)
}

/// Fit a line to a sequence of `(x, y)` pairs.
///
/// Same semantics and errors as [`fit`]; pairs cannot mismatch in length, so
/// only [`RegressionError::InsufficientSamples`] can occur.
pub fn fit_pairs(samples: &[(f64, f64)]) -> Result<LineFit, RegressionError> {
    let (x, y) = unzip_pairs(samples);
    fit(&x, &y)
}

/// Fit a line and compute its residual statistics.
///
/// The standard errors are `sqrt(RSS·Σx² / D)` for the intercept and
/// `sqrt(RSS·n / D)` for the slope, with `D = n·Σx² - (Σx)²`. ESS is reported
/// as `TSS - RSS` and R² as `1 - RSS/TSS`.
///
/// # Errors
/// Same as [`fit`].
pub fn statistics(x: &[f64], y: &[f64]) -> Result<FitStatistics, RegressionError> {
    solve(x, y).map(|solution| solution.statistics)
}

/// Everything one pass of fitting produces, for callers that need more than
/// the coefficients.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineSolution {
    pub line: LineFit,
    pub moments: CenteredMoments,
    pub statistics: FitStatistics,
}

/// Validate, fit once and derive the residual statistics from that fit.
pub(crate) fn solve(x: &[f64], y: &[f64]) -> Result<LineSolution, RegressionError> {
    validate_samples(x.len(), y.len())?;

    let (line, moments) = fit_centered(x, y);
    let statistics = residual_statistics(x, y, &line);

    Ok(LineSolution {
        line,
        moments,
        statistics,
    })
}

fn residual_statistics(x: &[f64], y: &[f64], line: &LineFit) -> FitStatistics {
    let sums = RawSums::compute(x, y);
    let n = sums.n as f64;
    let y_mean = sums.sy / n;

    let mut rss = 0.0;
    let mut tss = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let residual = yi - line.predict(xi);
        rss += residual * residual;
        let deviation = yi - y_mean;
        tss += deviation * deviation;
    }

    if tss == 0.0 {
        debug!("response has zero variance, R² is undefined");
    }

    let denominator = sums.denominator();

    FitStatistics {
        se_intercept: (rss * sums.sxx / denominator).sqrt(),
        se_slope: (rss * n / denominator).sqrt(),
        rss,
        ess: tss - rss,
        r_squared: 1.0 - rss / tss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fit() {
        let x: Vec<f64> = (0..5).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|&xi| 2.0 + 3.0 * xi).collect();

        let line = fit(&x, &y).expect("fit should succeed");

        assert!((line.slope - 3.0).abs() < 1e-10);
        assert!((line.intercept - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_length_mismatch() {
        let err = fit(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, RegressionError::LengthMismatch { x_len: 3, y_len: 2 });
    }

    #[test]
    fn test_insufficient_samples() {
        let err = fit(&[1.0], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            RegressionError::InsufficientSamples { needed: 2, got: 1 }
        );

        let err = fit(&[], &[]).unwrap_err();
        assert_eq!(
            err,
            RegressionError::InsufficientSamples { needed: 2, got: 0 }
        );
    }

    #[test]
    fn test_length_checked_before_count() {
        let err = fit(&[1.0], &[]).unwrap_err();
        assert!(matches!(err, RegressionError::LengthMismatch { .. }));
    }

    #[test]
    fn test_fit_pairs_matches_fit() {
        let pairs = [(1.0, 2.1), (2.0, 3.9), (3.0, 6.2), (4.0, 7.8)];
        let x: Vec<f64> = pairs.iter().map(|p| p.0).collect();
        let y: Vec<f64> = pairs.iter().map(|p| p.1).collect();

        assert_eq!(fit_pairs(&pairs).unwrap(), fit(&x, &y).unwrap());
    }

    #[test]
    fn test_fit_pairs_insufficient() {
        let err = fit_pairs(&[(1.0, 1.0)]).unwrap_err();
        assert_eq!(
            err,
            RegressionError::InsufficientSamples { needed: 2, got: 1 }
        );
    }

    #[test]
    fn test_zero_variance_predictor_is_not_an_error() {
        let line = fit(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).expect("no error on constant x");
        assert!(!line.slope.is_finite());
    }

    #[test]
    fn test_statistics_perfect_fit() {
        let stats = statistics(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]).unwrap();

        assert_eq!(stats.rss, 0.0);
        assert_eq!(stats.r_squared, 1.0);
        assert_eq!(stats.se_intercept, 0.0);
        assert_eq!(stats.se_slope, 0.0);
        assert!((stats.ess - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_statistics_validates_like_fit() {
        assert_eq!(
            statistics(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err(),
            RegressionError::LengthMismatch { x_len: 3, y_len: 2 }
        );
        assert_eq!(
            statistics(&[1.0], &[1.0]).unwrap_err(),
            RegressionError::InsufficientSamples { needed: 2, got: 1 }
        );
    }

    #[test]
    fn test_solve_agrees_with_public_kernels() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.1, 3.9, 6.2, 7.8, 10.1];

        let solution = solve(&x, &y).expect("solve should succeed");

        assert_eq!(solution.line, fit(&x, &y).unwrap());
        assert_eq!(solution.statistics, statistics(&x, &y).unwrap());
        assert_eq!(solution.moments, CenteredMoments::compute(&x, &y));
    }

    #[test]
    fn test_statistics_constant_response() {
        let stats = statistics(&[1.0, 2.0, 3.0], &[3.0, 3.0, 3.0]).unwrap();

        assert_eq!(stats.rss, 0.0);
        assert_eq!(stats.ess, 0.0);
        assert!(stats.r_squared.is_nan());
    }
}

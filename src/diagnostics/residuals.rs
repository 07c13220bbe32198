//! Standardized and studentized residuals of a fitted line.

use crate::core::RegressionResult;
use crate::inference::LineSample;
use crate::solvers::RegressionError;
use faer::Col;

/// Residuals scaled by the residual standard error: `e_i / s`.
///
/// NaN everywhere when `s` is zero or undefined (perfect fit, `n = 2`).
pub fn standardized_residuals(result: &RegressionResult) -> Col<f64> {
    let s = result.rmse;
    let n = result.residuals.nrows();

    if !(s > 0.0 && s.is_finite()) {
        return Col::from_fn(n, |_| f64::NAN);
    }

    Col::from_fn(n, |i| result.residuals[i] / s)
}

/// Internally studentized residuals: `e_i / (s · sqrt(1 - h_i))`.
///
/// `x` must be the predictor the line was fitted on; each `h_i` is its
/// leverage under that training sample.
///
/// # Errors
/// [`RegressionError::LengthMismatch`] if `x` and the residuals differ in length.
pub fn studentized_residuals(
    result: &RegressionResult,
    x: &Col<f64>,
) -> Result<Col<f64>, RegressionError> {
    let n = result.residuals.nrows();
    if x.nrows() != n {
        return Err(RegressionError::LengthMismatch {
            x_len: x.nrows(),
            y_len: n,
        });
    }

    let s = result.rmse;
    if !(s > 0.0 && s.is_finite()) {
        return Ok(Col::from_fn(n, |_| f64::NAN));
    }

    let sample = LineSample::from_result(result);

    Ok(Col::from_fn(n, |i| {
        let h = sample.leverage_at(x[i]);
        result.residuals[i] / (s * (1.0 - h).sqrt())
    }))
}

/// Indices of observations with |r_i| > threshold.
///
/// Common thresholds are 2 or 3.
pub fn residual_outliers(residuals: &Col<f64>, threshold: f64) -> Vec<usize> {
    residuals
        .iter()
        .enumerate()
        .filter(|(_, &r)| r.abs() > threshold)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::compute_leverage;
    use crate::solvers::{FittedRegressor, LineRegressor};

    fn fitted_result(x: &[f64], y: &[f64]) -> RegressionResult {
        LineRegressor::default()
            .fit_slices(x, y)
            .expect("model should fit")
            .result()
            .clone()
    }

    #[test]
    fn test_standardized_residuals() {
        let result = fitted_result(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.1, 3.9, 6.2, 7.8, 10.1]);

        let std_resid = standardized_residuals(&result);

        for i in 0..5 {
            assert!((std_resid[i] * result.rmse - result.residuals[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_standardized_residuals_perfect_fit() {
        let result = fitted_result(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);

        assert!(standardized_residuals(&result).iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_studentized_matches_hat_values() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 10.0];
        let y = [0.3, 1.1, 1.8, 3.4, 3.9, 10.2];
        let result = fitted_result(&x, &y);
        let x_col = Col::from_fn(x.len(), |i| x[i]);

        let stud = studentized_residuals(&result, &x_col).expect("lengths match");
        let h = compute_leverage(&x_col);

        for i in 0..x.len() {
            let expected = result.residuals[i] / (result.rmse * (1.0 - h[i]).sqrt());
            assert!((stud[i] - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn test_studentized_short_predictor_is_an_error() {
        let result = fitted_result(&[1.0, 2.0, 3.0, 4.0], &[1.1, 1.9, 3.2, 3.9]);
        let short = Col::from_fn(2, |i| i as f64);

        assert_eq!(
            studentized_residuals(&result, &short).unwrap_err(),
            RegressionError::LengthMismatch { x_len: 2, y_len: 4 }
        );
    }

    #[test]
    fn test_outlier_detection() {
        let studentized = Col::from_fn(10, |i| if i == 5 { 4.0 } else { (i as f64 - 4.5) * 0.1 });

        assert_eq!(residual_outliers(&studentized, 2.0), vec![5]);
    }
}

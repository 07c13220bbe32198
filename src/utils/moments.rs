//! Moment utility functions.

/// Arithmetic mean of a slice.
///
/// Returns NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Center a vector by subtracting the mean.
pub fn center_vector(values: &[f64]) -> (Vec<f64>, f64) {
    let m = mean(values);
    let centered = values.iter().map(|&v| v - m).collect();

    (centered, m)
}

/// Split a sequence of `(x, y)` pairs into two parallel vectors in one pass.
pub fn unzip_pairs(samples: &[(f64, f64)]) -> (Vec<f64>, Vec<f64>) {
    samples.iter().copied().unzip()
}

/// Sums of centered cross products for a paired sample.
///
/// Computed in two passes: means first, then deviations from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenteredMoments {
    /// Mean of `x`.
    pub x_mean: f64,
    /// Mean of `y`.
    pub y_mean: f64,
    /// Σ (x - x̄)².
    pub sxx: f64,
    /// Σ (x - x̄)(y - ȳ).
    pub sxy: f64,
}

impl CenteredMoments {
    /// Compute the centered moments. The slices must have equal length.
    pub fn compute(x: &[f64], y: &[f64]) -> Self {
        let x_mean = mean(x);
        let y_mean = mean(y);

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (&xi, &yi) in x.iter().zip(y) {
            let dx = xi - x_mean;
            sxy += dx * (yi - y_mean);
            sxx += dx * dx;
        }

        Self {
            x_mean,
            y_mean,
            sxx,
            sxy,
        }
    }
}

/// Raw (uncentered) sums for a paired sample, accumulated in a single pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSums {
    /// Number of observations.
    pub n: usize,
    /// Σ x.
    pub sx: f64,
    /// Σ y.
    pub sy: f64,
    /// Σ x².
    pub sxx: f64,
}

impl RawSums {
    /// Accumulate the raw sums. The slices must have equal length.
    pub fn compute(x: &[f64], y: &[f64]) -> Self {
        let mut sums = Self {
            n: x.len(),
            sx: 0.0,
            sy: 0.0,
            sxx: 0.0,
        };
        for (&xi, &yi) in x.iter().zip(y) {
            sums.sx += xi;
            sums.sy += yi;
            sums.sxx += xi * xi;
        }
        sums
    }

    /// `n·Σx² - (Σx)²`, which equals `n·Σ(x - x̄)²`.
    pub fn denominator(&self) -> f64 {
        self.n as f64 * self.sxx - self.sx * self.sx
    }
}

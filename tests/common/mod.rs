//! Common test utilities and data generators.

#![allow(dead_code)]

/// Generate points on `y = intercept + slope * x` with uniform noise in
/// `[-noise, noise]`. Deterministic for a given seed.
pub fn generate_line_data(
    n_samples: usize,
    intercept: f64,
    slope: f64,
    noise: f64,
    seed: u64,
) -> (Vec<f64>, Vec<f64>) {
    let mut rng_state = seed;
    let next_rand = |state: &mut u64| -> f64 {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((*state >> 32) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let mut x = Vec::with_capacity(n_samples);
    let mut y = Vec::with_capacity(n_samples);

    for _ in 0..n_samples {
        let xi = 10.0 * next_rand(&mut rng_state);
        x.push(xi);
        y.push(intercept + slope * xi + noise * next_rand(&mut rng_state));
    }

    (x, y)
}

/// Solve the 2x2 normal equations of a line fit directly:
///
/// ```text
/// [ n   Σx  ] [a]   [ Σy  ]
/// [ Σx  Σx² ] [b] = [ Σxy ]
/// ```
pub fn normal_equations(x: &[f64], y: &[f64]) -> (f64, f64) {
    let n = x.len() as f64;
    let sx: f64 = x.iter().sum();
    let sy: f64 = y.iter().sum();
    let sxx: f64 = x.iter().map(|v| v * v).sum();
    let sxy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();

    let det = n * sxx - sx * sx;
    let a = (sy * sxx - sx * sxy) / det;
    let b = (n * sxy - sx * sy) / det;
    (a, b)
}

/// Σ (y - a - b·x)².
pub fn sum_squared_residuals(x: &[f64], y: &[f64], a: f64, b: f64) -> f64 {
    x.iter()
        .zip(y)
        .map(|(&xi, &yi)| (yi - a - b * xi).powi(2))
        .sum()
}

/// Σ (y - ȳ)².
pub fn total_sum_squares(y: &[f64]) -> f64 {
    let mean = y.iter().sum::<f64>() / y.len() as f64;
    y.iter().map(|&v| (v - mean).powi(2)).sum()
}

//! Fit options and configuration.

use thiserror::Error;

/// Configuration options for line fitting.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    /// Whether to compute t-statistics, p-values and confidence intervals (default: true).
    pub compute_inference: bool,
    /// Confidence level for confidence intervals (default: 0.95).
    pub confidence_level: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            compute_inference: true,
            confidence_level: 0.95,
        }
    }
}

/// Errors that can occur when validating fit options.
#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("confidence_level must be in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),
}

impl FitOptions {
    /// Create a new builder for fit options.
    pub fn builder() -> FitOptionsBuilder {
        FitOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        // Written so that NaN is rejected too.
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(OptionsError::InvalidConfidenceLevel(self.confidence_level));
        }
        Ok(())
    }
}

/// Builder for `FitOptions`.
#[derive(Debug, Clone, Default)]
pub struct FitOptionsBuilder {
    options: FitOptions,
}

impl FitOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to compute inference statistics.
    pub fn compute_inference(mut self, compute: bool) -> Self {
        self.options.compute_inference = compute;
        self
    }

    /// Set the confidence level for confidence intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.options.confidence_level = level;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<FitOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> FitOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = FitOptions::default();
        assert!(opts.compute_inference);
        assert_eq!(opts.confidence_level, 0.95);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let opts = FitOptions::builder()
            .compute_inference(false)
            .confidence_level(0.99)
            .build()
            .expect("valid options");

        assert!(!opts.compute_inference);
        assert_eq!(opts.confidence_level, 0.99);
    }

    #[test]
    fn test_invalid_confidence_level() {
        for level in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let result = FitOptions::builder().confidence_level(level).build();
            assert!(matches!(
                result,
                Err(OptionsError::InvalidConfidenceLevel(_))
            ));
        }
    }

    #[test]
    fn test_build_unchecked_skips_validation() {
        let opts = FitOptions::builder().confidence_level(2.0).build_unchecked();
        assert_eq!(opts.confidence_level, 2.0);
        assert!(opts.validate().is_err());
    }
}

//! Exhaustive enumeration configuration.

use crate::error::{BalanceError, Result};
use crate::scoring::Weights;

/// Largest subset enumerated when no threshold is configured.
pub const DEFAULT_THRESHOLD: usize = 12;

/// Hard ceiling on the configurable threshold (`2^24` label vectors).
pub const MAX_EXHAUSTIVE_THRESHOLD: usize = 24;

/// Configuration for [`ExhaustiveEnumerator`](super::ExhaustiveEnumerator).
///
/// # Examples
///
/// ```
/// use u_partition::exhaustive::ExhaustiveConfig;
///
/// let config = ExhaustiveConfig::default()
///     .with_threshold(10)
///     .with_parallel(false);
/// assert_eq!(config.threshold, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ExhaustiveConfig {
    /// Largest subset size accepted.
    pub threshold: usize,
    /// Scoring weights; must match the entity schema.
    pub weights: Weights,
    /// Whether to shard the mask space across rayon workers.
    pub parallel: bool,
}

impl Default for ExhaustiveConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            weights: Weights::default(),
            parallel: true,
        }
    }
}

impl ExhaustiveConfig {
    /// Sets the largest subset size accepted.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the scoring weights.
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Enables or disables sharded enumeration.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.threshold > MAX_EXHAUSTIVE_THRESHOLD {
            return Err(BalanceError::Config(format!(
                "threshold {} exceeds the maximum of {MAX_EXHAUSTIVE_THRESHOLD}",
                self.threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExhaustiveConfig::default();
        assert_eq!(config.threshold, 12);
        assert_eq!(config.weights, Weights::default());
        assert!(config.parallel);
    }

    #[test]
    fn test_validate_caps_threshold() {
        assert!(ExhaustiveConfig::default()
            .with_threshold(MAX_EXHAUSTIVE_THRESHOLD)
            .validate()
            .is_ok());
        assert!(ExhaustiveConfig::default()
            .with_threshold(MAX_EXHAUSTIVE_THRESHOLD + 1)
            .validate()
            .is_err());
    }
}

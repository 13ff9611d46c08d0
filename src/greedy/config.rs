//! Greedy fallback configuration.

use super::types::SeedOrdering;
use crate::error::{BalanceError, Result};
use crate::scoring::Weights;

/// Number of shuffled seeds in the default seed set.
const DEFAULT_SHUFFLED_SEEDS: u64 = 4;

/// Configuration for [`GreedyRunner`](super::GreedyRunner).
///
/// # Examples
///
/// ```
/// use u_partition::greedy::{GreedyConfig, SeedOrdering};
///
/// let config = GreedyConfig::default()
///     .with_seeds(vec![SeedOrdering::Original, SeedOrdering::Reverse])
///     .with_seed(SeedOrdering::Shuffled { seed: 42 });
/// assert_eq!(config.seeds.len(), 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GreedyConfig {
    /// Placement orders, one greedy pass each.
    pub seeds: Vec<SeedOrdering>,
    /// Scoring weights; must match the entity schema.
    pub weights: Weights,
    /// Whether to run seeds on rayon workers.
    pub parallel: bool,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            seeds: SeedOrdering::defaults(DEFAULT_SHUFFLED_SEEDS),
            weights: Weights::default(),
            parallel: true,
        }
    }
}

impl GreedyConfig {
    /// Replaces the seed set.
    pub fn with_seeds(mut self, seeds: Vec<SeedOrdering>) -> Self {
        self.seeds = seeds;
        self
    }

    /// Appends one seed.
    pub fn with_seed(mut self, seed: SeedOrdering) -> Self {
        self.seeds.push(seed);
        self
    }

    /// Sets the scoring weights.
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Enables or disables parallel seed evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.seeds.is_empty() {
            return Err(BalanceError::Config(
                "greedy solver needs at least one seed ordering".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GreedyConfig::default();
        assert_eq!(config.seeds.len(), 8);
        assert_eq!(config.seeds[0], SeedOrdering::Original);
        assert_eq!(config.weights, Weights::default());
        assert!(config.parallel);
    }

    #[test]
    fn test_empty_seed_set_is_invalid() {
        let config = GreedyConfig::default().with_seeds(Vec::new());
        assert!(matches!(config.validate(), Err(BalanceError::Config(_))));
    }
}

//! Solver-wide configuration.
//!
//! [`BalanceConfig`] holds every policy knob the core consumes and can be
//! loaded from TOML so that thresholds and weights change without code
//! changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BalanceError, Result};
use crate::exhaustive::{ExhaustiveConfig, DEFAULT_THRESHOLD, MAX_EXHAUSTIVE_THRESHOLD};
use crate::greedy::{GreedyConfig, SeedOrdering};
use crate::model::Schema;
use crate::partition::Group;
use crate::ranking::DEFAULT_TOP_K;
use crate::scoring::Weights;

/// Configuration for [`BalanceRunner`](super::BalanceRunner).
///
/// # Defaults
///
/// ```
/// use u_partition::BalanceConfig;
///
/// let config = BalanceConfig::default();
/// assert_eq!(config.threshold, 12);
/// assert_eq!(config.top_k, 3);
/// assert!(config.weights.is_none());
/// ```
///
/// # TOML
///
/// ```
/// use u_partition::BalanceConfig;
///
/// let config = BalanceConfig::from_toml_str(r#"
///     threshold = 10
///     top_k = 5
///     labels = ["Red", "Blue"]
///
///     [weights]
///     population = 4
///     categories = [2, 2]
///     flags = [1]
///
///     [[seeds]]
///     type = "original"
///
///     [[seeds]]
///     type = "shuffled"
///     seed = 11
/// "#).unwrap();
///
/// assert_eq!(config.threshold, 10);
/// assert_eq!(config.seeds.len(), 2);
/// assert_eq!(config.weights.unwrap().population, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BalanceConfig {
    /// Largest subset solved exhaustively; larger ones go to the greedy
    /// fallback.
    pub threshold: usize,

    /// Number of ranked solutions returned.
    pub top_k: usize,

    /// Scoring weights. `None` derives 3 / 2-per-value / 1-per-flag
    /// weights from the entity schema.
    pub weights: Option<Weights>,

    /// Placement orders for the greedy fallback.
    pub seeds: Vec<SeedOrdering>,

    /// Whether solvers may use rayon workers.
    pub parallel: bool,

    /// Display labels of group 1 and group 2.
    pub labels: [String; 2],
}

impl Default for BalanceConfig {
    fn default() -> Self {
        let greedy = GreedyConfig::default();
        Self {
            threshold: DEFAULT_THRESHOLD,
            top_k: DEFAULT_TOP_K,
            weights: None,
            seeds: greedy.seeds,
            parallel: true,
            labels: ["A1".to_string(), "A2".to_string()],
        }
    }
}

impl BalanceConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Sets the exhaustive-enumeration threshold.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the number of solutions returned.
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }

    /// Sets explicit scoring weights.
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Replaces the greedy seed set.
    pub fn with_seeds(mut self, seeds: Vec<SeedOrdering>) -> Self {
        self.seeds = seeds;
        self
    }

    /// Enables or disables rayon workers.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the display labels of the two groups.
    pub fn with_labels(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.labels = [first.into(), second.into()];
        self
    }

    /// Display label of `group`.
    pub fn label(&self, group: Group) -> &str {
        &self.labels[group.index()]
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.threshold > MAX_EXHAUSTIVE_THRESHOLD {
            return Err(BalanceError::Config(format!(
                "threshold {} exceeds the maximum of {MAX_EXHAUSTIVE_THRESHOLD}",
                self.threshold
            )));
        }
        if self.top_k == 0 {
            return Err(BalanceError::Config("top_k must be at least 1".into()));
        }
        if self.seeds.is_empty() {
            return Err(BalanceError::Config(
                "at least one seed ordering is required".into(),
            ));
        }
        let [first, second] = &self.labels;
        if first.trim().is_empty() || second.trim().is_empty() {
            return Err(BalanceError::Config(
                "group labels must not be blank".into(),
            ));
        }
        if first == second {
            return Err(BalanceError::Config(format!(
                "group labels must differ, both are '{first}'"
            )));
        }
        Ok(())
    }

    /// Weights to use for `schema`: the configured ones, checked against
    /// the schema, or defaults derived from it.
    pub fn weights_for(&self, schema: &Schema) -> Result<Weights> {
        match &self.weights {
            Some(weights) => {
                weights.check_schema(schema)?;
                Ok(weights.clone())
            }
            None => Ok(Weights::for_schema(schema)),
        }
    }

    /// The exhaustive-solver slice of this configuration.
    pub fn exhaustive(&self, schema: &Schema) -> Result<ExhaustiveConfig> {
        Ok(ExhaustiveConfig::default()
            .with_threshold(self.threshold)
            .with_weights(self.weights_for(schema)?)
            .with_parallel(self.parallel))
    }

    /// The greedy-solver slice of this configuration.
    pub fn greedy(&self, schema: &Schema) -> Result<GreedyConfig> {
        Ok(GreedyConfig::default()
            .with_seeds(self.seeds.clone())
            .with_weights(self.weights_for(schema)?)
            .with_parallel(self.parallel))
    }
}

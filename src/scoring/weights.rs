//! Weighted balance score.

use serde::{Deserialize, Serialize};

use super::state::{GroupState, GroupStates};
use crate::error::{BalanceError, Result};
use crate::model::Schema;

/// Default weight on the member-count difference.
pub const DEFAULT_POPULATION_WEIGHT: u32 = 3;
/// Default weight on each categorical-value difference.
pub const DEFAULT_CATEGORY_WEIGHT: u32 = 2;
/// Default weight on each flag difference.
pub const DEFAULT_FLAG_WEIGHT: u32 = 1;

/// One non-negative weight per tracked dimension.
///
/// # Examples
///
/// ```
/// use u_partition::scoring::Weights;
///
/// let w = Weights::default();
/// assert_eq!(w.population, 3);
/// assert_eq!(w.categories, vec![2, 2]);
/// assert_eq!(w.flags, vec![1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights {
    pub population: u32,
    pub categories: Vec<u32>,
    pub flags: Vec<u32>,
}

impl Default for Weights {
    /// Weights for two categorical values and one flag: 3 / 2 / 2 / 1.
    fn default() -> Self {
        Self {
            population: DEFAULT_POPULATION_WEIGHT,
            categories: vec![DEFAULT_CATEGORY_WEIGHT; 2],
            flags: vec![DEFAULT_FLAG_WEIGHT],
        }
    }
}

impl Weights {
    /// Default weights sized for `schema`.
    pub fn for_schema(schema: &Schema) -> Self {
        Self {
            population: DEFAULT_POPULATION_WEIGHT,
            categories: vec![DEFAULT_CATEGORY_WEIGHT; schema.category_count()],
            flags: vec![DEFAULT_FLAG_WEIGHT; schema.flag_count()],
        }
    }

    /// Uniform weights, mostly useful for tests and ablations.
    pub fn uniform(schema: &Schema, weight: u32) -> Self {
        Self {
            population: weight,
            categories: vec![weight; schema.category_count()],
            flags: vec![weight; schema.flag_count()],
        }
    }

    pub fn with_population(mut self, weight: u32) -> Self {
        self.population = weight;
        self
    }

    pub fn with_categories(mut self, weights: Vec<u32>) -> Self {
        self.categories = weights;
        self
    }

    pub fn with_flags(mut self, weights: Vec<u32>) -> Self {
        self.flags = weights;
        self
    }

    /// Checks that there is exactly one weight per dimension of `schema`.
    pub fn check_schema(&self, schema: &Schema) -> Result<()> {
        if self.categories.len() != schema.category_count() {
            return Err(BalanceError::Config(format!(
                "{} category weights for {} categorical values",
                self.categories.len(),
                schema.category_count()
            )));
        }
        if self.flags.len() != schema.flag_count() {
            return Err(BalanceError::Config(format!(
                "{} flag weights for {} flags",
                self.flags.len(),
                schema.flag_count()
            )));
        }
        Ok(())
    }

    /// Scores a group-state pair. Lower is better.
    pub fn score(&self, states: &GroupStates) -> u64 {
        let (a, b) = (&states.first, &states.second);
        let mut score = u64::from(self.population) * diff(a.total, b.total);
        score += weighted(&self.categories, &a.categories, &b.categories);
        score += weighted(&self.flags, &a.flags, &b.flags);
        score
    }

    /// Per-dimension differences alongside the weighted total.
    pub fn breakdown(&self, states: &GroupStates) -> ScoreBreakdown {
        let (a, b) = (&states.first, &states.second);
        ScoreBreakdown {
            population: diff(a.total, b.total) as u32,
            categories: diffs(a, b, |s| &s.categories),
            flags: diffs(a, b, |s| &s.flags),
            total: self.score(states),
        }
    }
}

/// Unweighted per-dimension differences of one solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// `|total₁ − total₂|`.
    pub population: u32,
    /// `|cat₁ − cat₂|` per categorical value.
    pub categories: Vec<u32>,
    /// `|flag₁ − flag₂|` per flag.
    pub flags: Vec<u32>,
    /// The weighted score.
    pub total: u64,
}

fn diff(a: u32, b: u32) -> u64 {
    u64::from(a.abs_diff(b))
}

fn weighted(weights: &[u32], a: &[u32], b: &[u32]) -> u64 {
    weights
        .iter()
        .zip(a.iter().zip(b))
        .map(|(&w, (&x, &y))| u64::from(w) * diff(x, y))
        .sum()
}

fn diffs<F>(a: &GroupState, b: &GroupState, field: F) -> Vec<u32>
where
    F: Fn(&GroupState) -> &Vec<u32>,
{
    field(a)
        .iter()
        .zip(field(b))
        .map(|(&x, &y)| x.abs_diff(y))
        .collect()
}

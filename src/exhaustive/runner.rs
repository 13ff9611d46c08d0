//! Exhaustive enumeration engine.
//!
//! # Algorithm
//!
//! 1. Refuse subsets larger than the threshold
//! 2. For every mask in `0..2^n`:
//!    a. Decode the label vector (bit `i` set → entity `i` in group 2)
//!    b. Compute its canonical key; skip it if already seen
//!    c. Orient the split canonically, aggregate, score
//! 3. Rank by `(score, canonical key)`

use std::ops::Range;

use tracing::debug;

use super::config::ExhaustiveConfig;
use crate::error::{BalanceError, Result};
use crate::model::EntitySet;
use crate::partition::{Assignment, CanonicalKey};
use crate::ranking::{Solution, SolutionSet};
use crate::scoring::Weights;

/// Exhaustive two-group enumerator.
pub struct ExhaustiveEnumerator;

impl ExhaustiveEnumerator {
    /// Enumerates and ranks every distinct split of `set`.
    ///
    /// # Errors
    ///
    /// [`BalanceError::CapacityExceeded`] when `set` is larger than
    /// `config.threshold`; [`BalanceError::Config`] for an invalid
    /// configuration or weights that do not match the schema.
    pub fn run(set: &EntitySet, config: &ExhaustiveConfig) -> Result<Vec<Solution>> {
        config.validate()?;
        config.weights.check_schema(set.schema())?;

        let n = set.len();
        if n > config.threshold {
            return Err(BalanceError::CapacityExceeded {
                len: n,
                threshold: config.threshold,
            });
        }

        let space = 1u64 << n;
        let found = if config.parallel {
            enumerate_sharded(set, &config.weights, space)
        } else {
            enumerate_range(set, &config.weights, 0..space)
        };

        let ranked = found.into_ranked();
        debug!(
            event = "exhaustive_done",
            entities = n,
            assignments = space,
            distinct = ranked.len(),
            best_score = ranked.first().map(Solution::score),
        );
        Ok(ranked)
    }
}

fn enumerate_range(set: &EntitySet, weights: &Weights, masks: Range<u64>) -> SolutionSet {
    let n = set.len();
    let mut found = SolutionSet::new();
    for mask in masks {
        let key = CanonicalKey::of(set.entities(), &Assignment::from_mask(mask, n));
        if found.contains(&key) {
            continue;
        }
        found.insert(Solution::from_key(set, weights, key));
    }
    found
}

#[cfg(feature = "parallel")]
fn enumerate_sharded(set: &EntitySet, weights: &Weights, space: u64) -> SolutionSet {
    use rayon::prelude::*;

    let shards = (rayon::current_num_threads() as u64).clamp(1, space);
    let width = space.div_ceil(shards);
    (0..shards)
        .into_par_iter()
        .map(|s| {
            let start = s * width;
            let end = (start + width).min(space);
            enumerate_range(set, weights, start..end)
        })
        .reduce(SolutionSet::new, SolutionSet::merge)
}

#[cfg(not(feature = "parallel"))]
fn enumerate_sharded(set: &EntitySet, weights: &Weights, space: u64) -> SolutionSet {
    enumerate_range(set, weights, 0..space)
}

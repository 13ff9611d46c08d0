//! Greedy multi-seed execution engine.
//!
//! # Algorithm
//!
//! For every seed ordering:
//! 1. Start from two empty groups
//! 2. Walk entities in seed order; place each one in the group whose
//!    partial score is lower (ties: fewer members, then group 1)
//! 3. Canonicalize and score the finished assignment
//!
//! Candidates are merged into one [`SolutionSet`] and ranked.

use std::cmp::Ordering;

use tracing::{debug, trace};

use super::config::GreedyConfig;
use super::types::SeedOrdering;
use crate::error::Result;
use crate::model::{Entity, EntitySet};
use crate::partition::{Assignment, Group};
use crate::ranking::{Solution, SolutionSet};
use crate::scoring::{GroupStates, Weights};

/// Greedy fallback solver.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Runs one greedy pass per seed and ranks the distinct results.
    ///
    /// Returns at most `config.seeds.len()` solutions; fewer when seeds
    /// converge on the same split.
    ///
    /// # Errors
    ///
    /// [`BalanceError::Config`](crate::BalanceError::Config) for an empty
    /// seed set or weights that do not match the schema.
    pub fn run(set: &EntitySet, config: &GreedyConfig) -> Result<Vec<Solution>> {
        config.validate()?;
        config.weights.check_schema(set.schema())?;

        let found = if config.parallel {
            run_seeds_parallel(set, config)
        } else {
            config
                .seeds
                .iter()
                .map(|seed| run_seed(set, &config.weights, seed))
                .collect()
        };

        let ranked = found.into_ranked();
        debug!(
            event = "greedy_done",
            entities = set.len(),
            seeds = config.seeds.len(),
            distinct = ranked.len(),
            best_score = ranked.first().map(Solution::score),
        );
        Ok(ranked)
    }

    /// Builds one assignment by placing entities in `order`.
    ///
    /// `order` holds positions into `set`; positions it omits stay in
    /// group 1.
    pub fn construct(set: &EntitySet, weights: &Weights, order: &[usize]) -> Assignment {
        let entities = set.entities();
        let mut labels = vec![Group::First; entities.len()];
        let mut states = GroupStates::empty(set.schema());
        for &position in order {
            let (group, next) = place(&states, weights, &entities[position]);
            labels[position] = group;
            states = next;
        }
        Assignment::new(labels)
    }
}

fn place(states: &GroupStates, weights: &Weights, entity: &Entity) -> (Group, GroupStates) {
    let as_first = states.with(Group::First, entity);
    let as_second = states.with(Group::Second, entity);
    match weights.score(&as_first).cmp(&weights.score(&as_second)) {
        Ordering::Less => (Group::First, as_first),
        Ordering::Greater => (Group::Second, as_second),
        Ordering::Equal if states.second.total < states.first.total => (Group::Second, as_second),
        Ordering::Equal => (Group::First, as_first),
    }
}

fn run_seed(set: &EntitySet, weights: &Weights, seed: &SeedOrdering) -> Solution {
    let order = seed.order(set.entities());
    let assignment = GreedyRunner::construct(set, weights, &order);
    let solution = Solution::evaluate(set, weights, &assignment);
    trace!(seed = %seed, score = solution.score(), "greedy pass finished");
    solution
}

#[cfg(feature = "parallel")]
fn run_seeds_parallel(set: &EntitySet, config: &GreedyConfig) -> SolutionSet {
    use rayon::prelude::*;

    config
        .seeds
        .par_iter()
        .map(|seed| run_seed(set, &config.weights, seed))
        .fold(SolutionSet::new, |mut acc, solution| {
            acc.insert(solution);
            acc
        })
        .reduce(SolutionSet::new, SolutionSet::merge)
}

#[cfg(not(feature = "parallel"))]
fn run_seeds_parallel(set: &EntitySet, config: &GreedyConfig) -> SolutionSet {
    config
        .seeds
        .iter()
        .map(|seed| run_seed(set, &config.weights, seed))
        .collect()
}

//! Solver routing.

use tracing::{info, warn};

use super::config::BalanceConfig;
use super::report::{BalanceResult, Strategy};
use crate::error::Result;
use crate::exhaustive::ExhaustiveEnumerator;
use crate::greedy::GreedyRunner;
use crate::model::{Entity, EntitySet};
use crate::ranking::select_top_k;

/// Routes a subset to the exhaustive or greedy solver and keeps the best
/// `top_k` splits.
pub struct BalanceRunner;

impl BalanceRunner {
    /// Solves `set`.
    ///
    /// Subsets of at most `config.threshold` entities are enumerated
    /// exhaustively; larger ones go to the greedy fallback.
    ///
    /// # Errors
    ///
    /// [`BalanceError::Config`](crate::BalanceError::Config) for an invalid
    /// configuration or weights that do not match the schema.
    pub fn solve(set: &EntitySet, config: &BalanceConfig) -> Result<BalanceResult> {
        config.validate()?;

        let n = set.len();
        let strategy = if n <= config.threshold {
            Strategy::Exhaustive
        } else {
            Strategy::Greedy
        };
        info!(
            event = "solve_start",
            entities = n,
            threshold = config.threshold,
            top_k = config.top_k,
            strategy = %strategy,
        );

        let ranked = match strategy {
            Strategy::Exhaustive => {
                ExhaustiveEnumerator::run(set, &config.exhaustive(set.schema())?)?
            }
            Strategy::Greedy => GreedyRunner::run(set, &config.greedy(set.schema())?)?,
        };

        let candidates = ranked.len();
        if strategy == Strategy::Greedy && candidates < config.top_k {
            warn!(
                event = "greedy_short",
                distinct = candidates,
                top_k = config.top_k,
                "greedy seeds converged on fewer splits than requested"
            );
        }

        let solutions = select_top_k(ranked, config.top_k);
        info!(
            event = "solve_end",
            strategy = %strategy,
            candidates,
            returned = solutions.len(),
            best_score = solutions.first().map(|s| s.score()),
        );

        Ok(BalanceResult {
            strategy,
            candidates,
            solutions,
        })
    }

    /// Solves the entities of `full` matched by `selector`.
    pub fn solve_subset<F>(
        full: &EntitySet,
        selector: F,
        config: &BalanceConfig,
    ) -> Result<BalanceResult>
    where
        F: Fn(&Entity) -> bool,
    {
        Self::solve(&full.subset(selector), config)
    }
}

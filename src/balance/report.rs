//! Result types and the per-scenario comparison summary.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::model::{EntitySet, Schema};
use crate::partition::Group;
use crate::ranking::Solution;
use crate::scoring::GroupState;

/// Which solver produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Every split enumerated; the ranking is exact.
    Exhaustive,
    /// Multi-seed greedy fallback; the ranking is heuristic.
    Greedy,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Exhaustive => write!(f, "exhaustive"),
            Strategy::Greedy => write!(f, "greedy"),
        }
    }
}

/// Outcome of [`BalanceRunner::solve`](super::BalanceRunner::solve).
#[derive(Debug, Clone)]
pub struct BalanceResult {
    /// Solver that ran.
    pub strategy: Strategy,
    /// Distinct splits found before top-k truncation.
    pub candidates: usize,
    /// Best solutions, ordered by `(score, canonical key)`.
    pub solutions: Vec<Solution>,
}

impl BalanceResult {
    /// The best-ranked solution.
    pub fn best(&self) -> Option<&Solution> {
        self.solutions.first()
    }

    /// Whether the ranking is guaranteed to contain the optimum.
    pub fn is_exact(&self) -> bool {
        self.strategy == Strategy::Exhaustive
    }

    /// One comparison row per solution, scenarios numbered from 1.
    pub fn summaries(&self, schema: &Schema, labels: &[String; 2]) -> Vec<ScenarioSummary> {
        self.solutions
            .iter()
            .enumerate()
            .map(|(i, solution)| ScenarioSummary::new(i + 1, solution, schema, labels))
            .collect()
    }

    /// Per-solution group columns aligned with `full`; `None` marks
    /// entities outside the processed subset.
    pub fn columns(&self, full: &EntitySet) -> Vec<Vec<Option<Group>>> {
        self.solutions.iter().map(|s| s.column_for(full)).collect()
    }
}

/// Comparison row for one ranked scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioSummary {
    /// 1-based rank.
    pub scenario: usize,
    pub score: u64,
    /// Group 1, then group 2.
    pub groups: Vec<GroupSummary>,
}

/// Composition of one group within a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub label: String,
    pub total: u32,
    /// Members per categorical value, keyed by value name.
    pub categories: BTreeMap<String, u32>,
    /// Members with each flag set, keyed by flag name.
    pub flags: BTreeMap<String, u32>,
    /// Sorted identifiers.
    pub members: Vec<String>,
}

impl ScenarioSummary {
    fn new(scenario: usize, solution: &Solution, schema: &Schema, labels: &[String; 2]) -> Self {
        let groups = Group::BOTH
            .iter()
            .map(|&g| GroupSummary {
                label: labels[g.index()].clone(),
                members: solution.members(g).to_vec(),
                ..counts(schema, solution.states().get(g))
            })
            .collect();
        Self {
            scenario,
            score: solution.score(),
            groups,
        }
    }
}

fn counts(schema: &Schema, state: &GroupState) -> GroupSummary {
    GroupSummary {
        label: String::new(),
        total: state.total,
        categories: named(&schema.categories, &state.categories),
        flags: named(&schema.flags, &state.flags),
        members: Vec::new(),
    }
}

fn named(names: &[String], counters: &[u32]) -> BTreeMap<String, u32> {
    names
        .iter()
        .cloned()
        .zip(counters.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entity;
    use crate::partition::Assignment;
    use crate::scoring::Weights;

    fn set() -> EntitySet {
        EntitySet::new(
            Schema::new(["boy", "girl"], ["greek"]),
            vec![
                Entity::new("P1", 0, vec![true]),
                Entity::new("P2", 1, vec![false]),
                Entity::new("P3", 1, vec![true]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_summary_counts() {
        let set = set();
        let assignment = Assignment::new(vec![Group::First, Group::Second, Group::Second]);
        let solution = Solution::evaluate(&set, &Weights::default(), &assignment);
        let result = BalanceResult {
            strategy: Strategy::Exhaustive,
            candidates: 4,
            solutions: vec![solution],
        };

        let labels = ["A1".to_string(), "A2".to_string()];
        let rows = result.summaries(set.schema(), &labels);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.scenario, 1);

        let g1 = &row.groups[0];
        assert_eq!(g1.label, "A1");
        assert_eq!(g1.members, vec!["P1"]);
        assert_eq!(g1.total, 1);
        assert_eq!(g1.categories["boy"], 1);
        assert_eq!(g1.categories["girl"], 0);
        assert_eq!(g1.flags["greek"], 1);

        let g2 = &row.groups[1];
        assert_eq!(g2.label, "A2");
        assert_eq!(g2.members, vec!["P2", "P3"]);
        assert_eq!(g2.categories["girl"], 2);
        assert_eq!(g2.flags["greek"], 1);

        // 3·1 + 2·1 + 2·2 + 1·0
        assert_eq!(row.score, 9);
    }

    #[test]
    fn test_columns_mark_outsiders() {
        let full = set();
        let subset = full.subset(|e| e.id() != "P2");
        let solution = Solution::evaluate(
            &subset,
            &Weights::default(),
            &Assignment::new(vec![Group::First, Group::Second]),
        );
        let result = BalanceResult {
            strategy: Strategy::Greedy,
            candidates: 1,
            solutions: vec![solution],
        };
        assert!(!result.is_exact());
        assert_eq!(
            result.columns(&full),
            vec![vec![Some(Group::First), None, Some(Group::Second)]]
        );
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::Exhaustive.to_string(), "exhaustive");
        assert_eq!(Strategy::Greedy.to_string(), "greedy");
    }
}

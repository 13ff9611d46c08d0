//! Deduplicating reducer and top-k truncation.

use std::collections::BTreeMap;

use super::solution::Solution;
use crate::partition::CanonicalKey;

/// Number of solutions returned when the caller does not ask otherwise.
pub const DEFAULT_TOP_K: usize = 3;

/// Solutions keyed by canonical split, one representative per key.
///
/// The first solution seen for a key is kept. Because solutions are
/// canonically oriented, any later duplicate is identical to it.
#[derive(Debug, Clone, Default)]
pub struct SolutionSet {
    by_key: BTreeMap<CanonicalKey, Solution>,
}

impl SolutionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    pub fn contains(&self, key: &CanonicalKey) -> bool {
        self.by_key.contains_key(key)
    }

    /// Adds `solution` unless its split is already present.
    ///
    /// Returns `true` if the solution was new.
    pub fn insert(&mut self, solution: Solution) -> bool {
        if self.by_key.contains_key(solution.key()) {
            return false;
        }
        self.by_key.insert(solution.key().clone(), solution);
        true
    }

    /// Key union of two sets.
    pub fn merge(self, other: SolutionSet) -> SolutionSet {
        let (mut into, from) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        for (_, solution) in from.by_key {
            into.insert(solution);
        }
        into
    }

    /// All solutions ordered by `(score, canonical key)`.
    pub fn into_ranked(self) -> Vec<Solution> {
        let mut ranked: Vec<Solution> = self.by_key.into_values().collect();
        ranked.sort();
        ranked
    }
}

impl Extend<Solution> for SolutionSet {
    fn extend<T: IntoIterator<Item = Solution>>(&mut self, iter: T) {
        for solution in iter {
            self.insert(solution);
        }
    }
}

impl FromIterator<Solution> for SolutionSet {
    fn from_iter<T: IntoIterator<Item = Solution>>(iter: T) -> Self {
        let mut set = SolutionSet::new();
        set.extend(iter);
        set
    }
}

/// Returns the best `k` distinct solutions.
///
/// Orders by `(score, canonical key)` and drops duplicate splits first. If
/// fewer than `k` distinct solutions exist, all of them are returned.
pub fn select_top_k(mut solutions: Vec<Solution>, k: usize) -> Vec<Solution> {
    solutions.sort();
    solutions.dedup_by(|a, b| a.key() == b.key());
    solutions.truncate(k);
    solutions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entity, EntitySet, Schema};
    use crate::partition::Assignment;
    use crate::scoring::Weights;

    fn set() -> EntitySet {
        EntitySet::new(
            Schema::new(["X", "Y"], ["flag"]),
            vec![
                Entity::new("P1", 0, vec![true]),
                Entity::new("P2", 0, vec![false]),
                Entity::new("P3", 1, vec![true]),
            ],
        )
        .unwrap()
    }

    fn solutions(masks: &[u64]) -> Vec<Solution> {
        let set = set();
        masks
            .iter()
            .map(|&m| Solution::evaluate(&set, &Weights::default(), &Assignment::from_mask(m, 3)))
            .collect()
    }

    #[test]
    fn test_insert_rejects_mirror_images() {
        let mut set = SolutionSet::new();
        let mut iter = solutions(&[0b001, 0b110]).into_iter();
        assert!(set.insert(iter.next().unwrap()));
        assert!(!set.insert(iter.next().unwrap()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_merge_is_key_union() {
        let left: SolutionSet = solutions(&[0b000, 0b001, 0b010]).into_iter().collect();
        let right: SolutionSet = solutions(&[0b101, 0b011, 0b100]).into_iter().collect();
        // 0b101 mirrors 0b010, 0b011 mirrors 0b100
        let merged = left.merge(right);
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn test_into_ranked_is_sorted() {
        let ranked: Vec<Solution> = solutions(&[0b000, 0b001, 0b010, 0b100])
            .into_iter()
            .collect::<SolutionSet>()
            .into_ranked();
        for pair in ranked.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_top_k_truncates_and_dedups() {
        let all = solutions(&[0b000, 0b111, 0b001, 0b110, 0b010, 0b100]);
        let top = select_top_k(all.clone(), 2);
        assert_eq!(top.len(), 2);
        assert!(top[0] <= top[1]);

        let everything = select_top_k(all, 10);
        assert_eq!(everything.len(), 4);
    }

    #[test]
    fn test_top_k_of_nothing() {
        assert!(select_top_k(Vec::new(), DEFAULT_TOP_K).is_empty());
    }
}

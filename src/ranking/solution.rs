//! A scored, canonically oriented split.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::model::EntitySet;
use crate::partition::{Assignment, CanonicalKey, Group};
use crate::scoring::{aggregate, GroupStates, ScoreBreakdown, Weights};

/// One candidate split of the subset.
///
/// The assignment is always in canonical orientation (the smaller sorted
/// identifier tuple is group 1), so two solutions for the same split are
/// identical in every field.
#[derive(Debug, Clone)]
pub struct Solution {
    score: u64,
    key: CanonicalKey,
    assignment: Assignment,
    states: GroupStates,
}

impl Solution {
    /// Canonicalizes `assignment`, then aggregates and scores it.
    pub fn evaluate(set: &EntitySet, weights: &Weights, assignment: &Assignment) -> Self {
        let key = CanonicalKey::of(set.entities(), assignment);
        Self::from_key(set, weights, key)
    }

    /// Aggregates and scores the split described by `key`.
    pub fn from_key(set: &EntitySet, weights: &Weights, key: CanonicalKey) -> Self {
        let assignment = key.oriented(set.entities());
        let states = aggregate(set.schema(), set.entities(), &assignment);
        let score = weights.score(&states);
        Self {
            score,
            key,
            assignment,
            states,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn key(&self) -> &CanonicalKey {
        &self.key
    }

    /// Labels in subset order, canonically oriented.
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn states(&self) -> &GroupStates {
        &self.states
    }

    /// Sorted identifiers of `group`.
    pub fn members(&self, group: Group) -> &[String] {
        self.key.members(group)
    }

    pub fn group_of(&self, id: &str) -> Option<Group> {
        self.key.group_of(id)
    }

    /// Identifier → group over the processed subset.
    pub fn assignment_map(&self) -> BTreeMap<String, Group> {
        Group::BOTH
            .iter()
            .flat_map(|&g| self.key.members(g).iter().map(move |id| (id.clone(), g)))
            .collect()
    }

    /// One entry per entity of `full`, in its order: the entity's group, or
    /// `None` when it was outside the processed subset.
    pub fn column_for(&self, full: &EntitySet) -> Vec<Option<Group>> {
        full.entities()
            .iter()
            .map(|e| self.key.group_of(e.id()))
            .collect()
    }

    /// Per-dimension differences under `weights`.
    pub fn breakdown(&self, weights: &Weights) -> ScoreBreakdown {
        weights.breakdown(&self.states)
    }
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.key == other.key
    }
}

impl Eq for Solution {}

impl PartialOrd for Solution {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Solution {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| self.key.cmp(&other.key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entity, Schema};

    fn set() -> EntitySet {
        EntitySet::new(
            Schema::new(["X", "Y"], ["flag"]),
            vec![
                Entity::new("P1", 0, vec![true]),
                Entity::new("P2", 0, vec![false]),
                Entity::new("P3", 1, vec![true]),
                Entity::new("P4", 1, vec![false]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_evaluate_orients_canonically() {
        let set = set();
        // P1, P4 in group 2
        let raw = Assignment::from_mask(0b1001, 4);
        let s = Solution::evaluate(&set, &Weights::default(), &raw);

        assert_eq!(s.score(), 0);
        assert_eq!(s.members(Group::First), ["P1", "P4"]);
        assert_eq!(s.assignment(), &raw.swapped());
        let relabeled = Solution::evaluate(&set, &Weights::default(), &raw.swapped());
        assert_eq!(s, relabeled);
    }

    #[test]
    fn test_assignment_map_and_column() {
        let set = set();
        let raw = Assignment::from_mask(0b0100, 4); // P3 alone
        let s = Solution::evaluate(&set, &Weights::default(), &raw);

        let map = s.assignment_map();
        assert_eq!(map.len(), 4);
        assert_eq!(map["P3"], Group::Second);
        assert_eq!(map["P1"], Group::First);

        let full = EntitySet::new(
            set.schema().clone(),
            vec![
                Entity::new("Z9", 1, vec![false]),
                Entity::new("P3", 1, vec![true]),
                Entity::new("P1", 0, vec![true]),
            ],
        )
        .unwrap();
        assert_eq!(
            s.column_for(&full),
            vec![None, Some(Group::Second), Some(Group::First)]
        );
    }

    #[test]
    fn test_ordering_is_score_then_key() {
        let set = set();
        let w = Weights::default();
        let lone_p1 = Solution::evaluate(&set, &w, &Assignment::from_mask(0b0001, 4));
        let lone_p3 = Solution::evaluate(&set, &w, &Assignment::from_mask(0b0100, 4));
        let balanced = Solution::evaluate(&set, &w, &Assignment::from_mask(0b1001, 4));

        assert_eq!(lone_p1.score(), 10);
        assert_eq!(lone_p3.score(), 10);
        assert!(balanced < lone_p1);
        // {P1} vs {P1, P2, P4}: the shorter prefix sorts first
        assert!(lone_p1 < lone_p3);
    }
}

//! Per-group attribute counters.

use serde::{Deserialize, Serialize};

use crate::model::{Entity, Schema};
use crate::partition::{Assignment, Group};

/// Counts for one group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupState {
    /// Number of members.
    pub total: u32,
    /// Members per categorical value, indexed like [`Schema::categories`].
    pub categories: Vec<u32>,
    /// Members with each flag set, indexed like [`Schema::flags`].
    pub flags: Vec<u32>,
}

impl GroupState {
    /// An empty group shaped for `schema`.
    pub fn empty(schema: &Schema) -> Self {
        Self {
            total: 0,
            categories: vec![0; schema.category_count()],
            flags: vec![0; schema.flag_count()],
        }
    }

    /// This state with `entity` added.
    pub fn with(&self, entity: &Entity) -> Self {
        let mut next = self.clone();
        next.add(entity);
        next
    }

    fn add(&mut self, entity: &Entity) {
        self.total += 1;
        if let Some(c) = self.categories.get_mut(entity.category()) {
            *c += 1;
        }
        for (count, &set) in self.flags.iter_mut().zip(entity.flags()) {
            if set {
                *count += 1;
            }
        }
    }
}

/// Counts for both groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupStates {
    pub first: GroupState,
    pub second: GroupState,
}

impl GroupStates {
    /// Both groups empty.
    pub fn empty(schema: &Schema) -> Self {
        Self {
            first: GroupState::empty(schema),
            second: GroupState::empty(schema),
        }
    }

    pub fn get(&self, group: Group) -> &GroupState {
        match group {
            Group::First => &self.first,
            Group::Second => &self.second,
        }
    }

    /// These states with `entity` added to `group`.
    pub fn with(&self, group: Group, entity: &Entity) -> Self {
        match group {
            Group::First => Self {
                first: self.first.with(entity),
                second: self.second.clone(),
            },
            Group::Second => Self {
                first: self.first.clone(),
                second: self.second.with(entity),
            },
        }
    }

    /// The pair with the groups exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            first: self.second.clone(),
            second: self.first.clone(),
        }
    }
}

/// Aggregates the group states of `assignment` over `entities`.
///
/// Each entity adds one to its group's total and one to every counter
/// whose predicate it satisfies. Entities without a label (a shorter
/// assignment) are not counted.
pub fn aggregate(schema: &Schema, entities: &[Entity], assignment: &Assignment) -> GroupStates {
    let mut states = GroupStates::empty(schema);
    for (entity, &group) in entities.iter().zip(assignment.labels()) {
        match group {
            Group::First => states.first.add(entity),
            Group::Second => states.second.add(entity),
        }
    }
    states
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new(["X", "Y"], ["flag"])
    }

    fn entities() -> Vec<Entity> {
        vec![
            Entity::new("P1", 0, vec![true]),
            Entity::new("P2", 0, vec![false]),
            Entity::new("P3", 1, vec![true]),
            Entity::new("P4", 1, vec![false]),
        ]
    }

    #[test]
    fn test_aggregate_counts() {
        // P2, P3 in group 2
        let a = Assignment::from_mask(0b0110, 4);
        let st = aggregate(&schema(), &entities(), &a);

        assert_eq!(st.first.total, 2);
        assert_eq!(st.first.categories, vec![1, 1]);
        assert_eq!(st.first.flags, vec![1]);
        assert_eq!(st.second.total, 2);
        assert_eq!(st.second.categories, vec![1, 1]);
        assert_eq!(st.second.flags, vec![1]);
    }

    #[test]
    fn test_aggregate_everyone_in_one_group() {
        let a = Assignment::new(vec![Group::Second; 4]);
        let st = aggregate(&schema(), &entities(), &a);
        assert_eq!(st.first, GroupState::empty(&schema()));
        assert_eq!(st.second.total, 4);
        assert_eq!(st.second.categories, vec![2, 2]);
        assert_eq!(st.second.flags, vec![2]);
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let es = entities();
        let empty = GroupStates::empty(&schema());
        let next = empty.with(Group::Second, &es[2]);
        assert_eq!(empty.second.total, 0);
        assert_eq!(next.second.total, 1);
        assert_eq!(next.second.categories, vec![0, 1]);
        assert_eq!(next.swapped().first, next.second);
    }

    #[test]
    fn test_aggregate_matches_incremental_build() {
        let es = entities();
        let a = Assignment::from_mask(0b0110, 4);
        let mut incremental = GroupStates::empty(&schema());
        for (e, &g) in es.iter().zip(a.labels()) {
            incremental = incremental.with(g, e);
        }
        assert_eq!(incremental, aggregate(&schema(), &es, &a));
    }
}

//! Group labels and assignments.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Entity;

/// One of the two target groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Group {
    First,
    Second,
}

impl Group {
    /// Both groups, in label order.
    pub const BOTH: [Group; 2] = [Group::First, Group::Second];

    /// The other group.
    pub fn other(self) -> Group {
        match self {
            Group::First => Group::Second,
            Group::Second => Group::First,
        }
    }

    /// 0 for the first group, 1 for the second.
    pub fn index(self) -> usize {
        match self {
            Group::First => 0,
            Group::Second => 1,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group {}", self.index() + 1)
    }
}

/// A total mapping from the entities of a subset to groups.
///
/// Positions follow the subset's entity order: `labels[i]` is the group
/// of the `i`-th entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    labels: Vec<Group>,
}

impl Assignment {
    pub fn new(labels: Vec<Group>) -> Self {
        Self { labels }
    }

    /// Decodes a label vector from the low `len` bits of `mask`: bit `i`
    /// set puts entity `i` in the second group.
    ///
    /// `len` must not exceed 64.
    pub fn from_mask(mask: u64, len: usize) -> Self {
        let labels = (0..len)
            .map(|i| {
                if (mask >> i) & 1 == 1 {
                    Group::Second
                } else {
                    Group::First
                }
            })
            .collect();
        Self { labels }
    }

    pub fn labels(&self) -> &[Group] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn group(&self, position: usize) -> Option<Group> {
        self.labels.get(position).copied()
    }

    /// The same split with the two labels exchanged.
    pub fn swapped(&self) -> Assignment {
        Assignment {
            labels: self.labels.iter().map(|g| g.other()).collect(),
        }
    }

    /// Sorted identifiers of the entities placed in `group`.
    pub fn members(&self, entities: &[Entity], group: Group) -> Vec<String> {
        let mut ids: Vec<String> = entities
            .iter()
            .zip(&self.labels)
            .filter(|&(_, &g)| g == group)
            .map(|(e, _)| e.id().to_string())
            .collect();
        ids.sort();
        ids
    }
}

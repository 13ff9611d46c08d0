//! Label-independent fingerprint of a two-group split.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::types::{Assignment, Group};
use crate::error::BalanceError;
use crate::model::Entity;

/// Canonical form of an unordered two-group split.
///
/// Holds the sorted identifier tuple of each group, with the
/// lexicographically smaller tuple first. Relabeling the groups yields the
/// same key, and two assignments share a key exactly when they induce the
/// same unordered split.
///
/// The derived ordering compares `(first, second)` lexicographically, which
/// is the tie-break used when ranking equally scored solutions.
///
/// Deserialized keys are re-normalized, so a stored key in either
/// orientation loads as the canonical one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "KeyParts")]
pub struct CanonicalKey {
    first: Vec<String>,
    second: Vec<String>,
}

#[derive(Deserialize)]
struct KeyParts {
    first: Vec<String>,
    second: Vec<String>,
}

impl TryFrom<KeyParts> for CanonicalKey {
    type Error = BalanceError;

    fn try_from(parts: KeyParts) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        for id in parts.first.iter().chain(&parts.second) {
            if !seen.insert(id.as_str()) {
                return Err(BalanceError::Validation(format!(
                    "identifier '{id}' appears in the key twice"
                )));
            }
        }
        Ok(Self::from_groups(parts.first, parts.second))
    }
}

impl CanonicalKey {
    /// Computes the key of `assignment` over `entities`.
    pub fn of(entities: &[Entity], assignment: &Assignment) -> Self {
        let a = assignment.members(entities, Group::First);
        let b = assignment.members(entities, Group::Second);
        Self::from_groups(a, b)
    }

    /// Builds a key from two identifier lists in either order.
    pub fn from_groups(mut a: Vec<String>, mut b: Vec<String>) -> Self {
        a.sort();
        b.sort();
        if b < a {
            std::mem::swap(&mut a, &mut b);
        }
        Self {
            first: a,
            second: b,
        }
    }

    /// Identifiers of group 1 (the smaller tuple).
    pub fn first(&self) -> &[String] {
        &self.first
    }

    /// Identifiers of group 2.
    pub fn second(&self) -> &[String] {
        &self.second
    }

    pub fn members(&self, group: Group) -> &[String] {
        match group {
            Group::First => &self.first,
            Group::Second => &self.second,
        }
    }

    /// Group of `id` under the canonical orientation.
    pub fn group_of(&self, id: &str) -> Option<Group> {
        let lookup = |ids: &[String]| ids.binary_search_by(|c| c.as_str().cmp(id)).is_ok();
        if lookup(self.first.as_slice()) {
            Some(Group::First)
        } else if lookup(self.second.as_slice()) {
            Some(Group::Second)
        } else {
            None
        }
    }

    /// Total number of identifiers across both groups.
    pub fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.second.is_empty()
    }

    /// Re-expresses the split as an assignment over `entities` in the
    /// canonical orientation: members of the smaller tuple get group 1.
    pub fn oriented(&self, entities: &[Entity]) -> Assignment {
        Assignment::new(
            entities
                .iter()
                .map(|e| match self.group_of(e.id()) {
                    Some(Group::First) => Group::First,
                    _ => Group::Second,
                })
                .collect(),
        )
    }
}

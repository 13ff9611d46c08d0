//! Seed orderings for greedy passes.

use std::cmp::Reverse;
use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::model::Entity;

/// A deterministic order in which a greedy pass places entities.
///
/// Deserializes from tagged tables, e.g. `{ type = "shuffled", seed = 7 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SeedOrdering {
    /// Input order.
    Original,
    /// Input order reversed.
    Reverse,
    /// Category ascending, entities with more leading flags set first,
    /// then identifier.
    ByAttributes,
    /// Identifier ascending.
    ByIdentifier,
    /// A pseudo-random permutation reproducible from `seed`.
    Shuffled { seed: u64 },
}

impl SeedOrdering {
    /// Positions of `entities` in placement order.
    pub fn order(&self, entities: &[Entity]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..entities.len()).collect();
        match *self {
            SeedOrdering::Original => {}
            SeedOrdering::Reverse => order.reverse(),
            SeedOrdering::ByAttributes => order.sort_by(|&a, &b| {
                let (ea, eb) = (&entities[a], &entities[b]);
                ea.category()
                    .cmp(&eb.category())
                    .then_with(|| Reverse(ea.flags()).cmp(&Reverse(eb.flags())))
                    .then_with(|| ea.id().cmp(eb.id()))
            }),
            SeedOrdering::ByIdentifier => {
                order.sort_by(|&a, &b| entities[a].id().cmp(entities[b].id()))
            }
            SeedOrdering::Shuffled { seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                order.shuffle(&mut rng);
            }
        }
        order
    }

    /// Default seed set: the four structural orders plus `shuffled`
    /// permutations seeded `1..=shuffled`.
    pub fn defaults(shuffled: u64) -> Vec<SeedOrdering> {
        let mut seeds = vec![
            SeedOrdering::Original,
            SeedOrdering::Reverse,
            SeedOrdering::ByAttributes,
            SeedOrdering::ByIdentifier,
        ];
        seeds.extend((1..=shuffled).map(|seed| SeedOrdering::Shuffled { seed }));
        seeds
    }
}

impl fmt::Display for SeedOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedOrdering::Original => write!(f, "original"),
            SeedOrdering::Reverse => write!(f, "reverse"),
            SeedOrdering::ByAttributes => write!(f, "by_attributes"),
            SeedOrdering::ByIdentifier => write!(f, "by_identifier"),
            SeedOrdering::Shuffled { seed } => write!(f, "shuffled({seed})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities() -> Vec<Entity> {
        vec![
            Entity::new("d", 1, vec![false]),
            Entity::new("b", 0, vec![false]),
            Entity::new("c", 1, vec![true]),
            Entity::new("a", 0, vec![true]),
        ]
    }

    #[test]
    fn test_structural_orders() {
        let es = entities();
        assert_eq!(SeedOrdering::Original.order(&es), vec![0, 1, 2, 3]);
        assert_eq!(SeedOrdering::Reverse.order(&es), vec![3, 2, 1, 0]);
        assert_eq!(SeedOrdering::ByIdentifier.order(&es), vec![3, 1, 2, 0]);
        // category 0 first; within a category, flagged entities first
        assert_eq!(SeedOrdering::ByAttributes.order(&es), vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_by_attributes_breaks_ties_by_id() {
        let es = vec![
            Entity::new("z", 0, vec![true]),
            Entity::new("y", 0, vec![true]),
        ];
        assert_eq!(SeedOrdering::ByAttributes.order(&es), vec![1, 0]);
    }

    #[test]
    fn test_shuffled_is_reproducible_permutation() {
        let es: Vec<Entity> = (0..20)
            .map(|i| Entity::new(format!("E{i}"), 0, vec![false]))
            .collect();
        let a = SeedOrdering::Shuffled { seed: 7 }.order(&es);
        let b = SeedOrdering::Shuffled { seed: 7 }.order(&es);
        assert_eq!(a, b);

        let mut sorted = a.clone();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_defaults() {
        let seeds = SeedOrdering::defaults(2);
        assert_eq!(seeds.len(), 6);
        assert_eq!(seeds[4], SeedOrdering::Shuffled { seed: 1 });
        assert_eq!(seeds[5].to_string(), "shuffled(2)");
        assert_eq!(SeedOrdering::defaults(0).len(), 4);
    }

    #[test]
    fn test_deserialize_tagged() {
        #[derive(Deserialize)]
        struct Wrapper {
            seeds: Vec<SeedOrdering>,
        }
        let w: Wrapper = toml::from_str(
            r#"seeds = [{ type = "reverse" }, { type = "shuffled", seed = 9 }]"#,
        )
        .unwrap();
        assert_eq!(
            w.seeds,
            vec![SeedOrdering::Reverse, SeedOrdering::Shuffled { seed: 9 }]
        );
    }
}

//! Scored solutions, deduplication and top-k selection.
//!
//! A [`Solution`] couples a canonical split with its group states and
//! score. Solutions order by `(score ascending, canonical key ascending)`,
//! which makes every ranking fully deterministic regardless of the order
//! in which candidates were generated.
//!
//! [`SolutionSet`] is the single deduplicating reducer both solvers feed:
//! it keeps one solution per [`CanonicalKey`](crate::partition::CanonicalKey)
//! and can be merged with other sets produced by independent workers.

mod selector;
mod solution;

pub use selector::{select_top_k, SolutionSet, DEFAULT_TOP_K};
pub use solution::Solution;

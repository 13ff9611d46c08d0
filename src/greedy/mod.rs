//! Greedy multi-seed fallback for subsets too large to enumerate.
//!
//! Each [`SeedOrdering`] fixes an order in which entities are placed. A
//! pass walks that order and puts each entity into whichever group yields
//! the lower score for the partial assignment; on a tie it prefers the
//! group with fewer members, then group 1. Every seed yields one candidate.
//! Candidates are canonicalized, deduplicated by canonical key and ranked
//! by `(score, canonical key)`.
//!
//! The result is a heuristic: it is not guaranteed to contain the global
//! optimum, and when several seeds converge on the same split the result
//! holds fewer solutions than there were seeds.
//!
//! Seeds are independent tasks; with the `parallel` feature they run on
//! rayon workers and feed a single deduplicating reducer.

mod config;
mod runner;
mod types;

pub use config::GreedyConfig;
pub use runner::GreedyRunner;
pub use types::SeedOrdering;

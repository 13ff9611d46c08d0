//! Exhaustive enumeration of two-group splits.
//!
//! For subsets of at most [`ExhaustiveConfig::threshold`] entities every
//! one of the `2^n` label vectors is generated, mirror images are collapsed
//! through their canonical key, and each distinct split is scored. The
//! result holds exactly `2^(n-1)` solutions for `n ≥ 1` (one for `n = 0`),
//! ranked by `(score, canonical key)`, so it is exact and reproducible.
//!
//! Larger subsets are refused with
//! [`BalanceError::CapacityExceeded`](crate::BalanceError::CapacityExceeded);
//! route those to the [`greedy`](crate::greedy) solver.
//!
//! With the `parallel` feature the mask space is cut into contiguous
//! shards that are enumerated independently and merged by key union.

mod config;
mod runner;

pub use config::{ExhaustiveConfig, DEFAULT_THRESHOLD, MAX_EXHAUSTIVE_THRESHOLD};
pub use runner::ExhaustiveEnumerator;

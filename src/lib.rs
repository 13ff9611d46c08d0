//! Balanced two-group partitioning.
//!
//! Splits a small set of entities into two groups so that the groups are
//! as similar as possible in size, in the distribution of one categorical
//! attribute, and in the counts of a few binary flags. Returns a ranked,
//! deduplicated shortlist of the best splits.
//!
//! - **Exhaustive**: every split of a subset up to a threshold (default
//!   12) is enumerated and scored; the ranking is exact.
//! - **Greedy**: larger subsets get a multi-seed greedy fallback whose
//!   ranking is heuristic.
//!
//! Splits that differ only by swapping the two group labels are the same
//! scenario and appear once. Ties are broken by a canonical key, so output
//! is reproducible regardless of parallel scheduling.
//!
//! # Modules
//!
//! - [`model`]: entities, schema and record loading
//! - [`partition`]: assignments and canonical keys
//! - [`scoring`]: group-state aggregation and weighted imbalance score
//! - [`ranking`]: solutions, deduplication and top-k selection
//! - [`exhaustive`], [`greedy`]: the two solvers
//! - [`balance`]: configuration and solver routing

pub mod balance;
pub mod error;
pub mod exhaustive;
pub mod greedy;
pub mod model;
pub mod partition;
pub mod ranking;
pub mod scoring;

pub use balance::{BalanceConfig, BalanceResult, BalanceRunner, Strategy};
pub use error::{BalanceError, Result};

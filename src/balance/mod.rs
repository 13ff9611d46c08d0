//! Top-level facade: route a subset to the right solver and rank the
//! result.
//!
//! [`BalanceRunner::solve`] sends subsets of at most
//! [`BalanceConfig::threshold`] entities to the
//! [`ExhaustiveEnumerator`](crate::exhaustive::ExhaustiveEnumerator) and
//! larger ones to the [`GreedyRunner`](crate::greedy::GreedyRunner), then
//! keeps the best [`BalanceConfig::top_k`] distinct splits.
//!
//! # Example
//!
//! ```
//! use u_partition::model::{Entity, EntitySet, Schema};
//! use u_partition::{BalanceConfig, BalanceRunner, Strategy};
//!
//! let schema = Schema::new(["boy", "girl"], ["greek"]);
//! let set = EntitySet::new(schema, vec![
//!     Entity::new("P1", 0, vec![true]),
//!     Entity::new("P2", 0, vec![false]),
//!     Entity::new("P3", 1, vec![true]),
//!     Entity::new("P4", 1, vec![false]),
//! ]).unwrap();
//!
//! let result = BalanceRunner::solve(&set, &BalanceConfig::default()).unwrap();
//! assert_eq!(result.strategy, Strategy::Exhaustive);
//! assert_eq!(result.best().unwrap().score(), 0);
//! ```

mod config;
mod report;
mod runner;

pub use config::BalanceConfig;
pub use report::{BalanceResult, GroupSummary, ScenarioSummary, Strategy};
pub use runner::BalanceRunner;

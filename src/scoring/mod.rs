//! Group-state aggregation and balance scoring.
//!
//! [`aggregate`] folds an assignment into an immutable [`GroupStates`]
//! value: per group, the member total, one counter per categorical value,
//! and one counter per flag. [`Weights`] turn that pair into a single
//! non-negative score, a weighted sum of absolute inter-group differences:
//!
//! ```text
//! score = w_pop · |total₁ − total₂|
//!       + Σ_c w_c · |cat_c₁ − cat_c₂|
//!       + Σ_f w_f · |flag_f₁ − flag_f₂|
//! ```
//!
//! Lower is better; zero means perfectly balanced on every tracked
//! dimension. The score depends only on absolute differences, so it is
//! symmetric under swapping the two groups.

mod state;
mod weights;

pub use state::{aggregate, GroupState, GroupStates};
pub use weights::{ScoreBreakdown, Weights};

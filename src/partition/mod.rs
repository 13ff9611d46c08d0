//! Two-group assignments and label-symmetry elimination.
//!
//! An [`Assignment`] maps every entity of a subset to one of two
//! [`Group`]s. Two assignments that differ only by swapping the group
//! labels describe the same split; [`CanonicalKey`] fingerprints the
//! unordered split so that such mirror images collapse to one scenario.
//!
//! The key is a pair of sorted identifier tuples, ordered so that the
//! lexicographically smaller tuple comes first. The same ordering fixes
//! the output orientation: the smaller tuple is always labeled group 1.
//! Both are pure functions of the split, independent of iteration order,
//! so parallel shards produce identical keys.

mod canonical;
mod types;

pub use canonical::CanonicalKey;
pub use types::{Assignment, Group};

//! Entity model.
//!
//! Entities are the discrete items being split into two groups. Each one
//! carries a stable identifier, exactly one value from a small categorical
//! domain, and a fixed number of binary flags. The [`Schema`] names that
//! domain and those flags; an [`EntitySet`] binds a schema to a validated
//! list of entities.
//!
//! Entities are immutable once loaded. The solvers never touch their
//! attributes; they only decide which group each one lands in.
//!
//! # Loading
//!
//! [`EntitySet::from_records`] turns loosely-typed [`EntityRecord`]s (for
//! example rows deserialized from a spreadsheet export) into a validated
//! set, normalizing category spellings and yes/no flag tokens.

mod entity;
mod loader;

pub use entity::{Entity, EntitySet, Schema};
pub use loader::{parse_flag, EntityRecord};

//! Normalization of loosely-typed records into an [`EntitySet`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntitySet, Schema};
use crate::error::{BalanceError, Result};

/// Tokens read as `true`; everything else reads as `false`.
const YES_TOKENS: [&str; 6] = ["Y", "YES", "TRUE", "1", "Ν", "ΝΑΙ"];

/// One raw input row.
///
/// Values are kept as strings so that spreadsheet-style exports
/// (`"Yes"`, `"1"`, `"Ν"`) can be normalized in one place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: Option<String>,
    pub category: Option<String>,
    /// Raw flag values keyed by flag name.
    #[serde(default)]
    pub flags: BTreeMap<String, String>,
}

impl EntityRecord {
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            category: Some(category.into()),
            flags: BTreeMap::new(),
        }
    }

    pub fn with_flag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.flags.insert(name.into(), value.into());
        self
    }
}

/// Parses a yes/no token.
///
/// # Examples
///
/// ```
/// use u_partition::model::parse_flag;
///
/// assert!(parse_flag(" yes "));
/// assert!(parse_flag("1"));
/// assert!(!parse_flag("no"));
/// assert!(!parse_flag(""));
/// ```
pub fn parse_flag(raw: &str) -> bool {
    let token = raw.trim().to_uppercase();
    YES_TOKENS.contains(&token.as_str())
}

impl EntitySet {
    /// Builds a validated set from raw records.
    ///
    /// Fails with [`BalanceError::Validation`] on a missing identifier, a
    /// missing or unknown category, or a missing flag column.
    pub fn from_records(schema: Schema, records: &[EntityRecord]) -> Result<EntitySet> {
        schema.validate()?;
        let mut entities = Vec::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            let id = record
                .id
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .ok_or_else(|| {
                    BalanceError::Validation(format!("record {row}: missing identifier"))
                })?;

            let raw_category = record.category.as_deref().ok_or_else(|| {
                BalanceError::Validation(format!("record {row} ('{id}'): missing category"))
            })?;
            let category = schema.category_index(raw_category).ok_or_else(|| {
                BalanceError::Validation(format!(
                    "record {row} ('{id}'): unknown category '{raw_category}'"
                ))
            })?;

            let flags = schema
                .flags
                .iter()
                .map(|name| {
                    record
                        .flags
                        .get(name)
                        .map(|v| parse_flag(v))
                        .ok_or_else(|| {
                            BalanceError::Validation(format!(
                                "record {row} ('{id}'): missing flag '{name}'"
                            ))
                        })
                })
                .collect::<Result<Vec<bool>>>()?;

            entities.push(Entity::new(id, category, flags));
        }
        EntitySet::new(schema, entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new(["Α", "Κ"], ["good_greek", "staff_child"])
            .with_alias("BOY", "Α")
            .with_alias("GIRL", "Κ")
    }

    #[test]
    fn test_parse_flag_tokens() {
        for yes in ["Y", "yes", "True", "1", "Ν", "ναι"] {
            assert!(parse_flag(yes), "{yes} should read as true");
        }
        for no in ["N", "no", "0", "false", "Ο", "maybe", ""] {
            assert!(!parse_flag(no), "{no} should read as false");
        }
    }

    #[test]
    fn test_records_are_normalized() {
        let records = vec![
            EntityRecord::new(" Anna ", "girl")
                .with_flag("good_greek", "Yes")
                .with_flag("staff_child", "0"),
            EntityRecord::new("Nikos", "α")
                .with_flag("good_greek", "Ο")
                .with_flag("staff_child", "Ν"),
        ];
        let set = EntitySet::from_records(schema(), &records).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.entities()[0].id(), "Anna");
        assert_eq!(set.entities()[0].category(), 1);
        assert_eq!(set.entities()[0].flags(), &[true, false]);
        assert_eq!(set.entities()[1].category(), 0);
        assert_eq!(set.entities()[1].flags(), &[false, true]);
    }

    #[test]
    fn test_missing_attributes_fail_validation() {
        let missing_id = EntityRecord {
            id: None,
            category: Some("boy".into()),
            flags: BTreeMap::new(),
        };
        assert!(matches!(
            EntitySet::from_records(schema(), &[missing_id]),
            Err(BalanceError::Validation(_))
        ));

        let unknown_category = EntityRecord::new("P1", "robot")
            .with_flag("good_greek", "1")
            .with_flag("staff_child", "1");
        let err = EntitySet::from_records(schema(), &[unknown_category]).unwrap_err();
        assert!(err.to_string().contains("robot"));

        let missing_flag = EntityRecord::new("P1", "boy").with_flag("good_greek", "1");
        let err = EntitySet::from_records(schema(), &[missing_flag]).unwrap_err();
        assert!(err.to_string().contains("staff_child"));
    }

    #[test]
    fn test_records_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Rows {
            rows: Vec<EntityRecord>,
        }

        let rows: Rows = toml::from_str(
            r#"
            [[rows]]
            id = "P1"
            category = "boy"
            flags = { good_greek = "yes", staff_child = "yes" }

            [[rows]]
            id = "P2"
            category = "girl"
            flags = { good_greek = "no", staff_child = "yes" }
            "#,
        )
        .unwrap();

        let set = EntitySet::from_records(schema(), &rows.rows).unwrap();
        assert_eq!(set.subset(|e| e.flag(1)).len(), 2);
    }
}

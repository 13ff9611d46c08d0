//! Schema, entity and validated entity set.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{BalanceError, Result};

/// Names the categorical domain and the binary flags tracked per entity.
///
/// # Examples
///
/// ```
/// use u_partition::model::Schema;
///
/// let schema = Schema::new(["boy", "girl"], ["good_greek"])
///     .with_alias("agori", "boy")
///     .with_alias("koritsi", "girl");
/// assert_eq!(schema.category_count(), 2);
/// assert_eq!(schema.category_index("AGORI"), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Categorical values, in counter order.
    pub categories: Vec<String>,
    /// Flag names, in counter order.
    pub flags: Vec<String>,
    /// Alternative spellings mapped onto a value of `categories`.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl Schema {
    /// Creates a schema without aliases.
    pub fn new<C, F>(categories: C, flags: F) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            flags: flags.into_iter().map(Into::into).collect(),
            aliases: BTreeMap::new(),
        }
    }

    /// Registers an alternative spelling for a categorical value.
    pub fn with_alias(mut self, alias: impl Into<String>, category: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), category.into());
        self
    }

    /// Number of categorical values.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of tracked flags.
    pub fn flag_count(&self) -> usize {
        self.flags.len()
    }

    /// Resolves a raw category label, case-insensitively, first against the
    /// domain values and then against the aliases.
    pub fn category_index(&self, raw: &str) -> Option<usize> {
        let wanted = raw.trim().to_uppercase();
        if wanted.is_empty() {
            return None;
        }
        let direct = |name: &str| {
            self.categories
                .iter()
                .position(|c| c.to_uppercase() == name)
        };
        direct(wanted.as_str()).or_else(|| {
            self.aliases
                .iter()
                .find(|(alias, _)| alias.to_uppercase() == wanted)
                .and_then(|(_, target)| direct(target.to_uppercase().as_str()))
        })
    }

    /// Index of a flag by name.
    pub fn flag_index(&self, name: &str) -> Option<usize> {
        self.flags.iter().position(|f| f == name)
    }

    /// Checks the schema itself: at least two categorical values, at least
    /// one flag, no duplicate names, and aliases pointing at real values.
    pub fn validate(&self) -> Result<()> {
        if self.categories.len() < 2 {
            return Err(BalanceError::Validation(
                "schema needs at least two categorical values".into(),
            ));
        }
        if self.flags.is_empty() {
            return Err(BalanceError::Validation(
                "schema needs at least one flag".into(),
            ));
        }
        let mut seen = HashSet::new();
        for c in &self.categories {
            if !seen.insert(c.to_uppercase()) {
                return Err(BalanceError::Validation(format!(
                    "duplicate categorical value '{c}'"
                )));
            }
        }
        let mut seen = HashSet::new();
        for f in &self.flags {
            if !seen.insert(f.as_str()) {
                return Err(BalanceError::Validation(format!("duplicate flag '{f}'")));
            }
        }
        for (alias, target) in &self.aliases {
            if !self
                .categories
                .iter()
                .any(|c| c.to_uppercase() == target.to_uppercase())
            {
                return Err(BalanceError::Validation(format!(
                    "alias '{alias}' points at unknown value '{target}'"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Schema {
    /// Two categorical values and a single flag.
    fn default() -> Self {
        Self::new(["A", "B"], ["flag"])
    }
}

/// One item to be assigned to a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    id: String,
    category: usize,
    flags: Vec<bool>,
}

impl Entity {
    /// Creates an entity. Consistency with a schema is checked when the
    /// entity joins an [`EntitySet`].
    pub fn new(id: impl Into<String>, category: usize, flags: Vec<bool>) -> Self {
        Self {
            id: id.into(),
            category,
            flags,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Index into [`Schema::categories`].
    pub fn category(&self) -> usize {
        self.category
    }

    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// Value of flag `j`; out-of-range indices read as `false`.
    pub fn flag(&self, j: usize) -> bool {
        self.flags.get(j).copied().unwrap_or(false)
    }
}

/// A schema plus a validated, ordered list of entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySet {
    schema: Schema,
    entities: Vec<Entity>,
}

impl EntitySet {
    /// Builds a set, rejecting blank or duplicate identifiers and entities
    /// inconsistent with the schema.
    pub fn new(schema: Schema, entities: Vec<Entity>) -> Result<Self> {
        schema.validate()?;
        let mut ids = HashSet::with_capacity(entities.len());
        for (pos, e) in entities.iter().enumerate() {
            let id = e.id.as_str();
            if id.trim().is_empty() {
                return Err(BalanceError::Validation(format!(
                    "entity at position {pos} has a blank identifier"
                )));
            }
            if !ids.insert(id) {
                return Err(BalanceError::Validation(format!(
                    "duplicate identifier '{id}'"
                )));
            }
            if e.category >= schema.category_count() {
                return Err(BalanceError::Validation(format!(
                    "entity '{id}' has category index {} but the schema defines {}",
                    e.category,
                    schema.category_count()
                )));
            }
            if e.flags.len() != schema.flag_count() {
                return Err(BalanceError::Validation(format!(
                    "entity '{id}' carries {} flags but the schema defines {}",
                    e.flags.len(),
                    schema.flag_count()
                )));
            }
        }
        Ok(Self { schema, entities })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Position of the entity with identifier `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entities.iter().position(|e| e.id == id)
    }

    /// Keeps the entities matching `selector`, preserving order.
    pub fn subset<F>(&self, selector: F) -> EntitySet
    where
        F: Fn(&Entity) -> bool,
    {
        EntitySet {
            schema: self.schema.clone(),
            entities: self
                .entities
                .iter()
                .filter(|e| selector(e))
                .cloned()
                .collect(),
        }
    }

    /// Keeps the entities whose mask entry is `true`.
    ///
    /// The mask must have one entry per entity.
    pub fn subset_mask(&self, mask: &[bool]) -> Result<EntitySet> {
        if mask.len() != self.entities.len() {
            return Err(BalanceError::Validation(format!(
                "selector has {} entries for {} entities",
                mask.len(),
                self.entities.len()
            )));
        }
        Ok(EntitySet {
            schema: self.schema.clone(),
            entities: self
                .entities
                .iter()
                .zip(mask)
                .filter(|&(_, &keep)| keep)
                .map(|(e, _)| e.clone())
                .collect(),
        })
    }
}

//! The `Category` entity.
//!
//! Invariant: `name` is never the empty string. Enforced by [`Category::new`],
//! [`Category::with_id`] and [`Category::rename`]; there is no other way to
//! change a name.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainValidator as validator};

/// Identity assigned by a repository on first save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(u64);

impl CategoryId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named category.
///
/// `id` stays `None` until a repository saves the category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: Option<CategoryId>,
    name: String,
}

impl Category {
    /// Create an unsaved category.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validator::validate_name(&name)?;
        Ok(Self { id: None, name })
    }

    /// Rebuild a category that a repository already identified.
    ///
    /// Storage adapters use this when loading snapshots, so a corrupted store
    /// cannot smuggle in an empty name.
    pub fn with_id(id: CategoryId, name: impl Into<String>) -> Result<Self, DomainError> {
        let mut category = Self::new(name)?;
        category.id = Some(id);
        Ok(category)
    }

    /// Replace the name in place. On error the previous name is kept.
    pub fn rename(&mut self, new_name: impl Into<String>) -> Result<(), DomainError> {
        let new_name = new_name.into();
        validator::validate_name(&new_name)?;
        self.name = new_name;
        Ok(())
    }

    /// Returns a copy carrying `id`. Only repositories should call this.
    pub fn identified(mut self, id: CategoryId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<CategoryId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "#{} {}", id, self.name),
            None => write!(f, "(unsaved) {}", self.name),
        }
    }
}

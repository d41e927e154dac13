//! Data carried across the use case boundary.
//!
//! Plain structs with public fields: no constructors, no validation. Rules
//! belong to `Category` and the use cases.

use serde::{Deserialize, Serialize};

/// Input for [`CreateCategory`](super::CreateCategory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryInput {
    pub name: String,
}

/// Input for [`RenameCategory`](super::RenameCategory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameCategoryInput {
    pub id: u64,
    pub new_name: String,
}

/// Output of both use cases: the persisted category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOutput {
    pub id: u64,
    pub name: String,
}

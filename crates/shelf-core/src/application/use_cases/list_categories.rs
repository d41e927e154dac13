//! List Categories - read-only view of the repository.

use tracing::instrument;

use crate::{
    application::{ApplicationError, CategoryOutput, ports::CategoryRepository},
    error::ShelfResult,
};

/// Query: every stored category, in save order.
pub struct ListCategories {
    repository: Box<dyn CategoryRepository>,
}

impl ListCategories {
    pub fn new(repository: Box<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip_all)]
    pub fn execute(&self) -> ShelfResult<Vec<CategoryOutput>> {
        self.repository
            .list()?
            .into_iter()
            .map(|category| -> ShelfResult<CategoryOutput> {
                let id = category.id().ok_or_else(|| ApplicationError::Persistence {
                    reason: format!("stored category '{}' has no id", category.name()),
                })?;
                Ok(CategoryOutput {
                    id: id.get(),
                    name: category.name().to_owned(),
                })
            })
            .collect()
    }
}

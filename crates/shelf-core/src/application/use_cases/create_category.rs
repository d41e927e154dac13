//! Create Category - validate, construct, persist.

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError, CategoryOutput, CreateCategoryInput, ports::CategoryRepository,
    },
    domain::{Category, DomainValidator as validator},
    error::ShelfResult,
};

/// Use case: add a new category to the repository.
pub struct CreateCategory {
    repository: Box<dyn CategoryRepository>,
}

impl CreateCategory {
    /// Create the use case with the repository it saves into.
    pub fn new(repository: Box<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// Run the use case.
    ///
    /// The name is checked here before anything else and again by
    /// `Category::new`; both checks stay. Nothing is saved when either fails.
    /// Repository errors are returned unchanged.
    #[instrument(skip_all, fields(name = %input.name))]
    pub fn execute(&self, input: CreateCategoryInput) -> ShelfResult<CategoryOutput> {
        validator::validate_name(&input.name)?;

        let category = Category::new(input.name)?;
        debug!("Category constructed");

        let saved = self.repository.save(Some(category))?;
        let id = saved.id().ok_or_else(|| ApplicationError::Persistence {
            reason: "repository returned a category without an id".into(),
        })?;

        info!(id = %id, "Category created");
        Ok(CategoryOutput {
            id: id.get(),
            name: saved.name().to_owned(),
        })
    }
}

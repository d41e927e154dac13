//! Rename Category - look up, rename, persist.

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError, CategoryOutput, RenameCategoryInput, ports::CategoryRepository,
    },
    domain::{CategoryId, DomainValidator as validator},
    error::ShelfResult,
};

/// Use case: change the name of a stored category.
pub struct RenameCategory {
    repository: Box<dyn CategoryRepository>,
}

impl RenameCategory {
    pub fn new(repository: Box<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// Run the use case.
    ///
    /// An empty `new_name` is rejected before the lookup, so it reports a
    /// validation error even for unknown ids. Unknown ids fail with
    /// `ApplicationError::NotFound` and leave the store untouched.
    #[instrument(skip_all, fields(id = input.id, new_name = %input.new_name))]
    pub fn execute(&self, input: RenameCategoryInput) -> ShelfResult<CategoryOutput> {
        validator::validate_name(&input.new_name)?;

        let id = CategoryId::new(input.id);
        let mut category = self.repository.find_by_id(id)?;
        let previous = category.name().to_owned();

        category.rename(input.new_name)?;
        let saved = self.repository.save(Some(category))?;

        let saved_id = saved.id().ok_or_else(|| ApplicationError::Persistence {
            reason: "repository returned a category without an id".into(),
        })?;

        info!(from = %previous, to = %saved.name(), "Category renamed");
        Ok(CategoryOutput {
            id: saved_id.get(),
            name: saved.name().to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::ports::MockCategoryRepository,
        domain::{Category, DomainError},
        error::ShelfError,
    };

    fn stored(id: u64, name: &str) -> Category {
        Category::with_id(CategoryId::new(id), name).unwrap()
    }

    fn input(id: u64, new_name: &str) -> RenameCategoryInput {
        RenameCategoryInput {
            id,
            new_name: new_name.into(),
        }
    }

    #[test]
    fn renames_and_resaves_under_same_id() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id()
            .withf(|id| *id == CategoryId::new(2))
            .times(1)
            .returning(|id| Ok(stored(id.get(), "Books")));
        repo.expect_save()
            .withf(|c| matches!(c, Some(c) if c.name() == "Novels" && c.id() == Some(CategoryId::new(2))))
            .times(1)
            .returning(|c| Ok(c.unwrap()));

        let output = RenameCategory::new(Box::new(repo))
            .execute(input(2, "Novels"))
            .unwrap();

        assert_eq!(
            output,
            CategoryOutput {
                id: 2,
                name: "Novels".into()
            }
        );
    }

    #[test]
    fn unknown_id_is_not_found_and_nothing_is_saved() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Err(ApplicationError::NotFound { id }.into()));
        repo.expect_save().never();

        let err = RenameCategory::new(Box::new(repo))
            .execute(input(42, "Anything"))
            .unwrap_err();

        assert_eq!(
            err,
            ShelfError::Application(ApplicationError::NotFound {
                id: CategoryId::new(42)
            })
        );
    }

    #[test]
    fn empty_name_is_rejected_before_lookup() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id().never();
        repo.expect_save().never();

        let err = RenameCategory::new(Box::new(repo))
            .execute(input(1, ""))
            .unwrap_err();

        assert_eq!(err, ShelfError::Domain(DomainError::EmptyName));
    }

    #[test]
    fn save_failure_propagates_unchanged() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(stored(id.get(), "Books")));
        repo.expect_save().returning(|_| {
            Err(ApplicationError::Persistence {
                reason: "disk full".into(),
            }
            .into())
        });

        let err = RenameCategory::new(Box::new(repo))
            .execute(input(1, "Novels"))
            .unwrap_err();

        assert_eq!(
            err,
            ShelfError::Application(ApplicationError::Persistence {
                reason: "disk full".into()
            })
        );
    }
}

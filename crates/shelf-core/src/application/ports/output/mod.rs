//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `shelf-adapters` crate provides implementations.

use crate::domain::{Category, CategoryId};
use crate::error::ShelfResult;

#[cfg(test)]
use mockall::automock;

/// Port for category persistence.
///
/// Implemented by:
/// - `shelf_adapters::repository::InMemoryCategoryRepository` (process lifetime)
/// - `shelf_adapters::repository::JsonFileRepository` (JSON file on disk)
///
/// ## Contract
///
/// - Ids are positive, unique, and assigned in save order starting at 1.
/// - Implementations store copies: mutating a returned `Category` never
///   changes what is stored.
/// - `save` and every read must be atomic with respect to each other when
///   the repository is shared across threads.
#[cfg_attr(test, automock)]
pub trait CategoryRepository: Send + Sync {
    /// Persist a category and return the stored copy.
    ///
    /// - `None` fails with `ApplicationError::NilEntity`.
    /// - A category without an id gets the next id and is appended.
    /// - A category with an id replaces the stored snapshot for that id, or
    ///   fails with `ApplicationError::NotFound` if there is none.
    fn save(&self, category: Option<Category>) -> ShelfResult<Category>;

    /// Fetch a copy of the stored category with `id`.
    fn find_by_id(&self, id: CategoryId) -> ShelfResult<Category>;

    /// All stored categories in save order.
    fn list(&self) -> ShelfResult<Vec<Category>>;
}

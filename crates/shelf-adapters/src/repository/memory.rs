//! In-memory category repository.

use std::sync::{Arc, RwLock};

use tracing::debug;

use shelf_core::{
    application::{ApplicationError, ports::CategoryRepository},
    domain::{Category, CategoryId},
    error::ShelfResult,
};

use super::store::CategoryStore;

/// Thread-safe in-memory category repository.
///
/// Clones share the same store, so one instance can be handed to several
/// use cases. One lock covers both the snapshots and the id counter.
#[derive(Debug, Clone)]
pub struct InMemoryCategoryRepository {
    inner: Arc<RwLock<CategoryStore>>,
}

impl InMemoryCategoryRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(CategoryStore::new())),
        }
    }

    /// Get the number of stored categories.
    pub fn len(&self) -> ShelfResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.records().len())
    }

    /// Check if repository is empty.
    pub fn is_empty(&self) -> ShelfResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for InMemoryCategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryRepository for InMemoryCategoryRepository {
    fn save(&self, category: Option<Category>) -> ShelfResult<Category> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let saved = inner.save(category)?;
        debug!(category = %saved, "Saved to memory");
        Ok(saved)
    }

    fn find_by_id(&self, id: CategoryId) -> ShelfResult<Category> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.find_by_id(id)
    }

    fn list(&self) -> ShelfResult<Vec<Category>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.records().to_vec())
    }
}

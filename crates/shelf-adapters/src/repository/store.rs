//! Snapshot collection shared by the repository adapters.

use shelf_core::{
    application::ApplicationError,
    domain::{Category, CategoryId},
    error::ShelfResult,
};

/// Ordered snapshots plus the next id to hand out.
///
/// Not synchronised; adapters wrap it in a lock.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryStore {
    records: Vec<Category>,
    next_id: u64,
}

impl CategoryStore {
    pub(crate) fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a store from persisted parts, checking the id invariants.
    pub(crate) fn restore(records: Vec<Category>, next_id: u64) -> ShelfResult<Self> {
        if next_id == 0 {
            return Err(ApplicationError::Persistence {
                reason: "stored next_id must be at least 1".into(),
            }
            .into());
        }

        let mut seen = Vec::with_capacity(records.len());
        for record in &records {
            let id = record.id().ok_or_else(|| ApplicationError::Persistence {
                reason: format!("stored category '{}' has no id", record.name()),
            })?;
            if id.get() == 0 || id.get() >= next_id || seen.contains(&id) {
                return Err(ApplicationError::Persistence {
                    reason: format!("stored category id {} is invalid or duplicated", id),
                }
                .into());
            }
            seen.push(id);
        }
        Ok(Self { records, next_id })
    }

    pub(crate) fn save(&mut self, category: Option<Category>) -> ShelfResult<Category> {
        let category = category.ok_or(ApplicationError::NilEntity)?;

        match category.id() {
            None => {
                let following = self.next_id.checked_add(1).ok_or_else(|| {
                    ApplicationError::Persistence {
                        reason: "category id space exhausted".into(),
                    }
                })?;
                let saved = category.identified(CategoryId::new(self.next_id));
                self.records.push(saved.clone());
                self.next_id = following;
                Ok(saved)
            }
            Some(id) => {
                let slot = self
                    .records
                    .iter_mut()
                    .find(|stored| stored.id() == Some(id))
                    .ok_or(ApplicationError::NotFound { id })?;
                *slot = category.clone();
                Ok(category)
            }
        }
    }

    pub(crate) fn find_by_id(&self, id: CategoryId) -> ShelfResult<Category> {
        self.records
            .iter()
            .find(|stored| stored.id() == Some(id))
            .cloned()
            .ok_or_else(|| ApplicationError::NotFound { id }.into())
    }

    pub(crate) fn records(&self) -> &[Category] {
        &self.records
    }

    pub(crate) fn next_id(&self) -> u64 {
        self.next_id
    }
}

impl Default for CategoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::error::ShelfError;

    #[test]
    fn ids_follow_save_order() {
        let mut store = CategoryStore::new();
        for (i, name) in ["a", "b", "c"].into_iter().enumerate() {
            let saved = store.save(Some(Category::new(name).unwrap())).unwrap();
            assert_eq!(saved.id(), Some(CategoryId::new(i as u64 + 1)));
        }
        assert_eq!(store.next_id(), 4);
    }

    #[test]
    fn nil_entity_is_rejected() {
        let mut store = CategoryStore::new();
        assert_eq!(
            store.save(None),
            Err(ShelfError::Application(ApplicationError::NilEntity))
        );
        assert!(store.records().is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn identified_save_replaces_in_place() {
        let mut store = CategoryStore::new();
        let mut first = store.save(Some(Category::new("a").unwrap())).unwrap();
        store.save(Some(Category::new("b").unwrap())).unwrap();

        first.rename("A").unwrap();
        store.save(Some(first)).unwrap();

        let names: Vec<_> = store.records().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["A", "b"]);
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn unknown_identified_save_is_not_found() {
        let mut store = CategoryStore::new();
        let stray = Category::with_id(CategoryId::new(5), "x").unwrap();
        assert_eq!(
            store.save(Some(stray)),
            Err(ShelfError::Application(ApplicationError::NotFound {
                id: CategoryId::new(5)
            }))
        );
    }

    #[test]
    fn restore_rejects_duplicate_ids() {
        let a = Category::with_id(CategoryId::new(1), "a").unwrap();
        let b = Category::with_id(CategoryId::new(1), "b").unwrap();
        assert!(CategoryStore::restore(vec![a, b], 3).is_err());
    }

    #[test]
    fn restore_rejects_ids_beyond_counter() {
        let a = Category::with_id(CategoryId::new(4), "a").unwrap();
        assert!(CategoryStore::restore(vec![a.clone()], 4).is_err());
        assert!(CategoryStore::restore(vec![a], 5).is_ok());
    }

    #[test]
    fn restore_rejects_zero_counter() {
        assert!(matches!(
            CategoryStore::restore(Vec::new(), 0),
            Err(ShelfError::Application(ApplicationError::Persistence { .. }))
        ));
    }

    #[test]
    fn exhausted_counter_refuses_new_saves() {
        let mut store = CategoryStore::restore(Vec::new(), u64::MAX).unwrap();
        assert!(matches!(
            store.save(Some(Category::new("a").unwrap())),
            Err(ShelfError::Application(ApplicationError::Persistence { .. }))
        ));
        assert!(store.records().is_empty());
        assert_eq!(store.next_id(), u64::MAX);
    }
}

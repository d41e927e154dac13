//! Category repository persisted as a JSON document.
//!
//! File layout:
//!
//! ```json
//! { "next_id": 3, "categories": [{ "id": 1, "name": "Books" }, { "id": 2, "name": "Toys" }] }
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use shelf_core::{
    application::{ApplicationError, ports::CategoryRepository},
    domain::{Category, CategoryId},
    error::{ShelfError, ShelfResult},
};

use super::store::CategoryStore;

#[derive(Debug, Serialize, Deserialize)]
struct StoredFile {
    next_id: u64,
    categories: Vec<StoredCategory>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredCategory {
    id: CategoryId,
    name: String,
}

/// Repository backed by a JSON file.
///
/// The whole document is loaded on [`open`](Self::open) and rewritten after
/// every successful save. The in-memory copy only changes once the write
/// succeeded, so the file and the store never disagree.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
    inner: Arc<RwLock<CategoryStore>>,
}

impl JsonFileRepository {
    /// Open the repository at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> ShelfResult<Self> {
        let path = path.into();
        let store = match fs::read(&path) {
            Ok(bytes) => decode(&bytes, &path)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No category file yet, starting empty");
                CategoryStore::new()
            }
            Err(e) => return Err(map_io_error(&path, e, "read")),
        };

        info!(
            path = %path.display(),
            categories = store.records().len(),
            "Opened category file"
        );

        Ok(Self {
            path,
            inner: Arc::new(RwLock::new(store)),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, store: &CategoryStore) -> ShelfResult<()> {
        let document = StoredFile {
            next_id: store.next_id(),
            categories: store
                .records()
                .iter()
                .filter_map(|c| {
                    c.id().map(|id| StoredCategory {
                        id,
                        name: c.name().to_owned(),
                    })
                })
                .collect(),
        };

        let bytes = serde_json::to_vec_pretty(&document).map_err(|e| {
            ApplicationError::Persistence {
                reason: format!("failed to encode {}: {}", self.path.display(), e),
            }
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| map_io_error(parent, e, "create"))?;
            }
        }

        // Write next to the target and rename so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes).map_err(|e| map_io_error(&tmp, e, "write"))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(map_io_error(&self.path, e, "replace"));
        }
        Ok(())
    }
}

impl CategoryRepository for JsonFileRepository {
    fn save(&self, category: Option<Category>) -> ShelfResult<Category> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut next = inner.clone();
        let saved = next.save(category)?;
        self.persist(&next)?;
        *inner = next;

        debug!(category = %saved, path = %self.path.display(), "Saved to file");
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

fn decode(bytes: &[u8], path: &Path) -> ShelfResult<CategoryStore> {
    let document: StoredFile =
        serde_json::from_slice(bytes).map_err(|e| ApplicationError::Persistence {
            reason: format!("{} is not a valid category file: {}", path.display(), e),
        })?;

    let records = document
        .categories
        .into_iter()
        .map(|c| Category::with_id(c.id, c.name).map_err(ShelfError::from))
        .collect::<ShelfResult<Vec<_>>>()?;

    CategoryStore::restore(records, document.next_id)
}

fn map_io_error(path: &Path, err: io::Error, action: &str) -> ShelfError {
    ApplicationError::Persistence {
        reason: format!("failed to {} {}: {}", action, path.display(), err),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn category(name: &str) -> Option<Category> {
        Some(Category::new(name).unwrap())
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::open(dir.path().join("categories.json")).unwrap();
        assert!(repo.list().unwrap().is_empty());
        assert!(!repo.path().exists());
    }

    #[test]
    fn saves_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("categories.json");

        let repo = JsonFileRepository::open(&path).unwrap();
        repo.save(category("Books")).unwrap();
        let mut toys = repo.save(category("Toys")).unwrap();
        toys.rename("Games").unwrap();
        repo.save(Some(toys)).unwrap();

        let reopened = JsonFileRepository::open(&path).unwrap();
        let names: Vec<_> = reopened
            .list()
            .unwrap()
            .into_iter()
            .map(|c| c.name().to_owned())
            .collect();
        assert_eq!(names, ["Books", "Games"]);

        let third = reopened.save(category("Music")).unwrap();
        assert_eq!(third.id(), Some(CategoryId::new(3)));
    }

    #[test]
    fn nil_entity_does_not_touch_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("categories.json");
        let repo = JsonFileRepository::open(&path).unwrap();

        assert_eq!(
            repo.save(None),
            Err(ShelfError::Application(ApplicationError::NilEntity))
        );
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_file_is_a_persistence_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("categories.json");
        fs::write(&path, b"not json").unwrap();

        assert!(matches!(
            JsonFileRepository::open(&path),
            Err(ShelfError::Application(ApplicationError::Persistence { .. }))
        ));
    }

    #[test]
    fn failed_write_leaves_store_and_disk_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("categories.json");
        let repo = JsonFileRepository::open(&path).unwrap();
        repo.save(category("Books")).unwrap();

        // A directory in place of the file makes the final rename fail.
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(matches!(
            repo.save(category("Toys")),
            Err(ShelfError::Application(ApplicationError::Persistence { .. }))
        ));

        let names: Vec<_> = repo
            .list()
            .unwrap()
            .into_iter()
            .map(|c| c.name().to_owned())
            .collect();
        assert_eq!(names, ["Books"]);
        assert!(!path.with_extension("json.tmp").exists());

        // The counter did not move either.
        fs::remove_dir(&path).unwrap();
        let toys = repo.save(category("Toys")).unwrap();
        assert_eq!(toys.id(), Some(CategoryId::new(2)));
    }

    #[test]
    fn zero_counter_is_rejected_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("categories.json");
        fs::write(&path, br#"{"next_id":0,"categories":[]}"#).unwrap();

        assert!(matches!(
            JsonFileRepository::open(&path),
            Err(ShelfError::Application(ApplicationError::Persistence { .. }))
        ));
    }

    #[test]
    fn exhausted_counter_fails_without_writing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("categories.json");
        let document = format!(r#"{{"next_id":{},"categories":[]}}"#, u64::MAX);
        fs::write(&path, &document).unwrap();

        let repo = JsonFileRepository::open(&path).unwrap();
        assert!(matches!(
            repo.save(category("Books")),
            Err(ShelfError::Application(ApplicationError::Persistence { .. }))
        ));
        assert!(repo.list().unwrap().is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), document);
    }

    #[test]
    fn empty_stored_name_is_rejected_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("categories.json");
        fs::write(&path, br#"{"next_id":2,"categories":[{"id":1,"name":""}]}"#).unwrap();

        assert!(matches!(
            JsonFileRepository::open(&path),
            Err(ShelfError::Domain(_))
        ));
    }
}

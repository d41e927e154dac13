//! Command handlers. Each one turns parsed arguments into use case input,
//! runs the use case, and hands the output to the [`OutputManager`].
//!
//! [`OutputManager`]: crate::output::OutputManager

pub mod completions;
pub mod config;
pub mod create;
pub mod init;
pub mod list;
pub mod rename;

use tracing::debug;

use shelf_adapters::{InMemoryCategoryRepository, JsonFileRepository};
use shelf_core::application::ports::CategoryRepository;

use crate::{
    cli::{GlobalArgs, StoreBackend},
    config::AppConfig,
    error::CliResult,
};

/// Open the repository selected by `--store`, falling back to the config.
pub fn open_repository(
    global: &GlobalArgs,
    config: &AppConfig,
) -> CliResult<Box<dyn CategoryRepository>> {
    let backend = global.store.unwrap_or(config.storage.backend);
    debug!(%backend, "Opening category repository");

    match backend {
        StoreBackend::Memory => Ok(Box::new(InMemoryCategoryRepository::new())),
        StoreBackend::File => Ok(Box::new(JsonFileRepository::open(config.data_path())?)),
    }
}

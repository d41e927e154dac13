//! Category repository adapters.

mod json_file;
mod memory;
mod store;

pub use json_file::JsonFileRepository;
pub use memory::InMemoryCategoryRepository;

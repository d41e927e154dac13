//! Infrastructure adapters for Shelf.
//!
//! This crate implements the ports defined in `shelf-core::application::ports`
//! and the presenters that turn use case output into wire formats. It
//! contains all external dependencies and I/O operations.

pub mod presenter;
pub mod repository;

// Re-export commonly used adapters
pub use presenter::{CategoryPresenter, WireFormat};
pub use repository::{InMemoryCategoryRepository, JsonFileRepository};

//! Application layer for Shelf.
//!
//! This layer contains:
//! - **Use cases**: one orchestrated action each (CreateCategory, RenameCategory)
//! - **DTOs**: plain data crossing the use case boundary
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. All invariants live in `crate::domain`.

pub mod dto;
pub mod error;
pub mod ports;
pub mod use_cases;

pub use dto::{CategoryOutput, CreateCategoryInput, RenameCategoryInput};
pub use use_cases::{CreateCategory, ListCategories, RenameCategory};

// Re-export port traits (for adapter implementation)
pub use ports::CategoryRepository;

pub use error::ApplicationError;

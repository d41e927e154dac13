//! Shelf Core - Clean Architecture Implementation
//!
//! This crate provides the domain and application layers for the Shelf
//! category catalogue, following the ports and adapters architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            shelf-cli (CLI)              │
//! │   (Controller: args -> use case input)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │              Use Cases                  │
//! │     (CreateCategory, RenameCategory)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │          (CategoryRepository)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     shelf-adapters (Infrastructure)     │
//! │ (InMemory / JsonFile repos, presenter)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │               (Category)                │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shelf_core::application::{CreateCategory, CreateCategoryInput};
//!
//! // `repository` is any `Box<dyn CategoryRepository>`
//! let create = CreateCategory::new(repository);
//! let output = create
//!     .execute(CreateCategoryInput { name: "Electronics".into() })
//!     .unwrap();
//! assert_eq!(output.id, 1);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CategoryOutput, CreateCategory, CreateCategoryInput, ListCategories, RenameCategory,
        RenameCategoryInput, ports::CategoryRepository,
    };
    pub use crate::domain::{Category, CategoryId};
    pub use crate::error::{ShelfError, ShelfResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Core domain layer for Shelf.
//!
//! This module contains pure business logic. All persistence and formatting
//! concerns are handled via ports (traits) defined in the application layer.
//!
//! ## Clean Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Value semantics**: Entities are `Clone + PartialEq`; stores keep copies
//! - **Rich domain model**: Invariants live in the entity, not in services

pub mod entities;
pub mod error;

mod validation;

pub use entities::category::{Category, CategoryId};
pub use error::DomainError;
pub use validation::DomainValidator;

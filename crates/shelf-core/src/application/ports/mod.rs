//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world. Adapters
//! in `shelf-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `CategoryRepository`: Category persistence
//!
//! - **Driving (Input) Ports**: the use cases themselves, called by the CLI

pub mod output;

pub use output::CategoryRepository;

#[cfg(test)]
pub use output::MockCategoryRepository;

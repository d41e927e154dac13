pub mod category;

pub use crate::domain::DomainError;
pub use category::{Category, CategoryId};

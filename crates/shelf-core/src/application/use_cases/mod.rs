//! Use cases - one orchestrated action each.
//!
//! Create and rename both end in a save but change for different reasons, so
//! they are separate types with separate code paths.

pub mod create_category;
pub mod list_categories;
pub mod rename_category;

pub use create_category::CreateCategory;
pub use list_categories::ListCategories;
pub use rename_category::RenameCategory;

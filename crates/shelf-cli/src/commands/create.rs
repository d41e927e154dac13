//! `shelf create`: add a category.

use shelf_core::application::{CreateCategory, CreateCategoryInput};

use crate::{
    cli::{CreateArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let repository = super::open_repository(&global, &config)?;

    let result = CreateCategory::new(repository).execute(CreateCategoryInput { name: args.name })?;

    output.category("Created", &result)
}

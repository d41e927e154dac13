//! `shelf rename`: change the name of a stored category.

use shelf_core::application::{RenameCategory, RenameCategoryInput};

use crate::{
    cli::{GlobalArgs, RenameArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: RenameArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let repository = super::open_repository(&global, &config)?;

    let result = RenameCategory::new(repository).execute(RenameCategoryInput {
        id: args.id,
        new_name: args.new_name,
    })?;

    output.category("Renamed", &result)
}

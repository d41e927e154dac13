//! `shelf list`: print every stored category.

use shelf_core::application::ListCategories;

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let repository = super::open_repository(&global, &config)?;
    let categories = ListCategories::new(repository).execute()?;
    output.categories(&categories)
}

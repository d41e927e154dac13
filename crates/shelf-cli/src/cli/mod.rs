//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat, StoreBackend};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "shelf",
    bin_name = "shelf",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "Manage a catalogue of named categories",
    long_about = "Shelf creates, renames, and lists categories, storing them \
                  in memory or in a JSON file and printing results as text, \
                  JSON, or XML.",
    after_help = "EXAMPLES:\n\
        \x20 shelf create Electronics\n\
        \x20 shelf rename 1 Gadgets --format xml\n\
        \x20 shelf list --format json\n\
        \x20 shelf completions bash > /usr/share/bash-completion/completions/shelf",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new category.
    #[command(
        visible_alias = "add",
        about = "Create a category",
        after_help = "EXAMPLES:\n\
            \x20 shelf create Electronics\n\
            \x20 shelf create \"Garden & Outdoor\" --format json"
    )]
    Create(CreateArgs),

    /// Rename an existing category.
    #[command(
        visible_alias = "mv",
        about = "Rename a category",
        after_help = "EXAMPLES:\n\
            \x20 shelf rename 1 Gadgets\n\
            \x20 shelf rename 2 Novels --format xml"
    )]
    Rename(RenameArgs),

    /// List stored categories.
    #[command(
        visible_alias = "ls",
        about = "List categories",
        after_help = "EXAMPLES:\n\
            \x20 shelf list\n\
            \x20 shelf list --format xml"
    )]
    List,

    /// Initialise a Shelf configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 shelf init\n\
            \x20 shelf init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 shelf completions bash > ~/.local/share/bash-completion/completions/shelf\n\
            \x20 shelf completions zsh  > ~/.zfunc/_shelf\n\
            \x20 shelf completions fish > ~/.config/fish/completions/shelf.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Shelf configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 shelf config get storage.backend\n\
            \x20 shelf config list\n\
            \x20 shelf config path"
    )]
    Config(ConfigCommands),
}

// ── create / rename ───────────────────────────────────────────────────────────

/// Arguments for `shelf create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Category name. Must not be empty.
    #[arg(value_name = "NAME", help = "Category name")]
    pub name: String,
}

/// Arguments for `shelf rename`.
#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Id printed by `shelf create` or `shelf list`.
    #[arg(value_name = "ID", help = "Category id")]
    pub id: u64,

    /// New category name. Must not be empty.
    #[arg(value_name = "NEW_NAME", help = "New category name")]
    pub new_name: String,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `shelf init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `shelf completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `shelf config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `storage.backend`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_create_command() {
        let cli = Cli::parse_from(["shelf", "create", "Electronics"]);
        match cli.command {
            Commands::Create(args) => assert_eq!(args.name, "Electronics"),
            other => panic!("expected Create, got {other:?}"),
        }
    }

    #[test]
    fn create_accepts_empty_name_so_the_core_can_reject_it() {
        let cli = Cli::parse_from(["shelf", "create", ""]);
        assert!(matches!(cli.command, Commands::Create(ref a) if a.name.is_empty()));
    }

    #[test]
    fn parse_rename_with_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "shelf", "rename", "3", "Novels", "--format", "xml", "--store", "memory",
        ]);
        assert_eq!(cli.global.format, OutputFormat::Xml);
        assert_eq!(cli.global.store, Some(StoreBackend::Memory));
        match cli.command {
            Commands::Rename(args) => {
                assert_eq!(args.id, 3);
                assert_eq!(args.new_name, "Novels");
            }
            other => panic!("expected Rename, got {other:?}"),
        }
    }

    #[test]
    fn rename_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["shelf", "rename", "abc", "x"]).is_err());
    }

    #[test]
    fn list_alias() {
        let cli = Cli::parse_from(["shelf", "ls"]);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["shelf", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }

    /// Parse `shelf list` with the `--no-color` env source renamed to `var`,
    /// so tests never touch the real `NO_COLOR`.
    fn no_color_from_env(var: &str, value: &str) -> bool {
        use clap::{CommandFactory, FromArgMatches};

        // SAFETY: each caller uses its own variable name.
        unsafe { std::env::set_var(var, value) };
        let matches = Cli::command()
            .mut_arg("no_color", |arg| arg.env(var.to_owned()))
            .try_get_matches_from(["shelf", "list"])
            .unwrap();
        Cli::from_arg_matches(&matches).unwrap().global.no_color
    }

    #[test]
    fn no_color_env_accepts_one() {
        assert!(no_color_from_env("SHELF_TEST_NO_COLOR_ONE", "1"));
    }

    #[test]
    fn no_color_env_accepts_any_non_falsey_value() {
        assert!(no_color_from_env("SHELF_TEST_NO_COLOR_YES", "yes please"));
        assert!(!no_color_from_env("SHELF_TEST_NO_COLOR_OFF", "0"));
    }

    #[test]
    fn output_format_from_str_ignores_case() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}

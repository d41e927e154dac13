//! Output management and formatting.
//!
//! Human output goes through [`Term`] with optional colour. JSON and XML are
//! rendered by the presenters in `shelf-adapters` and always written, even in
//! quiet mode, so scripts can rely on them.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use shelf_adapters::{CategoryPresenter, WireFormat, presenter::present_many};
use shelf_core::application::CategoryOutput;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--format` wins over `output.format`; `auto` resolves to human on a
    /// terminal and JSON otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> CliResult<Self> {
        let requested = if args.format == OutputFormat::Auto {
            config
                .output
                .format
                .parse::<OutputFormat>()
                .map_err(|e| CliError::ConfigError {
                    message: format!("output.format: {e}"),
                    source: None,
                })?
        } else {
            args.format
        };

        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Json
            }
        } else {
            requested
        };

        Ok(Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        })
    }

    // ── Category output ───────────────────────────────────────────────────

    /// Print one use case result. `action` is the past-tense verb for the
    /// human line, e.g. "Created".
    pub fn category(&self, action: &str, output: &CategoryOutput) -> CliResult<()> {
        match self.wire_format() {
            Some(format) => {
                let bytes = CategoryPresenter::new(output).render(format)?;
                self.write_bytes(&bytes)
            }
            None => {
                self.success(&format!("{action} category #{}: {}", output.id, output.name))?;
                Ok(())
            }
        }
    }

    /// Print a list of categories.
    pub fn categories(&self, outputs: &[CategoryOutput]) -> CliResult<()> {
        if let Some(format) = self.wire_format() {
            let bytes = present_many(outputs, format)?;
            return self.write_bytes(&bytes);
        }

        if outputs.is_empty() {
            self.info("No categories yet")?;
            return Ok(());
        }

        self.header("Categories:")?;
        for output in outputs {
            let id = format!("#{}", output.id);
            let line = if self.no_color {
                format!("  {id:>5}  {}", output.name)
            } else {
                format!("  {:>5}  {}", id.dimmed(), output.name)
            };
            self.print(&line)?;
        }
        Ok(())
    }

    fn wire_format(&self) -> Option<WireFormat> {
        match self.resolved_format {
            OutputFormat::Json => Some(WireFormat::Json),
            OutputFormat::Xml => Some(WireFormat::Xml),
            OutputFormat::Human | OutputFormat::Auto => None,
        }
    }

    fn write_bytes(&self, bytes: &[u8]) -> CliResult<()> {
        self.term.write_line(&String::from_utf8_lossy(bytes))?;
        Ok(())
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(format: OutputFormat, quiet: bool, no_color: bool) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            format,
            store: None,
        }
    }

    fn make_manager(format: OutputFormat) -> OutputManager {
        OutputManager::new(&args(format, false, true), &AppConfig::default()).unwrap()
    }

    #[test]
    fn explicit_format_is_kept() {
        assert_eq!(make_manager(OutputFormat::Xml).format(), OutputFormat::Xml);
        assert_eq!(make_manager(OutputFormat::Human).format(), OutputFormat::Human);
    }

    #[test]
    fn auto_never_stays_auto() {
        assert_ne!(make_manager(OutputFormat::Auto).format(), OutputFormat::Auto);
    }

    #[test]
    fn config_format_used_when_flag_is_auto() {
        let mut config = AppConfig::default();
        config.output.format = "xml".into();
        let out = OutputManager::new(&args(OutputFormat::Auto, false, true), &config).unwrap();
        assert_eq!(out.format(), OutputFormat::Xml);
    }

    #[test]
    fn invalid_config_format_is_a_config_error() {
        let mut config = AppConfig::default();
        config.output.format = "yaml".into();
        assert!(matches!(
            OutputManager::new(&args(OutputFormat::Auto, false, true), &config),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn config_no_color_is_honoured() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&args(OutputFormat::Human, false, false), &config).unwrap();
        assert!(out.no_color);
    }

    #[test]
    fn quiet_human_output_is_ok() {
        let out =
            OutputManager::new(&args(OutputFormat::Human, true, true), &AppConfig::default())
                .unwrap();
        let output = CategoryOutput {
            id: 1,
            name: "Books".into(),
        };
        assert!(out.category("Created", &output).is_ok());
        assert!(out.categories(&[]).is_ok());
    }
}

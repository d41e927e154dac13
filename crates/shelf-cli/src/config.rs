//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`SHELF_STORAGE__BACKEND=memory`)
//! 3. Config file (`--config`, else [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::cli::StoreBackend;

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "SHELF";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where categories are kept.
    pub storage: StorageConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StoreBackend,
    /// Category file for the `file` backend; `None` means the platform data dir.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `json` or `xml`; used when `--format` is not given.
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                backend: StoreBackend::File,
                path: None,
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then `SHELF_*`
    /// environment variables.
    ///
    /// A file passed explicitly via `--config` must exist; the default
    /// location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file
            .cloned()
            .unwrap_or_else(Self::config_path);
        Self::load_from(&path, config_file.is_some())
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.shelf.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "shelf", "shelf")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".shelf.toml"))
    }

    /// Category file used by the `file` backend.
    pub fn data_path(&self) -> PathBuf {
        self.storage.path.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("com", "shelf", "shelf")
                .map(|d| d.data_dir().join("categories.json"))
                .unwrap_or_else(|| PathBuf::from(".shelf-categories.json"))
        })
    }
}

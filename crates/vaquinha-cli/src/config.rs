//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! core crate never sees it: commands read the campaign goal and the data
//! file from here and hand plain values to the service.
//!
//! # Resolution order (lowest priority first)
//!
//! 1. Built-in defaults
//! 2. The user config file (`AppConfig::config_path`), if present
//! 3. `vaquinha.toml` in the current directory, if present
//! 4. The file passed with `--config` (must exist)
//! 5. `VAQUINHA__<SECTION>__<KEY>` environment variables

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use ::config::{Config, Environment, File, FileFormat};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// File name used by `vaquinha init --local`.
pub const LOCAL_CONFIG_FILE: &str = "vaquinha.toml";

const ENV_PREFIX: &str = "VAQUINHA";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub campaign: CampaignConfig,
    pub storage: StorageConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub name: String,
    /// Amount the campaign aims to raise, in reais.
    pub goal: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding accepted donations.
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            campaign: CampaignConfig {
                name: "Vaquinha".into(),
                goal: Decimal::new(500_000, 2),
            },
            storage: StorageConfig {
                data_file: Self::default_data_file(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Merge every configuration source over the built-in defaults.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("campaign.name", defaults.campaign.name)?
            .set_default("campaign.goal", defaults.campaign.goal.to_string())?
            .set_default(
                "storage.data_file",
                defaults.storage.data_file.to_string_lossy().into_owned(),
            )?
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format)?
            .add_source(
                File::from(Self::config_path().as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                File::from(Path::new(LOCAL_CONFIG_FILE))
                    .format(FileFormat::Toml)
                    .required(false),
            );

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration sources")?
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the per-user configuration file.
    ///
    /// Falls back to `.vaquinha.toml` in the current directory when no home
    /// directory can be determined.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "vaquinha", "vaquinha")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".vaquinha.toml"))
    }

    fn default_data_file() -> PathBuf {
        directories::ProjectDirs::from("org", "vaquinha", "vaquinha")
            .map(|d| d.data_dir().join("donations.json"))
            .unwrap_or_else(|| PathBuf::from("donations.json"))
    }

    /// Serialise as TOML, the format `init` writes.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

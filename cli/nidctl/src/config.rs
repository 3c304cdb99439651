//! Layered CLI configuration.
//!
//! Sources, later ones winning:
//! - built-in defaults
//! - a TOML file (`--config`, else `nid.toml` in the platform config dir)
//! - `NID_*` environment variables, `__` separating nested keys
//!   (`NID_OPTIONS__ALLOW_INTERIM_NUMBER=true`)
//!
//! Command line flags are applied on top by the caller.

use std::path::{Path, PathBuf};

use ::config::{Config, ConfigError, Environment, File, FileFormat};
use clap::ValueEnum;
use directories::ProjectDirs;
use nordid_id::Options;
use serde::Deserialize;

use crate::output::OutputFormat;

/// Configuration file name.
const CONFIG_FILE: &str = "nid.toml";

/// Environment variable prefix.
const ENV_PREFIX: &str = "NID";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// CLI settings after layering.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Default level for the `EnvFilter`; `RUST_LOG` takes precedence.
    pub log_level: String,

    pub log_format: LogFormat,

    /// Output format when `--format` is not given.
    pub output: OutputFormat,

    /// Which schemes are accepted.
    #[serde(default)]
    pub options: Options,
}

/// Get the default config file path.
fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "nordid", "nid").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

impl Settings {
    /// Load settings from the config file and process environment.
    ///
    /// An explicit `path` must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::build(path, None)
    }

    /// Like [`Settings::load`], reading variables from `env` instead of the
    /// process environment when given.
    fn build(
        path: Option<&Path>,
        env: Option<::config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let (file, required) = match path {
            Some(path) => (Some(path.to_path_buf()), true),
            None => (default_config_path(), false),
        };

        let mut builder = Config::builder()
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .set_default("log_format", "text")?
            .set_default("output", "table")?;

        if let Some(file) = file {
            builder = builder.add_source(
                File::from(file)
                    .format(FileFormat::Toml)
                    .required(required),
            );
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }
}

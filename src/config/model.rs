// src/config/model.rs

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::config::duration::parse_duration;
use crate::config::validate::validate_config;
use crate::errors::{Result, StyleWatchError};
use crate::watch::{DEFAULT_FILE_PATTERN, FilePattern};

/// Top-level configuration file as read from TOML:
///
/// ```toml
/// [watch]
/// directories = ["wwwroot/styles"]
/// files = ["Components/App.scss"]
/// pattern = "*.scss"
/// polling_interval = "3s"
/// compiler = "sass"
/// output_extension = "css"
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub watch: RawWatchConfig,
}

/// `[watch]` section, string-typed as it appears in the file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWatchConfig {
    /// Directories scanned recursively, relative to the working directory.
    #[serde(default)]
    pub directories: Vec<String>,

    /// Individual files, watched regardless of `pattern`.
    #[serde(default)]
    pub files: Vec<String>,

    /// Filename filter applied inside `directories`.
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Tick period, e.g. `"3s"` or `"500ms"`.
    #[serde(default = "default_polling_interval")]
    pub polling_interval: String,

    /// Compiler executable name or path.
    #[serde(default = "default_compiler")]
    pub compiler: String,

    /// Extension given to compiled output files.
    #[serde(default = "default_output_extension")]
    pub output_extension: String,
}

fn default_pattern() -> String {
    DEFAULT_FILE_PATTERN.to_string()
}

fn default_polling_interval() -> String {
    "3s".to_string()
}

fn default_compiler() -> String {
    "sass".to_string()
}

fn default_output_extension() -> String {
    "css".to_string()
}

impl Default for RawWatchConfig {
    fn default() -> Self {
        Self {
            directories: Vec::new(),
            files: Vec::new(),
            pattern: default_pattern(),
            polling_interval: default_polling_interval(),
            compiler: default_compiler(),
            output_extension: default_output_extension(),
        }
    }
}

/// Validated, immutable watcher configuration.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    pub directories: BTreeSet<PathBuf>,
    pub files: BTreeSet<PathBuf>,
    pub pattern: FilePattern,
    pub polling_interval: Duration,
    pub compiler: String,
    /// Without the leading dot, e.g. `css`.
    pub output_extension: String,
}

impl WatchConfig {
    /// Configuration with every option at its default.
    pub fn defaults() -> Result<Self> {
        Self::try_from(RawWatchConfig::default())
    }
}

impl TryFrom<RawWatchConfig> for WatchConfig {
    type Error = StyleWatchError;

    fn try_from(raw: RawWatchConfig) -> Result<Self> {
        validate_config(&raw)?;

        let polling_interval =
            parse_duration(&raw.polling_interval).map_err(StyleWatchError::ConfigError)?;

        Ok(Self {
            directories: raw.directories.into_iter().map(PathBuf::from).collect(),
            files: raw.files.into_iter().map(PathBuf::from).collect(),
            pattern: FilePattern::new(&raw.pattern)?,
            polling_interval,
            compiler: raw.compiler.trim().to_string(),
            output_extension: raw.output_extension.trim().trim_start_matches('.').to_string(),
        })
    }
}

impl TryFrom<RawConfigFile> for WatchConfig {
    type Error = StyleWatchError;

    fn try_from(raw: RawConfigFile) -> Result<Self> {
        Self::try_from(raw.watch)
    }
}

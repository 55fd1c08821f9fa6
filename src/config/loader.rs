// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::model::{RawConfigFile, WatchConfig};
use crate::errors::{Result, StyleWatchError};

/// Config file looked up in the working directory when none is named.
pub const DEFAULT_CONFIG_PATH: &str = "Stylewatch.toml";

/// Load a configuration file from a given path and return the raw model.
///
/// This only performs TOML deserialization; use [`load_and_validate`] to get
/// a usable [`WatchConfig`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        StyleWatchError::ConfigError(format!("reading config file at {:?}: {e}", path))
    })?;

    let config: RawConfigFile = toml::from_str(&contents)?;
    Ok(config)
}

/// Load a configuration file from path, validate it and convert it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<WatchConfig> {
    WatchConfig::try_from(load_from_path(path)?)
}

/// Resolve the configuration for the host binary.
///
/// - An explicitly named file must exist and be valid.
/// - Otherwise [`DEFAULT_CONFIG_PATH`] is used if present, and built-in
///   defaults if not.
pub fn resolve_config(explicit: Option<&Path>) -> Result<WatchConfig> {
    if let Some(path) = explicit {
        return load_and_validate(path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.is_file() {
        return load_and_validate(default_path);
    }

    info!(
        path = DEFAULT_CONFIG_PATH,
        "no config file found; using built-in defaults"
    );
    WatchConfig::defaults()
}

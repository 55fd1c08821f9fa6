// src/errors.rs

//! Crate-wide error types.
//!
//! Configuration problems are reported through [`StyleWatchError`]. Failures
//! inside a scan cycle (unreadable file, compiler crash) are plain
//! `anyhow::Error`s that get logged and never leave the cycle.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleWatchError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid file pattern: {0}")]
    PatternError(#[from] globset::Error),
}

pub type Result<T> = std::result::Result<T, StyleWatchError>;

// src/config/mod.rs

//! Configuration loading and validation for stylewatch.
//!
//! Responsibilities:
//! - Define the TOML-backed raw model and the validated `WatchConfig`
//!   (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate values before they reach the watcher (`validate.rs`).
//! - Parse polling interval strings like `"3s"` (`duration.rs`).

pub mod duration;
pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{DEFAULT_CONFIG_PATH, load_and_validate, load_from_path, resolve_config};
pub use model::{RawConfigFile, RawWatchConfig, WatchConfig};
pub use validate::{MAX_POLLING_INTERVAL, validate_config};

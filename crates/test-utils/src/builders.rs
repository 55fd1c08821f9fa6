#![allow(dead_code)]

use stylewatch::config::{RawWatchConfig, WatchConfig};

/// Builder for `WatchConfig` to simplify test setup.
pub struct WatchConfigBuilder {
    raw: RawWatchConfig,
}

impl WatchConfigBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawWatchConfig::default(),
        }
    }

    pub fn directory(mut self, dir: &str) -> Self {
        self.raw.directories.push(dir.to_string());
        self
    }

    pub fn file(mut self, file: &str) -> Self {
        self.raw.files.push(file.to_string());
        self
    }

    pub fn pattern(mut self, pattern: &str) -> Self {
        self.raw.pattern = pattern.to_string();
        self
    }

    pub fn polling_interval(mut self, interval: &str) -> Self {
        self.raw.polling_interval = interval.to_string();
        self
    }

    pub fn compiler(mut self, compiler: &str) -> Self {
        self.raw.compiler = compiler.to_string();
        self
    }

    pub fn build(self) -> WatchConfig {
        WatchConfig::try_from(self.raw).expect("Failed to build valid config from builder")
    }
}

impl Default for WatchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// src/config/validate.rs

use std::time::Duration;

use crate::config::duration::parse_duration;
use crate::config::model::RawWatchConfig;
use crate::errors::{Result, StyleWatchError};
use crate::watch::FilePattern;

/// Longest accepted `polling_interval`.
pub const MAX_POLLING_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Run semantic validation against a raw `[watch]` section.
///
/// This checks:
/// - `polling_interval` parses, is not zero and is at most one day
/// - `pattern` is a valid glob
/// - `compiler` and `output_extension` are not blank
///
/// It does **not** check that watched paths exist; missing paths are logged
/// and skipped on every scan instead.
pub fn validate_config(raw: &RawWatchConfig) -> Result<()> {
    validate_polling_interval(&raw.polling_interval)?;
    FilePattern::new(&raw.pattern)?;
    validate_non_blank("compiler", &raw.compiler)?;
    validate_non_blank(
        "output_extension",
        raw.output_extension.trim().trim_start_matches('.'),
    )?;
    Ok(())
}

fn validate_polling_interval(value: &str) -> Result<()> {
    let interval = parse_duration(value).map_err(|e| {
        StyleWatchError::ConfigError(format!("[watch].polling_interval: {e}"))
    })?;
    if interval.is_zero() {
        return Err(StyleWatchError::ConfigError(
            "[watch].polling_interval must be greater than zero".to_string(),
        ));
    }
    if interval > MAX_POLLING_INTERVAL {
        return Err(StyleWatchError::ConfigError(format!(
            "[watch].polling_interval must be at most {:?}, got {:?}",
            MAX_POLLING_INTERVAL, interval
        )));
    }
    Ok(())
}

fn validate_non_blank(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StyleWatchError::ConfigError(format!(
            "[watch].{key} must not be empty"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawWatchConfig {
        RawWatchConfig::default()
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&raw()).is_ok());
    }

    #[test]
    fn zero_interval_is_rejected() {
        let cfg = RawWatchConfig {
            polling_interval: "0s".into(),
            ..raw()
        };
        assert!(matches!(
            validate_config(&cfg),
            Err(StyleWatchError::ConfigError(_))
        ));
    }

    #[test]
    fn oversized_interval_is_rejected() {
        for value in ["18446744073709551615s", "25h", "999999999999999999m"] {
            let cfg = RawWatchConfig {
                polling_interval: value.into(),
                ..raw()
            };
            assert!(
                matches!(validate_config(&cfg), Err(StyleWatchError::ConfigError(_))),
                "{value} should be rejected"
            );
        }

        let cfg = RawWatchConfig {
            polling_interval: "24h".into(),
            ..raw()
        };
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn bad_pattern_is_rejected() {
        let cfg = RawWatchConfig {
            pattern: "{a,".into(),
            ..raw()
        };
        assert!(matches!(
            validate_config(&cfg),
            Err(StyleWatchError::PatternError(_))
        ));
    }

    #[test]
    fn blank_compiler_and_extension_are_rejected() {
        let cfg = RawWatchConfig {
            compiler: "  ".into(),
            ..raw()
        };
        assert!(validate_config(&cfg).is_err());

        let cfg = RawWatchConfig {
            output_extension: ".".into(),
            ..raw()
        };
        assert!(validate_config(&cfg).is_err());
    }
}

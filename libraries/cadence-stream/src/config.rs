/// Stream details settings
use crate::details::DEFAULT_EXPIRY_TTL_SECS;
use crate::error::{Result, StreamError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default settings file, read when present
pub const DEFAULT_CONFIG_FILE: &str = "cadence.toml";

/// Upper bound for the expiry TTL (one year)
pub const MAX_EXPIRY_TTL_SECS: u64 = 365 * 24 * 3600;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StreamSettings {
    /// Seconds newly built stream details stay valid
    #[serde(default = "default_expiry_ttl_secs")]
    pub expiry_ttl_secs: u64,
}

/// Layout of the settings file, stream settings live under `[stream]`
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    stream: StreamSettings,
}

impl StreamSettings {
    /// Load settings from `cadence.toml` (if present) and the environment
    ///
    /// Environment variables use the `CADENCE_` prefix with `__` between
    /// sections, e.g. `CADENCE_STREAM__EXPIRY_TTL_SECS=7200`.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE), false)
    }

    /// Load settings from a specific file, then apply environment overrides
    pub fn load_from(path: &Path, required: bool) -> Result<Self> {
        if required && !path.exists() {
            return Err(StreamError::Config(format!(
                "settings file not found: {}",
                path.display()
            )));
        }

        let builder = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix("CADENCE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::build(builder)
    }

    /// Load settings from an inline TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml));
        Self::build(builder)
    }

    fn build(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let file: SettingsFile = builder.build()?.try_deserialize()?;
        let settings = file.stream;
        settings.validate()?;

        tracing::debug!(
            expiry_ttl_secs = settings.expiry_ttl_secs,
            "loaded stream settings"
        );
        Ok(settings)
    }

    /// Validate settings
    pub fn validate(&self) -> Result<()> {
        if self.expiry_ttl_secs == 0 {
            return Err(StreamError::Config(
                "expiry_ttl_secs must be greater than zero".to_string(),
            ));
        }
        if self.expiry_ttl_secs > MAX_EXPIRY_TTL_SECS {
            return Err(StreamError::Config(format!(
                "expiry_ttl_secs must be at most {MAX_EXPIRY_TTL_SECS}, got {}",
                self.expiry_ttl_secs
            )));
        }
        Ok(())
    }
}

fn default_expiry_ttl_secs() -> u64 {
    DEFAULT_EXPIRY_TTL_SECS
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            expiry_ttl_secs: default_expiry_ttl_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ttl_is_one_hour() {
        assert_eq!(StreamSettings::default().expiry_ttl_secs, 3600);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let settings = StreamSettings::from_toml_str("").unwrap();
        assert_eq!(settings, StreamSettings::default());
    }

    #[test]
    fn reads_stream_section() {
        let settings = StreamSettings::from_toml_str("[stream]\nexpiry_ttl_secs = 900\n").unwrap();
        assert_eq!(settings.expiry_ttl_secs, 900);
    }

    #[test]
    fn rejects_zero_ttl() {
        let result = StreamSettings::from_toml_str("[stream]\nexpiry_ttl_secs = 0\n");
        assert!(matches!(result, Err(StreamError::Config(_))));
    }

    #[test]
    fn rejects_ttl_above_one_year() {
        let settings = StreamSettings {
            expiry_ttl_secs: MAX_EXPIRY_TTL_SECS + 1,
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_wrong_type() {
        let result = StreamSettings::from_toml_str("[stream]\nexpiry_ttl_secs = \"soon\"\n");
        assert!(matches!(result, Err(StreamError::Config(_))));
    }
}

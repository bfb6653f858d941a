//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Playlist source settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Catalog output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.source.url.trim().is_empty() {
            return Err(AppError::validation("source.url is empty"));
        }
        let parsed = url::Url::parse(&self.source.url)
            .map_err(|e| AppError::validation(format!("source.url is invalid: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::validation(
                "source.url must use the http or https scheme",
            ));
        }
        if self.source.user_agent.trim().is_empty() {
            return Err(AppError::validation("source.user_agent is empty"));
        }
        if self.source.timeout_secs == 0 {
            return Err(AppError::validation("source.timeout_secs must be > 0"));
        }
        if self.output.file.trim().is_empty() {
            return Err(AppError::validation("output.file is empty"));
        }
        Ok(())
    }
}

/// Playlist source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL of the M3U playlist to fetch
    #[serde(default = "defaults::source_url")]
    pub url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: defaults::source_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Catalog output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Catalog file name, relative to the data directory
    #[serde(default = "defaults::output_file")]
    pub file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: defaults::output_file(),
        }
    }
}

mod defaults {
    // Source defaults
    pub fn source_url() -> String {
        "https://raw.githubusercontent.com/Srivyaa/News_Channels/main/news_channels.m3u".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; streamcat/1.0)".into()
    }
    pub fn timeout() -> u64 {
        15
    }

    // Output defaults
    pub fn output_file() -> String {
        "streams.json".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_source_url() {
        let mut config = Config::default();
        config.source.url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_http_scheme() {
        let mut config = Config::default();
        config.source.url = "ftp://example.com/list.m3u".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.source.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_output_file() {
        let mut config = Config::default();
        config.output.file = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let config: Config = toml::from_str(
            r#"
            [source]
            url = "https://example.com/channels.m3u"
            "#,
        )
        .unwrap();
        assert_eq!(config.source.url, "https://example.com/channels.m3u");
        assert_eq!(config.source.timeout_secs, 15);
        assert_eq!(config.output.file, "streams.json");
    }
}

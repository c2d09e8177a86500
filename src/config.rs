//! Configuration System
//!
//! Dashboard settings parsed from a TOML document. The browser build embeds
//! the document at compile time, so nothing is read from disk or the
//! environment at run time.

use serde::Deserialize;

use crate::view::PAGE_SIZE;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DashboardConfig {
    #[serde(default)]
    pub dashboard: DashboardSection,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dashboard page settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DashboardSection {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_load_delay")]
    pub load_delay_ms: u32,

    #[serde(default = "default_footer")]
    pub footer: String,
}

fn default_title() -> String {
    "Analytics Dashboard".to_string()
}

fn default_page_size() -> usize {
    PAGE_SIZE
}

fn default_load_delay() -> u32 {
    1500
}

fn default_footer() -> String {
    "© 2023 Analytics Dashboard. All rights reserved.".to_string()
}

impl Default for DashboardSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            page_size: default_page_size(),
            load_delay_ms: default_load_delay(),
            footer: default_footer(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl DashboardConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dashboard.page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "dashboard.page_size",
                reason: "must be at least 1".to_string(),
            });
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid {
                field: "logging.level",
                reason: format!("unknown level {:?}", self.logging.level),
            });
        }

        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dashboard: DashboardSection::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();

        assert_eq!(config.dashboard.page_size, 5);
        assert_eq!(config.dashboard.load_delay_ms, 1500);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = DashboardConfig::from_toml_str(
            r#"
            [dashboard]
            load_delay_ms = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.dashboard.load_delay_ms, 0);
        assert_eq!(config.dashboard.page_size, 5);
        assert_eq!(config.dashboard.title, "Analytics Dashboard");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = DashboardConfig::from_toml_str("[dashboard]\npage_size = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "dashboard.page_size",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let err = DashboardConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = DashboardConfig::from_toml_str("[dashboard\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}

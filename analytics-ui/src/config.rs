//! Configuration bootstrap
//!
//! The dashboard's TOML settings are compiled into the bundle.

use analytics::config::{ConfigError, DashboardConfig};

const EMBEDDED_CONFIG: &str = include_str!("../dashboard.toml");

/// Parse the embedded configuration
///
/// Falls back to defaults on error and hands the error back so it can be
/// logged once the subscriber is up.
pub fn load_config() -> (DashboardConfig, Option<ConfigError>) {
    parse_or_default(EMBEDDED_CONFIG)
}

fn parse_or_default(content: &str) -> (DashboardConfig, Option<ConfigError>) {
    match DashboardConfig::from_toml_str(content) {
        Ok(config) => (config, None),
        Err(e) => (DashboardConfig::default(), Some(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let (config, error) = load_config();

        assert!(error.is_none());
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let (config, error) = parse_or_default("[dashboard]\npage_size = 0\n");

        assert!(error.is_some());
        assert_eq!(config, DashboardConfig::default());
    }
}

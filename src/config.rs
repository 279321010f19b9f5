//! Host Configuration
//!
//! Settings baked into the bundle from `app.config.json`.

use serde::Deserialize;

use crate::error::{AppError, Result};

const EMBEDDED_CONFIG: &str = include_str!("../app.config.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// One of error/warn/info/debug/trace (case-insensitive)
    pub log_level: String,
    /// Prefix the router is mounted under, empty for the site root
    pub base_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            base_path: String::new(),
        }
    }
}

impl AppConfig {
    /// Load the embedded configuration
    pub fn load() -> Result<Self> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.log_level()?;
        Ok(config)
    }

    pub fn log_level(&self) -> Result<log::Level> {
        self.log_level
            .parse()
            .map_err(|_| AppError::InvalidLogLevel {
                value: self.log_level.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = AppConfig::load().expect("embedded config should parse");
        assert!(config.log_level().is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_level().unwrap(), log::Level::Info);
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let config = AppConfig::from_json(r#"{"log_level": "WARN"}"#).unwrap();
        assert_eq!(config.log_level().unwrap(), log::Level::Warn);
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let err = AppConfig::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
        assert!(matches!(err, AppError::InvalidLogLevel { ref value } if value == "loud"));
    }

    #[test]
    fn test_bad_json_is_rejected() {
        let err = AppConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }
}

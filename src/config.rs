//! Configuration handling for the TUI
//!
//! Values come from the JSON config file, then environment variables, then
//! built-in defaults.

use crate::api::DEFAULT_BASE_URL;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const ENV_API_BASE_URL: &str = "CONSULT_API_BASE_URL";
pub const ENV_MODE: &str = "CONSULT_MODE";
pub const ENV_GA_ID: &str = "CONSULT_GA_ID";
pub const ENV_GA_API_SECRET: &str = "CONSULT_GA_API_SECRET";

/// Errors reading the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Whether submissions go to the live API or stay local
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Development,
    Production,
}

impl RunMode {
    /// Debug builds default to development, release builds to production
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            RunMode::Development
        } else {
            RunMode::Production
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(RunMode::Development),
            "production" | "prod" => Some(RunMode::Production),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RunMode::Development => "development",
            RunMode::Production => "production",
        }
    }
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Base URL of the lead API
    pub api_base_url: Option<String>,
    /// Run mode override
    pub mode: Option<RunMode>,
    /// GA4 measurement id
    pub ga_measurement_id: Option<String>,
    /// GA4 Measurement Protocol API secret
    pub ga_api_secret: Option<String>,
}

/// Fully resolved settings used to build the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub mode: RunMode,
    pub ga_measurement_id: Option<String>,
    pub ga_api_secret: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "darkknighttech", "consult-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: PathBuf) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Resolve against the process environment
    pub fn resolve(&self) -> Settings {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup; env wins over the file
    pub fn resolve_with(&self, env: impl Fn(&str) -> Option<String>) -> Settings {
        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let mode = match non_empty(ENV_MODE) {
            Some(raw) => RunMode::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "Unknown {ENV_MODE}; using build default");
                RunMode::for_build()
            }),
            None => self.mode.unwrap_or_else(RunMode::for_build),
        };

        Settings {
            api_base_url: non_empty(ENV_API_BASE_URL)
                .or_else(|| self.api_base_url.clone())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            mode,
            ga_measurement_id: non_empty(ENV_GA_ID).or_else(|| self.ga_measurement_id.clone()),
            ga_api_secret: non_empty(ENV_GA_API_SECRET).or_else(|| self.ga_api_secret.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.api_base_url.is_none());
        assert!(config.mode.is_none());
        assert!(config.ga_measurement_id.is_none());
        assert!(config.ga_api_secret.is_none());
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let settings = TuiConfig::default().resolve_with(env_of(&[]));
        assert_eq!(settings.api_base_url, "http://localhost:8000");
        assert_eq!(settings.mode, RunMode::for_build());
        assert!(settings.ga_measurement_id.is_none());
    }

    #[test]
    fn test_file_values_used_without_env() {
        let config = TuiConfig {
            api_base_url: Some("https://api.example.com".to_string()),
            mode: Some(RunMode::Production),
            ga_measurement_id: Some("G-FILE".to_string()),
            ..Default::default()
        };
        let settings = config.resolve_with(env_of(&[]));
        assert_eq!(settings.api_base_url, "https://api.example.com");
        assert_eq!(settings.mode, RunMode::Production);
        assert_eq!(settings.ga_measurement_id.as_deref(), Some("G-FILE"));
    }

    #[test]
    fn test_env_wins_over_file() {
        let config = TuiConfig {
            api_base_url: Some("https://file.example.com".to_string()),
            mode: Some(RunMode::Production),
            ..Default::default()
        };
        let settings = config.resolve_with(env_of(&[
            (ENV_API_BASE_URL, "https://env.example.com"),
            (ENV_MODE, "dev"),
            (ENV_GA_API_SECRET, "secret"),
        ]));
        assert_eq!(settings.api_base_url, "https://env.example.com");
        assert_eq!(settings.mode, RunMode::Development);
        assert_eq!(settings.ga_api_secret.as_deref(), Some("secret"));
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let config = TuiConfig {
            api_base_url: Some("https://file.example.com".to_string()),
            ..Default::default()
        };
        let settings = config.resolve_with(env_of(&[(ENV_API_BASE_URL, "  ")]));
        assert_eq!(settings.api_base_url, "https://file.example.com");
    }

    #[test]
    fn test_unknown_mode_falls_back_to_build_default() {
        let settings = TuiConfig::default().resolve_with(env_of(&[(ENV_MODE, "staging")]));
        assert_eq!(settings.mode, RunMode::for_build());
    }

    #[test]
    fn test_run_mode_parse() {
        assert_eq!(RunMode::parse("Production"), Some(RunMode::Production));
        assert_eq!(RunMode::parse(" prod "), Some(RunMode::Production));
        assert_eq!(RunMode::parse("development"), Some(RunMode::Development));
        assert_eq!(RunMode::parse("test"), None);
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            api_base_url: Some("http://localhost:9000".to_string()),
            mode: Some(RunMode::Development),
            ga_measurement_id: Some("G-12345".to_string()),
            ga_api_secret: None,
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"development\""));
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.api_base_url, Some("http://localhost:9000".to_string()));
        assert_eq!(parsed.mode, Some(RunMode::Development));
        assert_eq!(parsed.ga_measurement_id, Some("G-12345".to_string()));
        assert!(parsed.ga_api_secret.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.api_base_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"api_base_url": "http://x", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.api_base_url, Some("http://x".to_string()));
    }

    #[test]
    fn test_load_from_reports_parse_errors() {
        let path = std::env::temp_dir().join(format!("consult-tui-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, "{not json").unwrap();
        let err = TuiConfig::load_from(path.clone()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_from_missing_file_reports_read_error() {
        let path = std::env::temp_dir().join(format!("consult-tui-{}.json", uuid::Uuid::new_v4()));
        let err = TuiConfig::load_from(path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_from_reads_saved_file() {
        let path = std::env::temp_dir().join(format!("consult-tui-{}.json", uuid::Uuid::new_v4()));
        fs::write(
            &path,
            r#"{"api_base_url": "https://api.example.com", "mode": "production"}"#,
        )
        .unwrap();
        let config = TuiConfig::load_from(path.clone()).unwrap();
        fs::remove_file(path).unwrap();

        assert_eq!(config.api_base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.mode, Some(RunMode::Production));
        assert!(config.ga_measurement_id.is_none());
    }
}

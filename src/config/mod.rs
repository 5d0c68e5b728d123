// Dashboard configuration.
// Optional JSON file with startup view, layout, tick rate, log level, and settings overrides.

pub mod paths;

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::app::View;
use crate::error::{DashError, Result};
use crate::fleet::Settings;

/// Startup configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// View shown on launch.
    pub initial_view: View,
    /// Whether the sidebar starts expanded.
    pub sidebar_open: bool,
    /// Event poll interval in milliseconds.
    pub tick_rate_ms: u64,
    /// Log filter used when neither `RUST_LOG` nor `-v` is given.
    pub log_level: Option<String>,
    /// Seed values for the settings form. Missing keys use the defaults.
    pub settings: Settings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_view: View::default(),
            sidebar_open: true,
            tick_rate_ms: 100,
            log_level: None,
            settings: Settings::default(),
        }
    }
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

/// Load config from a file. A missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| DashError::InvalidConfig {
        path: path.to_path_buf(),
        source,
    })
}

/// Load config from the explicit path, or the default location.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_from(path),
        None => match paths::config_path() {
            Some(path) => load_from(&path),
            None => Ok(Config::default()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::NotificationMethod;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let config = load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.initial_view, View::Overview);
        assert!(config.sidebar_open);
    }

    #[test]
    fn test_partial_settings_merge_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "initialView": "fleet",
                "sidebarOpen": false,
                "settings": { "crowdingThreshold": 65, "notificationMethod": "email" }
            }"#,
        )
        .unwrap();

        let config = load_from(&path).unwrap();
        assert_eq!(config.initial_view, View::Fleet);
        assert!(!config.sidebar_open);
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.settings.crowding_threshold, 65);
        assert_eq!(
            config.settings.notification_method,
            NotificationMethod::Email
        );
        assert_eq!(config.settings.demand_prediction_interval, 30);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, DashError::InvalidConfig { .. }));
    }

    #[test]
    fn test_unknown_view_in_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "initialView": "dispatch" }"#).unwrap();

        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, DashError::InvalidConfig { .. }));
        assert!(
            err.to_string().contains("Unknown view 'dispatch'"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_view_name_in_file_ignores_case() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "initialView": " Fleet " }"#).unwrap();

        let config = load_from(&path).unwrap();
        assert_eq!(config.initial_view, View::Fleet);
        assert_eq!(config.initial_view, "Fleet".parse::<View>().unwrap());
    }

    #[test]
    fn test_config_serializes_view_lowercase() {
        let config = Config {
            initial_view: View::Drivers,
            ..Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""initialView":"drivers""#));
    }

    #[test]
    fn test_tick_rate_floor() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(10));
    }
}

//! Theme client configuration — persisted to disk.

use crate::config::{default_config_path, load_json_config, save_json_config};
use crate::theme::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "theme_client.json";
const LABEL: &str = "Theme";

/// What a watcher tick does when the endpoint cannot produce a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutagePolicy {
    /// Skip the tick and keep the current descriptor.
    #[default]
    HoldLastKnownGood,
    /// Treat the failure as the built-in default theme.
    RevertToDefault,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeClientConfig {
    /// Theme descriptor endpoint.
    pub endpoint: String,
    /// Seconds between reconciliation ticks.
    pub poll_interval_secs: u64,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    pub outage_policy: OutagePolicy,
}

impl Default for ThemeClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8000/api/theme/".to_string(),
            poll_interval_secs: 5,
            request_timeout_secs: 10,
            outage_policy: OutagePolicy::HoldLastKnownGood,
        }
    }
}

impl ThemeClientConfig {
    /// Config pointing at `endpoint`, everything else default.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn poll_interval(&self) -> Duration {
        // A zero interval would spin the watcher.
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn default_path() -> PathBuf {
        default_config_path(CONFIG_FILE)
    }
}

/// Load config from disk, falling back to defaults.
pub fn load_config(path: &Path) -> ThemeClientConfig {
    load_json_config(path, LABEL)
}

/// Save config to disk.
pub fn save_config(path: &Path, config: &ThemeClientConfig) -> Result<()> {
    save_json_config(path, config, LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_contract() {
        let config = ThemeClientConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_secs(5));
        assert_eq!(config.outage_policy, OutagePolicy::HoldLastKnownGood);
        assert!(config.endpoint.ends_with("/api/theme/"));
    }

    #[test]
    fn partial_file_fills_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            r#"{ "endpoint": "https://example.com/api/theme/", "outage_policy": "revert_to_default" }"#,
        )
        .unwrap();

        let config = load_config(&path);
        assert_eq!(config.endpoint, "https://example.com/api/theme/");
        assert_eq!(config.outage_policy, OutagePolicy::RevertToDefault);
        assert_eq!(config.poll_interval_secs, 5);
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn save_then_load_round_trips() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("cfg").join(CONFIG_FILE);
        let config = ThemeClientConfig {
            poll_interval_secs: 30,
            ..ThemeClientConfig::with_endpoint("http://localhost:9000/theme")
        };
        save_config(&path, &config).unwrap();
        assert_eq!(load_config(&path), config);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let config = ThemeClientConfig {
            poll_interval_secs: 0,
            ..ThemeClientConfig::default()
        };
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
    }
}

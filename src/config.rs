//! Shared config utilities for loading/saving JSON config files.

use crate::theme::error::ThemeError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Directory name under the platform config dir.
const APP_CONFIG_DIR: &str = "portfolio-theme";

/// Resolve `<config_dir>/portfolio-theme/<file_name>`, falling back to the
/// working directory when the platform has no config dir.
pub fn default_config_path(file_name: &str) -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_CONFIG_DIR)
        .join(file_name)
}

/// Generic load for any Serde config type with a `Default` implementation.
/// Falls back to `T::default()` if the file is missing or unparsable.
pub fn load_json_config<T: DeserializeOwned + Default>(path: &Path, label: &str) -> T {
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<T>(&content) {
            Ok(config) => {
                tracing::info!(label, path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(
                    label,
                    path = %path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                T::default()
            }
        },
        Err(_) => {
            tracing::info!(label, path = %path.display(), "no config file, using defaults");
            T::default()
        }
    }
}

/// Generic save for any Serde config type.
pub fn save_json_config<T: Serialize>(
    path: &Path,
    config: &T,
    label: &str,
) -> Result<(), ThemeError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| ThemeError::Config(format!("failed to create config directory: {}", e)))?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| ThemeError::Config(format!("failed to serialize config: {}", e)))?;
    std::fs::write(path, json)
        .map_err(|e| ThemeError::Config(format!("failed to write config file: {}", e)))?;
    tracing::info!(label, path = %path.display(), "saved config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn missing_file_yields_default() {
        let tmp = tempfile::TempDir::new().unwrap();
        let loaded: Sample = load_json_config(&tmp.path().join("absent.json"), "Test");
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn garbage_file_yields_default() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let loaded: Sample = load_json_config(&path, "Test");
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn save_creates_parent_dirs_and_reloads() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("dir").join("sample.json");
        let sample = Sample {
            name: "stars".to_string(),
            count: 3,
        };
        save_json_config(&path, &sample, "Test").unwrap();
        let loaded: Sample = load_json_config(&path, "Test");
        assert_eq!(loaded, sample);
    }

    #[test]
    fn default_path_ends_with_app_dir() {
        let path = default_config_path("theme_client.json");
        assert!(path.ends_with("portfolio-theme/theme_client.json"));
    }
}

//! Error types for theme loading and configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("theme endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("theme descriptor is not valid JSON for the expected shape: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("theme descriptor failed validation: {0}")]
    Validation(String),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ThemeError>;

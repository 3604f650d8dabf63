//! Theme Loader — fetches the descriptor from the theme endpoint.

use crate::theme::config::ThemeClientConfig;
use crate::theme::descriptor::ThemeDescriptor;
use crate::theme::error::{Result, ThemeError};
use reqwest::Client;

#[derive(Debug, Clone)]
pub struct ThemeLoader {
    client: Client,
    endpoint: String,
}

impl ThemeLoader {
    /// Build a loader with its own HTTP client honouring the configured timeout.
    pub fn new(config: &ThemeClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::with_client(config.endpoint.clone(), client))
    }

    pub fn with_client(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One GET against the endpoint. Non-2xx, transport, parse and validation
    /// failures all surface as errors.
    pub async fn fetch(&self) -> Result<ThemeDescriptor> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ThemeError::Status(status));
        }

        let body = response.text().await?;
        ThemeDescriptor::from_json(&body)
    }

    /// Like [`fetch`](Self::fetch) but never fails: any error yields the
    /// built-in default descriptor.
    pub async fn load(&self) -> ThemeDescriptor {
        match self.fetch().await {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!(
                    endpoint = %self.endpoint,
                    error = %e,
                    "failed to load theme, using default"
                );
                ThemeDescriptor::default()
            }
        }
    }
}

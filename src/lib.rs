pub mod config;
pub mod document;
pub mod logging;
pub mod theme;

use crate::document::VirtualDocument;
use crate::theme::{ThemeClientConfig, ThemeManager};
use std::path::PathBuf;
use tokio::sync::broadcast::error::RecvError;

/// Headless entry point: keep a virtual document in sync with the theme
/// endpoint until Ctrl-C.
pub async fn run(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    logging::init();

    let path = config_path.unwrap_or_else(ThemeClientConfig::default_path);
    let config = theme::config::load_config(&path);
    tracing::info!(endpoint = %config.endpoint, interval = ?config.poll_interval(), "starting theme sync");

    let manager = ThemeManager::new(&config, VirtualDocument::new())?;
    let mut events = manager.subscribe();
    manager.init().await;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                manager.stop();
                break;
            }
            event = events.recv() => match event {
                Ok(event) => {
                    let info = manager.debug_info().await;
                    let variables = serde_json::to_string(&info.variables)?;
                    tracing::info!(
                        reason = %event.reason,
                        title = %event.theme.site.title,
                        %variables,
                        "theme applied"
                    );
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "theme events lagged");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    Ok(())
}

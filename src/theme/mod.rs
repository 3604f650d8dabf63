//! Remote theme: load the descriptor, apply it to the document, watch for changes.

pub mod applier;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod events;
pub mod loader;
pub mod manager;
pub mod watcher;

#[cfg(test)]
mod tests;

pub use config::{OutagePolicy, ThemeClientConfig};
pub use descriptor::{SocialPlatform, ThemeDescriptor};
pub use error::ThemeError;
pub use events::{ChangeReason, ThemeChangeEvent};
pub use loader::ThemeLoader;
pub use manager::{ThemeDebugInfo, ThemeManager};
pub use watcher::{ThemeWatcher, TickOutcome};

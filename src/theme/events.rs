use crate::theme::descriptor::ThemeDescriptor;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// Why a descriptor was (re-)applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeReason {
    Bootstrap,
    Watcher,
    Refresh,
}

impl fmt::Display for ChangeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeReason::Bootstrap => write!(f, "bootstrap"),
            ChangeReason::Watcher => write!(f, "watcher"),
            ChangeReason::Refresh => write!(f, "refresh"),
        }
    }
}

/// Broadcast after every application of a descriptor.
#[derive(Debug, Clone)]
pub struct ThemeChangeEvent {
    pub reason: ChangeReason,
    pub theme: Arc<ThemeDescriptor>,
    pub applied_at: DateTime<Utc>,
}

impl ThemeChangeEvent {
    pub fn new(reason: ChangeReason, theme: Arc<ThemeDescriptor>) -> Self {
        Self {
            reason,
            theme,
            applied_at: Utc::now(),
        }
    }
}

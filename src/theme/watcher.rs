//! Theme Watcher — background loop that polls the endpoint and re-applies the
//! theme when its content changes.

use crate::document::DocumentSurface;
use crate::theme::config::OutagePolicy;
use crate::theme::descriptor::ThemeDescriptor;
use crate::theme::events::ChangeReason;
use crate::theme::manager::ThemeCore;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Result of one reconciliation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Fetched descriptor equals the held one; the document was not touched.
    Unchanged,
    /// Fetched descriptor differed and was applied.
    Applied,
    /// The fetch failed and the outage policy said to keep the current theme.
    Skipped,
}

/// Shared handle to control the watcher loop.
pub struct ThemeWatcher<D> {
    running: Arc<AtomicBool>,
    /// Bumped on every start and stop; a loop exits once it no longer owns
    /// the current generation.
    generation: Arc<AtomicU64>,
    core: Arc<ThemeCore<D>>,
    interval: Duration,
}

impl<D> Clone for ThemeWatcher<D> {
    fn clone(&self) -> Self {
        Self {
            running: self.running.clone(),
            generation: self.generation.clone(),
            core: self.core.clone(),
            interval: self.interval,
        }
    }
}

impl<D: DocumentSurface + 'static> ThemeWatcher<D> {
    pub(crate) fn new(core: Arc<ThemeCore<D>>, interval: Duration) -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            generation: Arc::new(AtomicU64::new(0)),
            core,
            interval,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start the background polling loop. The first tick fires one interval
    /// after start. A loop left over from an earlier `stop()` exits at its
    /// next wake-up, so at most one loop polls at a time.
    pub fn start(&self) {
        if self.running.swap(true, Ordering::SeqCst) {
            tracing::info!("theme watcher already running");
            return;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let watcher = self.clone();
        tokio::spawn(async move {
            tracing::info!(interval = ?watcher.interval, generation, "theme watcher started");

            loop {
                tokio::time::sleep(watcher.interval).await;
                if !watcher.owns(generation) {
                    break;
                }
                watcher.tick().await;
            }

            tracing::info!(generation, "theme watcher stopped");
        });
    }

    /// Stop the loop. A tick already in flight completes.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    fn owns(&self, generation: u64) -> bool {
        self.is_running() && self.generation.load(Ordering::SeqCst) == generation
    }

    /// One fetch-compare-apply cycle.
    pub async fn tick(&self) -> TickOutcome {
        let theme = match self.core.loader.fetch().await {
            Ok(theme) => theme,
            Err(e) => match self.core.outage_policy {
                OutagePolicy::HoldLastKnownGood => {
                    tracing::warn!(error = %e, "theme poll failed, keeping current theme");
                    return TickOutcome::Skipped;
                }
                OutagePolicy::RevertToDefault => {
                    tracing::warn!(error = %e, "theme poll failed, falling back to default");
                    ThemeDescriptor::default()
                }
            },
        };

        if self.core.commit(theme, ChangeReason::Watcher, false).await {
            TickOutcome::Applied
        } else {
            TickOutcome::Unchanged
        }
    }
}

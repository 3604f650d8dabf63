//! Theme manager — the control surface other page code is handed.
//!
//! Owns the held descriptor, the document it is applied to and the watcher.
//! Construct one per page view and pass it (it is cheap to clone) to whatever
//! needs to refresh or inspect the theme.

use crate::document::DocumentSurface;
use crate::theme::applier::{self, STYLE_VARIABLES};
use crate::theme::config::{OutagePolicy, ThemeClientConfig};
use crate::theme::descriptor::{ThemeColors, ThemeDescriptor};
use crate::theme::error::Result;
use crate::theme::events::{ChangeReason, ThemeChangeEvent};
use crate::theme::loader::ThemeLoader;
use crate::theme::watcher::ThemeWatcher;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex, RwLock};

const EVENT_CAPACITY: usize = 16;

/// State shared between the manager and its watcher.
pub(crate) struct ThemeCore<D> {
    pub(crate) loader: ThemeLoader,
    pub(crate) outage_policy: OutagePolicy,
    current: RwLock<Option<Arc<ThemeDescriptor>>>,
    document: Mutex<D>,
    events: broadcast::Sender<ThemeChangeEvent>,
}

impl<D: DocumentSurface> ThemeCore<D> {
    /// Swap in `theme` and apply it. Unless `force` is set, a theme equal to
    /// the held one is dropped without touching the document.
    ///
    /// The document lock is held across compare, swap and apply so the
    /// document always reflects the held descriptor.
    pub(crate) async fn commit(
        &self,
        theme: ThemeDescriptor,
        reason: ChangeReason,
        force: bool,
    ) -> bool {
        let mut document = self.document.lock().await;
        let mut current = self.current.write().await;

        if !force && current.as_deref() == Some(&theme) {
            return false;
        }

        let theme = Arc::new(theme);
        *current = Some(theme.clone());
        drop(current);

        applier::apply(&theme, &mut *document);
        drop(document);

        tracing::info!(%reason, "theme updated");
        let _ = self.events.send(ThemeChangeEvent::new(reason, theme));
        true
    }
}

/// Snapshot of what the page currently shows, for debugging.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeDebugInfo {
    pub loaded: bool,
    pub watcher_running: bool,
    pub colors: Option<ThemeColors>,
    /// Styling variables as read back from the document.
    pub variables: BTreeMap<String, Option<String>>,
}

pub struct ThemeManager<D> {
    core: Arc<ThemeCore<D>>,
    watcher: ThemeWatcher<D>,
    initialized: Arc<AtomicBool>,
}

impl<D> Clone for ThemeManager<D> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
            watcher: self.watcher.clone(),
            initialized: self.initialized.clone(),
        }
    }
}

impl<D: DocumentSurface + 'static> ThemeManager<D> {
    pub fn new(config: &ThemeClientConfig, document: D) -> Result<Self> {
        let loader = ThemeLoader::new(config)?;
        Ok(Self::with_loader(config, loader, document))
    }

    /// Build around an existing loader; the loader's endpoint wins over
    /// `config.endpoint`.
    pub fn with_loader(config: &ThemeClientConfig, loader: ThemeLoader, document: D) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let core = Arc::new(ThemeCore {
            loader,
            outage_policy: config.outage_policy,
            current: RwLock::new(None),
            document: Mutex::new(document),
            events,
        });
        let watcher = ThemeWatcher::new(core.clone(), config.poll_interval());
        Self {
            core,
            watcher,
            initialized: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Bootstrap: install base styles, load, apply, start the watcher.
    /// Runs once per manager; returns `false` on repeat calls.
    pub async fn init(&self) -> bool {
        if self.initialized.swap(true, Ordering::SeqCst) {
            tracing::warn!("theme manager already initialized");
            return false;
        }

        {
            let mut document = self.core.document.lock().await;
            applier::install_base_styles(&mut *document);
        }

        let theme = self.core.loader.load().await;
        self.core.commit(theme, ChangeReason::Bootstrap, true).await;
        self.watcher.start();
        true
    }

    /// Load and apply unconditionally, bypassing the equality check.
    pub async fn refresh(&self) -> Arc<ThemeDescriptor> {
        let theme = self.core.loader.load().await;
        self.core.commit(theme, ChangeReason::Refresh, true).await;
        // Another writer may have landed in between; report what is held now.
        self.current()
            .await
            .unwrap_or_else(|| Arc::new(ThemeDescriptor::default()))
    }

    /// The held descriptor, `None` before the first load.
    pub async fn current(&self) -> Option<Arc<ThemeDescriptor>> {
        self.core.current.read().await.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ThemeChangeEvent> {
        self.core.events.subscribe()
    }

    pub fn watcher(&self) -> &ThemeWatcher<D> {
        &self.watcher
    }

    pub fn stop(&self) {
        self.watcher.stop();
    }

    /// Run `f` with exclusive access to the document.
    pub async fn with_document<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        let mut document = self.core.document.lock().await;
        f(&mut *document)
    }

    pub async fn debug_info(&self) -> ThemeDebugInfo {
        let current = self.current().await;
        let variables: BTreeMap<String, Option<String>> = self
            .with_document(|doc| {
                STYLE_VARIABLES
                    .iter()
                    .map(|name| (name.to_string(), doc.root_variable(name)))
                    .collect()
            })
            .await;

        ThemeDebugInfo {
            loaded: current.is_some(),
            watcher_running: self.watcher.is_running(),
            colors: current.map(|theme| theme.colors.clone()),
            variables,
        }
    }
}

use std::sync::Arc;

use sense_core::{Catalog, HighlightBroadcast};
use services::{BootService, ProgressStore, ServicesConfig};

use crate::audio::{AudioOutput, WebviewAudioOutput};

pub trait UiApp: Send + Sync {
    fn config(&self) -> ServicesConfig;
    fn catalog(&self) -> Arc<Catalog>;
    fn progress(&self) -> Arc<ProgressStore>;
    fn boot(&self) -> BootService;

    fn audio_output(&self) -> Arc<dyn AudioOutput> {
        Arc::new(WebviewAudioOutput::new())
    }
}

#[derive(Clone)]
pub struct AppContext {
    config: ServicesConfig,
    catalog: Arc<Catalog>,
    progress: Arc<ProgressStore>,
    boot: BootService,
    audio: Arc<dyn AudioOutput>,
    highlight: HighlightBroadcast,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            config: app.config(),
            catalog: app.catalog(),
            progress: app.progress(),
            boot: app.boot(),
            audio: app.audio_output(),
            highlight: HighlightBroadcast::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> ServicesConfig {
        self.config
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn boot(&self) -> BootService {
        self.boot.clone()
    }

    #[must_use]
    pub fn audio(&self) -> Arc<dyn AudioOutput> {
        Arc::clone(&self.audio)
    }

    /// The one active-segment value shared by every hub region.
    #[must_use]
    pub fn highlight(&self) -> HighlightBroadcast {
        self.highlight.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

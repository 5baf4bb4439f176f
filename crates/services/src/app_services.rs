use std::sync::Arc;

use sense_core::Catalog;
use storage::repository::Storage;
use tracing::info;

use crate::boot_service::BootService;
use crate::config::ServicesConfig;
use crate::error::AppServicesError;
use crate::progress_service::ProgressStore;
use crate::session_service::SessionStore;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    config: ServicesConfig,
    catalog: Arc<Catalog>,
    progress: Arc<ProgressStore>,
    session: Arc<SessionStore>,
    boot: BootService,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the
    /// threshold does not fit the catalog.
    pub async fn new_sqlite(db_url: &str, config: ServicesConfig) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(storage, config)
    }

    /// Build services that keep everything in memory.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the threshold does not fit the catalog.
    pub fn in_memory(config: ServicesConfig) -> Result<Self, AppServicesError> {
        Self::from_storage(Storage::in_memory(), config)
    }

    /// # Errors
    ///
    /// Returns `AppServicesError::Catalog` if the built-in content is invalid
    /// or the threshold cannot be met.
    pub fn from_storage(storage: Storage, config: ServicesConfig) -> Result<Self, AppServicesError> {
        let catalog = Catalog::standard()?;
        let policy = catalog.unlock_policy(config.unlock_threshold)?;
        info!(
            threshold = policy.threshold(),
            sections = catalog.sections().len(),
            "services ready"
        );

        let progress = Arc::new(ProgressStore::new(policy, Arc::clone(&storage.durable)));
        let session = Arc::new(SessionStore::new(Arc::clone(&storage.session)));
        let boot = BootService::new(Arc::clone(&session));

        Ok(Self {
            config,
            catalog: Arc::new(catalog),
            progress,
            session,
            boot,
        })
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
    pub fn session(&self) -> Arc<SessionStore> {
        Arc::clone(&self.session)
    }

    #[must_use]
    pub fn boot(&self) -> BootService {
        self.boot.clone()
    }
}

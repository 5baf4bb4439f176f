use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// String key/value store. Values are opaque to the adapter.
#[async_trait]
pub trait KeyValueRepository: Send + Sync {
    /// Read a value. A missing key is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite a value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and for
/// process-lifetime (session) values.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueRepository for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Backend that refuses every operation, like a browser with storage
/// disabled. Lets callers exercise their fallback paths.
#[derive(Debug, Clone)]
pub struct UnavailableRepository {
    reason: String,
}

impl UnavailableRepository {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn err(&self) -> StorageError {
        StorageError::Unavailable(self.reason.clone())
    }
}

#[async_trait]
impl KeyValueRepository for UnavailableRepository {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(self.err())
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(self.err())
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(self.err())
    }
}

/// Durable and session-scoped stores behind trait objects for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    /// Survives restarts (progress).
    pub durable: Arc<dyn KeyValueRepository>,
    /// Lives as long as the process (boot flag).
    pub session: Arc<dyn KeyValueRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let durable: Arc<dyn KeyValueRepository> = Arc::new(InMemoryRepository::new());
        let session: Arc<dyn KeyValueRepository> = Arc::new(InMemoryRepository::new());
        Self { durable, session }
    }

    /// Both stores fail every call.
    #[must_use]
    pub fn unavailable(reason: &str) -> Self {
        let durable: Arc<dyn KeyValueRepository> = Arc::new(UnavailableRepository::new(reason));
        let session: Arc<dyn KeyValueRepository> = Arc::new(UnavailableRepository::new(reason));
        Self { durable, session }
    }
}

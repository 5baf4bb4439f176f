use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use storage::keys;
use storage::repository::KeyValueRepository;
use tracing::{debug, warn};

/// Session-scoped "system active" flag. Once set it stays set for the
/// process, even if the backing store loses it.
pub struct SessionStore {
    repo: Arc<dyn KeyValueRepository>,
    active: AtomicBool,
}

impl SessionStore {
    #[must_use]
    pub fn new(repo: Arc<dyn KeyValueRepository>) -> Self {
        Self {
            repo,
            active: AtomicBool::new(false),
        }
    }

    pub async fn is_active(&self) -> bool {
        if self.active.load(Ordering::Acquire) {
            return true;
        }
        match self.repo.get(keys::SYSTEM_ACTIVE).await {
            Ok(value) => {
                let active = value.as_deref() == Some(keys::FLAG_TRUE);
                if active {
                    self.active.store(true, Ordering::Release);
                }
                active
            }
            Err(err) => {
                warn!(error = %err, "session storage unavailable");
                false
            }
        }
    }

    pub async fn activate(&self) {
        self.active.store(true, Ordering::Release);
        if let Err(err) = self.repo.set(keys::SYSTEM_ACTIVE, keys::FLAG_TRUE).await {
            warn!(error = %err, "could not persist session flag, keeping it in memory");
            return;
        }
        debug!("session activated");
    }
}

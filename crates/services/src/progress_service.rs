use std::sync::{Arc, Mutex, PoisonError};

use sense_core::model::{ProgressState, SectionId, UnlockPolicy, VisitOutcome};
use storage::keys;
use storage::repository::{KeyValueRepository, StorageError};
use tracing::{debug, info, warn};

/// Durable record of visited sections and the unlock derived from it.
///
/// Storage failures never reach callers: a read or write error switches the
/// store to an in-memory copy for the rest of the process.
pub struct ProgressStore {
    policy: UnlockPolicy,
    repo: Arc<dyn KeyValueRepository>,
    fallback: Mutex<Option<ProgressState>>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(policy: UnlockPolicy, repo: Arc<dyn KeyValueRepository>) -> Self {
        Self {
            policy,
            repo,
            fallback: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn policy(&self) -> &UnlockPolicy {
        &self.policy
    }

    /// Whether storage has failed and the store is running from memory.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.fallback_state().is_some()
    }

    /// Load the current state. Absent or malformed data reads as empty.
    pub async fn current_state(&self) -> ProgressState {
        if let Some(state) = self.fallback_state() {
            return state;
        }

        match self.repo.get(keys::VISITED_SELVES).await {
            Ok(None) => ProgressState::default(),
            Ok(Some(raw)) => match keys::decode_visited(&raw) {
                Ok(visited) => ProgressState::from_visited(visited, &self.policy),
                Err(err) => {
                    warn!(error = %err, "stored visited record is corrupt, treating as empty");
                    ProgressState::default()
                }
            },
            Err(err) => {
                let state = ProgressState::default();
                self.degrade(&err, state.clone());
                state
            }
        }
    }

    /// Record a visit to `id`.
    ///
    /// Already-visited and untracked ids perform no writes.
    pub async fn record_visit(&self, id: &SectionId) -> VisitOutcome {
        let current = self.current_state().await;
        let outcome = current.apply_visit(id, &self.policy);
        if !outcome.recorded {
            debug!(section = %id, "visit not recorded");
            return outcome;
        }

        if self.is_degraded() {
            self.store_fallback(outcome.state.clone());
        } else if let Err(err) = self.persist(&outcome.state).await {
            self.degrade(&err, outcome.state.clone());
        }

        debug!(
            section = %id,
            visited = outcome.state.visit_count(),
            "visit recorded"
        );
        if outcome.just_unlocked() {
            info!(threshold = self.policy.threshold(), "reflection unlocked");
        }
        outcome
    }

    /// The counter as stored, for diagnostics. `None` when absent,
    /// unreadable or malformed.
    pub async fn stored_counter(&self) -> Option<usize> {
        let raw = self.repo.get(keys::UNLOCK_COUNTER).await.ok()??;
        keys::decode_counter(&raw).ok()
    }

    /// Forget every visit.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the durable keys cannot be removed.
    pub async fn reset(&self) -> Result<(), StorageError> {
        self.repo.remove(keys::VISITED_SELVES).await?;
        self.repo.remove(keys::UNLOCK_COUNTER).await?;
        if self.is_degraded() {
            self.store_fallback(ProgressState::default());
        }
        info!("progress reset");
        Ok(())
    }

    async fn persist(&self, state: &ProgressState) -> Result<(), StorageError> {
        let raw = keys::encode_visited(state.visited())?;
        self.repo.set(keys::VISITED_SELVES, &raw).await?;
        self.repo
            .set(keys::UNLOCK_COUNTER, &keys::encode_counter(state.visit_count()))
            .await
    }

    fn degrade(&self, err: &StorageError, state: ProgressState) {
        warn!(error = %err, "progress storage unavailable, keeping progress in memory");
        self.store_fallback(state);
    }

    fn fallback_state(&self) -> Option<ProgressState> {
        self.fallback
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store_fallback(&self, state: ProgressState) {
        *self.fallback.lock().unwrap_or_else(PoisonError::into_inner) = Some(state);
    }
}

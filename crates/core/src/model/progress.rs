use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::ids::SectionId;

/// Number of distinct sections needed to unlock the reflection page.
pub const DEFAULT_UNLOCK_THRESHOLD: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UnlockPolicyError {
    #[error("unlock threshold must be > 0")]
    ZeroThreshold,

    #[error("no trackable sections configured")]
    NoTrackedSections,

    #[error("unlock threshold ({threshold}) exceeds tracked sections ({tracked})")]
    Unreachable { threshold: usize, tracked: usize },
}

/// Which sections count toward the unlock, and how many are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockPolicy {
    threshold: usize,
    tracked: BTreeSet<SectionId>,
}

impl UnlockPolicy {
    /// # Errors
    ///
    /// Returns `UnlockPolicyError` if the threshold is zero or cannot be
    /// reached with the tracked sections.
    pub fn new(
        threshold: usize,
        tracked: impl IntoIterator<Item = SectionId>,
    ) -> Result<Self, UnlockPolicyError> {
        let tracked: BTreeSet<SectionId> = tracked.into_iter().collect();
        if threshold == 0 {
            return Err(UnlockPolicyError::ZeroThreshold);
        }
        if tracked.is_empty() {
            return Err(UnlockPolicyError::NoTrackedSections);
        }
        if threshold > tracked.len() {
            return Err(UnlockPolicyError::Unreachable {
                threshold,
                tracked: tracked.len(),
            });
        }
        Ok(Self { threshold, tracked })
    }

    #[must_use]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    #[must_use]
    pub fn is_tracked(&self, id: &SectionId) -> bool {
        self.tracked.contains(id)
    }

    pub fn tracked(&self) -> impl Iterator<Item = &SectionId> {
        self.tracked.iter()
    }
}

/// Cross-session record of visited sections.
///
/// `unlocked` is always derived from the visited set; it is never stored on
/// its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressState {
    visited: BTreeSet<SectionId>,
    unlocked: bool,
}

impl ProgressState {
    /// Build a state from persisted ids, discarding anything the policy does
    /// not track.
    #[must_use]
    pub fn from_visited(
        visited: impl IntoIterator<Item = SectionId>,
        policy: &UnlockPolicy,
    ) -> Self {
        let visited: BTreeSet<SectionId> = visited
            .into_iter()
            .filter(|id| policy.is_tracked(id))
            .collect();
        let unlocked = visited.len() >= policy.threshold();
        Self { visited, unlocked }
    }

    #[must_use]
    pub fn visited(&self) -> &BTreeSet<SectionId> {
        &self.visited
    }

    #[must_use]
    pub fn visit_count(&self) -> usize {
        self.visited.len()
    }

    #[must_use]
    pub fn has_visited(&self, id: &SectionId) -> bool {
        self.visited.contains(id)
    }

    #[must_use]
    pub fn unlocked(&self) -> bool {
        self.unlocked
    }

    /// Apply a visit to `id`.
    ///
    /// Repeated or untracked ids leave the state untouched. The returned
    /// signal is `JustUnlocked` only on the insertion that crosses the
    /// threshold.
    #[must_use]
    pub fn apply_visit(&self, id: &SectionId, policy: &UnlockPolicy) -> VisitOutcome {
        if !policy.is_tracked(id) || self.visited.contains(id) {
            return VisitOutcome {
                state: self.clone(),
                recorded: false,
                signal: UnlockSignal::None,
            };
        }

        let was_unlocked = self.visited.len() >= policy.threshold();
        let mut visited = self.visited.clone();
        visited.insert(id.clone());
        let unlocked = visited.len() >= policy.threshold();
        let signal = if unlocked && !was_unlocked {
            UnlockSignal::JustUnlocked
        } else {
            UnlockSignal::None
        };

        VisitOutcome {
            state: Self { visited, unlocked },
            recorded: true,
            signal,
        }
    }
}

/// One-shot celebration signal, distinct from the steady `unlocked` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockSignal {
    None,
    JustUnlocked,
}

/// Result of recording a visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitOutcome {
    pub state: ProgressState,
    /// Whether the visit added a new section.
    pub recorded: bool,
    pub signal: UnlockSignal,
}

impl VisitOutcome {
    #[must_use]
    pub fn just_unlocked(&self) -> bool {
        self.signal == UnlockSignal::JustUnlocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(path: &str) -> SectionId {
        SectionId::new(path).unwrap()
    }

    fn policy() -> UnlockPolicy {
        UnlockPolicy::new(4, ["/a", "/b", "/c", "/d", "/e"].map(id)).unwrap()
    }

    #[test]
    fn policy_rejects_zero_threshold() {
        let err = UnlockPolicy::new(0, [id("/a")]).unwrap_err();
        assert_eq!(err, UnlockPolicyError::ZeroThreshold);
    }

    #[test]
    fn policy_rejects_unreachable_threshold() {
        let err = UnlockPolicy::new(3, [id("/a"), id("/b")]).unwrap_err();
        assert_eq!(
            err,
            UnlockPolicyError::Unreachable {
                threshold: 3,
                tracked: 2
            }
        );
    }

    #[test]
    fn repeated_visit_is_a_no_op() {
        let policy = policy();
        let first = ProgressState::default().apply_visit(&id("/a"), &policy);
        let again = first.state.apply_visit(&id("/a"), &policy);
        assert!(first.recorded);
        assert!(!again.recorded);
        assert_eq!(first.state, again.state);
    }

    #[test]
    fn untracked_visit_is_ignored() {
        let outcome = ProgressState::default().apply_visit(&id("/elsewhere"), &policy());
        assert!(!outcome.recorded);
        assert_eq!(outcome.state.visit_count(), 0);
    }

    #[test]
    fn signal_fires_only_on_crossing() {
        let policy = policy();
        let mut state = ProgressState::default();
        let mut fired = 0;
        for path in ["/c", "/a", "/c", "/e", "/b", "/d", "/a"] {
            let outcome = state.apply_visit(&id(path), &policy);
            if outcome.just_unlocked() {
                fired += 1;
                assert_eq!(outcome.state.visit_count(), 4);
            }
            state = outcome.state;
        }
        assert_eq!(fired, 1);
        assert!(state.unlocked());
        assert_eq!(state.visit_count(), 5);
    }

    #[test]
    fn from_visited_derives_unlock_and_drops_untracked() {
        let state = ProgressState::from_visited(
            ["/a", "/b", "/zzz", "/c", "/d"].map(id),
            &policy(),
        );
        assert_eq!(state.visit_count(), 4);
        assert!(state.unlocked());
        assert!(!state.has_visited(&id("/zzz")));
    }
}

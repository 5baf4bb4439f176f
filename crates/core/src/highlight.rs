//! Shared "active segment" value read by every view region.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::trace;

use crate::model::SegmentId;

/// What a press on a segment should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    /// The segment was not active and now is.
    Activated,
    /// The segment was already active; the caller should follow it.
    Confirmed,
}

/// Single writer-facing handle for the active segment.
///
/// Clones share the same value. Writes are last-writer-wins and only notify
/// subscribers when the value actually changes.
#[derive(Clone, Debug)]
pub struct HighlightBroadcast {
    tx: Arc<watch::Sender<Option<SegmentId>>>,
}

impl HighlightBroadcast {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    pub fn set_active(&self, id: SegmentId) {
        self.replace(Some(id));
    }

    pub fn clear(&self) {
        self.replace(None);
    }

    #[must_use]
    pub fn current(&self) -> Option<SegmentId> {
        *self.tx.borrow()
    }

    #[must_use]
    pub fn is_active(&self, id: SegmentId) -> bool {
        self.current() == Some(id)
    }

    /// Click/tap semantics: first press activates, a press on the active
    /// segment confirms it.
    pub fn press(&self, id: SegmentId) -> Press {
        if self.is_active(id) {
            Press::Confirmed
        } else {
            self.set_active(id);
            Press::Activated
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> HighlightSubscriber {
        HighlightSubscriber {
            rx: self.tx.subscribe(),
        }
    }

    fn replace(&self, next: Option<SegmentId>) {
        let changed = self.tx.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
        if changed {
            trace!(active = ?next, "highlight changed");
        }
    }
}

impl Default for HighlightBroadcast {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for HighlightBroadcast {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tx, &other.tx)
    }
}

/// Read side for views that react to changes.
pub struct HighlightSubscriber {
    rx: watch::Receiver<Option<SegmentId>>,
}

impl HighlightSubscriber {
    #[must_use]
    pub fn current(&self) -> Option<SegmentId> {
        *self.rx.borrow()
    }

    /// Wait for the next change. Returns `None` once every broadcast handle
    /// has been dropped.
    pub async fn changed(&mut self) -> Option<Option<SegmentId>> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}

//! Async driver that paces a [`PlaybackEngine`] on the tokio clock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use sense_core::audio::AudioSink;
use sense_core::playback::{CancelToken, PlaybackEngine, PlaybackStatus, StartOutcome, TickOutcome};
use tracing::trace;

/// Shortest accepted interval between revealed characters.
pub const MIN_REVEAL_INTERVAL: Duration = Duration::from_millis(1);

/// What a view renders for the current reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealFrame {
    pub text: String,
    pub status: PlaybackStatus,
}

/// Shared handle to one reveal engine.
///
/// `start` and `cancel` are synchronous, so a replacement text has fully
/// stopped the previous cycle before `start` returns. `run` is the timer
/// loop; it owns no state and exits as soon as its token goes stale.
pub struct Typewriter<A: AudioSink> {
    engine: Arc<Mutex<PlaybackEngine<A>>>,
}

impl<A: AudioSink> Clone for Typewriter<A> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<A: AudioSink> Typewriter<A> {
    pub fn new(audio: A) -> Self {
        Self {
            engine: Arc::new(Mutex::new(PlaybackEngine::new(audio))),
        }
    }

    pub fn start(&self, text: impl Into<String>) -> StartOutcome {
        self.engine().start(text)
    }

    pub fn cancel(&self) {
        self.engine().cancel();
    }

    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.engine().status()
    }

    #[must_use]
    pub fn snapshot(&self) -> RevealFrame {
        let engine = self.engine();
        RevealFrame {
            text: engine.revealed().to_owned(),
            status: engine.status(),
        }
    }

    /// Reveal one character every `speed` until the cycle identified by
    /// `token` completes or is replaced.
    ///
    /// `on_frame` sees every revealed prefix. Returns `Complete` when this
    /// cycle finished, and `Cancelled` when it was cancelled or replaced,
    /// whatever the engine is doing for the newer cycle.
    pub async fn run<F>(&self, token: CancelToken, speed: Duration, mut on_frame: F) -> PlaybackStatus
    where
        F: FnMut(&RevealFrame),
    {
        let speed = speed.max(MIN_REVEAL_INTERVAL);
        {
            let engine = self.engine();
            if engine.is_current(token) && engine.status() == PlaybackStatus::Complete {
                drop(engine);
                on_frame(&self.snapshot());
                return PlaybackStatus::Complete;
            }
        }

        loop {
            tokio::time::sleep(speed).await;
            let (outcome, frame) = {
                let mut engine = self.engine();
                let outcome = engine.tick(token);
                let frame = RevealFrame {
                    text: engine.revealed().to_owned(),
                    status: engine.status(),
                };
                (outcome, frame)
            };
            match outcome {
                TickOutcome::Advanced => on_frame(&frame),
                TickOutcome::Completed => {
                    on_frame(&frame);
                    return PlaybackStatus::Complete;
                }
                TickOutcome::Stale => {
                    trace!(generation = token.generation(), "reveal driver exiting on stale token");
                    return PlaybackStatus::Cancelled;
                }
            }
        }
    }

    /// Start `text` and drive it to the end. A no-op restart returns
    /// immediately with the current status.
    pub async fn play<F>(&self, text: impl Into<String>, speed: Duration, on_frame: F) -> PlaybackStatus
    where
        F: FnMut(&RevealFrame),
    {
        match self.start(text) {
            StartOutcome::Started(token) => self.run(token, speed, on_frame).await,
            StartOutcome::Unchanged(_) => self.status(),
        }
    }

    fn engine(&self) -> MutexGuard<'_, PlaybackEngine<A>> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use sense_core::audio::{AudioCue, AudioError, AudioSink};
use sense_core::boot::{BootPhase, BootProgress, MAX_BOOT_STEP};
use tracing::{debug, warn};

use crate::session_service::SessionStore;

/// Interval between boot progress steps.
pub const BOOT_TICK: Duration = Duration::from_millis(400);

/// Pause on a full bar before the overlay goes away.
pub const BOOT_SETTLE: Duration = Duration::from_millis(1200);

/// Runs the hub's one-per-session loading sequence.
#[derive(Clone)]
pub struct BootService {
    session: Arc<SessionStore>,
    tick: Duration,
    settle: Duration,
}

impl BootService {
    #[must_use]
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self {
            session,
            tick: BOOT_TICK,
            settle: BOOT_SETTLE,
        }
    }

    #[must_use]
    pub fn with_timing(mut self, tick: Duration, settle: Duration) -> Self {
        self.tick = tick;
        self.settle = settle;
        self
    }

    /// Where the hub should start: `Ready` if this session already booted.
    pub async fn initial(&self) -> BootProgress {
        if self.session.is_active().await {
            BootProgress::resumed()
        } else {
            BootProgress::new()
        }
    }

    /// Run the sequence after the user's start action.
    ///
    /// Marks the session active, loops the boot cue while random steps fill
    /// the bar, then stops the cue and settles. Every intermediate state is
    /// handed to `on_progress`. If the session was already active this
    /// returns `Ready` straight away.
    pub async fn run<A, R, F>(&self, audio: &mut A, rng: &mut R, mut on_progress: F) -> BootProgress
    where
        A: AudioSink,
        R: Rng,
        F: FnMut(BootProgress),
    {
        let mut boot = self.initial().await;
        if !boot.begin() {
            on_progress(boot);
            return boot;
        }
        self.session.activate().await;

        audio.set_looping(AudioCue::BootLoop.loops());
        audio.set_volume(AudioCue::BootLoop.default_volume());
        audio.rewind();
        if let Err(err) = audio.play() {
            log_audio_failure(&err);
        }
        on_progress(boot);

        loop {
            tokio::time::sleep(self.tick).await;
            let step = rng.random_range(0.0..MAX_BOOT_STEP);
            let phase = boot.advance(step);
            on_progress(boot);
            if phase != BootPhase::Loading {
                break;
            }
        }

        audio.pause();
        audio.rewind();
        debug!("boot bar full, settling");

        tokio::time::sleep(self.settle).await;
        boot.settle();
        on_progress(boot);
        boot
    }
}

fn log_audio_failure(err: &AudioError) {
    match err {
        AudioError::Blocked(reason) => debug!(%reason, "boot audio blocked"),
        other => warn!(error = %other, "boot audio failed"),
    }
}

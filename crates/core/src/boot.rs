//! Hub boot sequence: a fake loading bar shown once per session.

/// Number of lit cells in the boot progress bar.
pub const BOOT_SEGMENTS: u32 = 10;

/// Largest single progress step.
pub const MAX_BOOT_STEP: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    /// Waiting for the user to start the system.
    AwaitingStart,
    Loading,
    /// Bar is full; the overlay is about to fade out.
    Settling,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BootProgress {
    phase: BootPhase,
    progress: f32,
}

impl BootProgress {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: BootPhase::AwaitingStart,
            progress: 0.0,
        }
    }

    /// Already booted this session: jump straight to `Ready`.
    #[must_use]
    pub fn resumed() -> Self {
        Self {
            phase: BootPhase::Ready,
            progress: 100.0,
        }
    }

    /// Returns `true` if the sequence actually started.
    pub fn begin(&mut self) -> bool {
        if self.phase != BootPhase::AwaitingStart {
            return false;
        }
        self.phase = BootPhase::Loading;
        true
    }

    /// Add one step of progress, clamped to `0..=MAX_BOOT_STEP`.
    pub fn advance(&mut self, step: f32) -> BootPhase {
        if self.phase != BootPhase::Loading {
            return self.phase;
        }
        let step = if step.is_finite() {
            step.clamp(0.0, MAX_BOOT_STEP)
        } else {
            0.0
        };
        self.progress += step;
        if self.progress >= 100.0 {
            self.progress = 100.0;
            self.phase = BootPhase::Settling;
        }
        self.phase
    }

    pub fn settle(&mut self) -> BootPhase {
        if self.phase == BootPhase::Settling {
            self.phase = BootPhase::Ready;
        }
        self.phase
    }

    #[must_use]
    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    /// Whole percent shown next to the bar.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u32 {
        self.progress.floor() as u32
    }

    #[must_use]
    pub fn lit_segments(&self) -> u32 {
        self.percent() * BOOT_SEGMENTS / 100
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == BootPhase::Ready
    }
}

impl Default for BootProgress {
    fn default() -> Self {
        Self::new()
    }
}

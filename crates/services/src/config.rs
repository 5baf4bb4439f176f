use std::time::Duration;

use sense_core::model::DEFAULT_UNLOCK_THRESHOLD;

/// Default delay per revealed character on section pages.
pub const DEFAULT_REVEAL_SPEED: Duration = Duration::from_millis(15);

/// Default delay per revealed character in the reflection sequence.
pub const DEFAULT_SCENE_SPEED: Duration = Duration::from_millis(25);

/// Tunables shared by every service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicesConfig {
    /// Distinct sections needed to unlock the reflection.
    pub unlock_threshold: usize,
    pub reveal_speed: Duration,
    pub scene_speed: Duration,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            unlock_threshold: DEFAULT_UNLOCK_THRESHOLD,
            reveal_speed: DEFAULT_REVEAL_SPEED,
            scene_speed: DEFAULT_SCENE_SPEED,
        }
    }
}

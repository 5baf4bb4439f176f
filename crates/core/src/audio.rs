//! Audio cues and the playback primitive the engine drives.

use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Errors from an audio device. None of them are fatal to callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AudioError {
    /// Playback was refused by the environment (autoplay policy).
    #[error("playback blocked: {0}")]
    Blocked(String),

    #[error("audio device unavailable: {0}")]
    Unavailable(String),
}

/// Stable references to the sound assets used across pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// Looping keyboard clatter behind a text reveal.
    TypingLoop,
    /// Looping hum while the hub boots.
    BootLoop,
    /// Short click on hover.
    HoverClick,
    /// Same click, louder, when hovering a detail of the open facet.
    DetailClick,
    /// Confirm chime when a section page opens.
    AlertConfirm,
}

impl AudioCue {
    #[must_use]
    pub fn source(self) -> &'static str {
        match self {
            Self::TypingLoop => "/audio/mixkit-smartphone-digital-keyboard-1394.wav",
            Self::BootLoop => "/audio/mixkit-sci-fi-loading-operative-system-2529.wav",
            Self::HoverClick | Self::DetailClick => {
                "/audio/mixkit-sci-fi-interface-robot-click-901.wav"
            }
            Self::AlertConfirm => {
                "/audio/rescopicsound-ui-alert-menu-modern-interface-confirm-small-230482.mp3"
            }
        }
    }

    #[must_use]
    pub fn loops(self) -> bool {
        matches!(self, Self::TypingLoop | Self::BootLoop)
    }

    #[must_use]
    pub fn default_volume(self) -> f32 {
        match self {
            Self::TypingLoop | Self::BootLoop => 1.0,
            Self::HoverClick => 0.4,
            Self::DetailClick => 0.8,
            Self::AlertConfirm => 0.7,
        }
    }
}

/// A single loaded sound that can be started, paused and rewound.
pub trait AudioSink {
    /// Start (or resume) playback.
    ///
    /// # Errors
    ///
    /// Returns `AudioError` if the device refuses to play.
    fn play(&mut self) -> Result<(), AudioError>;

    fn pause(&mut self);

    /// Seek back to the start.
    fn rewind(&mut self);

    fn set_volume(&mut self, volume: f32);

    fn set_looping(&mut self, looping: bool);
}

impl<T: AudioSink + ?Sized> AudioSink for Box<T> {
    fn play(&mut self) -> Result<(), AudioError> {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn rewind(&mut self) {
        (**self).rewind();
    }

    fn set_volume(&mut self, volume: f32) {
        (**self).set_volume(volume);
    }

    fn set_looping(&mut self, looping: bool) {
        (**self).set_looping(looping);
    }
}

/// Sink that discards everything. Used for headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn rewind(&mut self) {}

    fn set_volume(&mut self, _volume: f32) {}

    fn set_looping(&mut self, _looping: bool) {}
}

/// Call recorded by [`RecordingAudio`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioEvent {
    Play,
    Pause,
    Rewind,
    Volume(f32),
    Looping(bool),
}

/// Sink that records every call, for tests.
///
/// Clones share the same log, so a test can keep one handle while the engine
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    events: Arc<Mutex<Vec<AudioEvent>>>,
    playing: Arc<Mutex<bool>>,
    blocked: bool,
}

impl RecordingAudio {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose `play` is always refused, like a browser without a user
    /// gesture.
    #[must_use]
    pub fn blocked() -> Self {
        Self {
            blocked: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn events(&self) -> Vec<AudioEvent> {
        self.events.lock().map(|guard| guard.clone()).unwrap_or_default()
    }

    #[must_use]
    pub fn count(&self, event: AudioEvent) -> usize {
        self.events().iter().filter(|e| **e == event).count()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing.lock().map(|guard| *guard).unwrap_or(false)
    }

    fn push(&self, event: AudioEvent) {
        if let Ok(mut guard) = self.events.lock() {
            guard.push(event);
        }
    }

    fn set_playing(&self, value: bool) {
        if let Ok(mut guard) = self.playing.lock() {
            *guard = value;
        }
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self) -> Result<(), AudioError> {
        self.push(AudioEvent::Play);
        if self.blocked {
            return Err(AudioError::Blocked("no user gesture".into()));
        }
        self.set_playing(true);
        Ok(())
    }

    fn pause(&mut self) {
        self.push(AudioEvent::Pause);
        self.set_playing(false);
    }

    fn rewind(&mut self) {
        self.push(AudioEvent::Rewind);
    }

    fn set_volume(&mut self, volume: f32) {
        self.push(AudioEvent::Volume(volume));
    }

    fn set_looping(&mut self, looping: bool) {
        self.push(AudioEvent::Looping(looping));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ambient_cues_loop() {
        assert!(AudioCue::TypingLoop.loops());
        assert!(AudioCue::BootLoop.loops());
        assert!(!AudioCue::HoverClick.loops());
        assert!(!AudioCue::AlertConfirm.loops());
        assert!(!AudioCue::DetailClick.loops());
        assert_eq!(
            AudioCue::DetailClick.source(),
            AudioCue::HoverClick.source()
        );
    }

    #[test]
    fn recording_clones_share_log() {
        let audio = RecordingAudio::new();
        let mut handle = audio.clone();
        handle.play().unwrap();
        handle.pause();
        assert_eq!(audio.events(), vec![AudioEvent::Play, AudioEvent::Pause]);
        assert!(!audio.is_playing());
    }

    #[test]
    fn blocked_sink_refuses_play() {
        let mut audio = RecordingAudio::blocked();
        assert!(matches!(audio.play(), Err(AudioError::Blocked(_))));
        assert!(!audio.is_playing());
    }
}

//! Character-by-character text reveal tied to a looping audio cue.
//!
//! The engine is a plain state machine: something else owns the timer and
//! calls [`PlaybackEngine::tick`] once per cadence interval with the token
//! returned by [`PlaybackEngine::start`]. Starting a new text bumps the
//! generation, so ticks from an older cycle are rejected as stale.

use tracing::{debug, warn};

use crate::audio::{AudioError, AudioSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Idle,
    Playing,
    Complete,
    Cancelled,
}

impl PlaybackStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Cancelled)
    }
}

/// Identifies one reveal cycle. Stale tokens are ignored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CancelToken {
    generation: u64,
}

impl CancelToken {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Result of [`PlaybackEngine::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new cycle began; the caller should drive it.
    Started(CancelToken),
    /// Same text already playing or complete; the existing cycle stands.
    Unchanged(CancelToken),
}

impl StartOutcome {
    #[must_use]
    pub fn token(self) -> CancelToken {
        match self {
            Self::Started(token) | Self::Unchanged(token) => token,
        }
    }

    #[must_use]
    pub fn is_started(self) -> bool {
        matches!(self, Self::Started(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Advanced,
    /// The final character was revealed by this tick. Reported once per cycle.
    Completed,
    /// Token belongs to a replaced or finished cycle.
    Stale,
}

/// Reveal progress for one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSession {
    source: String,
    revealed_bytes: usize,
    revealed_chars: usize,
    total_chars: usize,
    status: PlaybackStatus,
}

impl PlaybackSession {
    fn new(source: String) -> Self {
        let total_chars = source.chars().count();
        Self {
            source,
            revealed_bytes: 0,
            revealed_chars: 0,
            total_chars,
            status: PlaybackStatus::Idle,
        }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn revealed(&self) -> &str {
        &self.source[..self.revealed_bytes]
    }

    /// Revealed length in characters.
    #[must_use]
    pub fn revealed_len(&self) -> usize {
        self.revealed_chars
    }

    #[must_use]
    pub fn total_len(&self) -> usize {
        self.total_chars
    }

    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    fn reveal_next(&mut self) -> bool {
        let Some(next) = self.source[self.revealed_bytes..].chars().next() else {
            return false;
        };
        self.revealed_bytes += next.len_utf8();
        self.revealed_chars += 1;
        true
    }

    fn is_fully_revealed(&self) -> bool {
        self.revealed_bytes == self.source.len()
    }
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// Owns one audio sink and at most one active reveal cycle.
pub struct PlaybackEngine<A: AudioSink> {
    audio: A,
    session: PlaybackSession,
    generation: u64,
}

impl<A: AudioSink> PlaybackEngine<A> {
    pub fn new(mut audio: A) -> Self {
        audio.set_looping(true);
        Self {
            audio,
            session: PlaybackSession::default(),
            generation: 0,
        }
    }

    /// Replace the current cycle with a reveal of `text`.
    ///
    /// Any cycle in progress is cancelled (ticks invalidated, audio paused and
    /// rewound) before the new one begins. Empty text completes immediately
    /// without touching the audio. Re-issuing the text that is already
    /// playing or complete leaves everything as is.
    pub fn start(&mut self, text: impl Into<String>) -> StartOutcome {
        let text = text.into();
        let same_text = self.session.source == text;
        if same_text
            && matches!(
                self.session.status,
                PlaybackStatus::Playing | PlaybackStatus::Complete
            )
        {
            return StartOutcome::Unchanged(self.token());
        }

        self.cancel();
        self.generation += 1;
        self.session = PlaybackSession::new(text);

        if self.session.total_chars == 0 {
            self.session.status = PlaybackStatus::Complete;
            debug!(generation = self.generation, "empty reveal completed immediately");
            return StartOutcome::Started(self.token());
        }

        self.session.status = PlaybackStatus::Playing;
        self.audio.rewind();
        if let Err(err) = self.audio.play() {
            log_audio_failure(&err);
        }
        debug!(
            generation = self.generation,
            chars = self.session.total_chars,
            "reveal started"
        );
        StartOutcome::Started(self.token())
    }

    /// Reveal one more character of the cycle identified by `token`.
    pub fn tick(&mut self, token: CancelToken) -> TickOutcome {
        if !self.is_current(token) || self.session.status != PlaybackStatus::Playing {
            return TickOutcome::Stale;
        }

        self.session.reveal_next();
        if self.session.is_fully_revealed() {
            self.session.status = PlaybackStatus::Complete;
            self.release_audio();
            debug!(generation = self.generation, "reveal complete");
            return TickOutcome::Completed;
        }
        TickOutcome::Advanced
    }

    /// Cancel the current cycle if it has not finished.
    ///
    /// Outstanding tokens become stale either way.
    pub fn cancel(&mut self) {
        let was_playing = self.session.status == PlaybackStatus::Playing;
        if !self.session.status.is_terminal() {
            self.session.status = PlaybackStatus::Cancelled;
        }
        if was_playing {
            self.release_audio();
            debug!(generation = self.generation, "reveal cancelled");
        }
        self.generation += 1;
    }

    #[must_use]
    pub fn is_current(&self, token: CancelToken) -> bool {
        token.generation == self.generation
    }

    #[must_use]
    pub fn token(&self) -> CancelToken {
        CancelToken {
            generation: self.generation,
        }
    }

    #[must_use]
    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    #[must_use]
    pub fn revealed(&self) -> &str {
        self.session.revealed()
    }

    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.session.status
    }

    #[must_use]
    pub fn audio(&self) -> &A {
        &self.audio
    }

    fn release_audio(&mut self) {
        self.audio.pause();
        self.audio.rewind();
    }
}

impl<A: AudioSink> Drop for PlaybackEngine<A> {
    fn drop(&mut self) {
        if self.session.status == PlaybackStatus::Playing {
            self.release_audio();
        }
    }
}

fn log_audio_failure(err: &AudioError) {
    match err {
        AudioError::Blocked(reason) => debug!(%reason, "reveal audio blocked, continuing silently"),
        other => warn!(error = %other, "reveal audio failed, continuing silently"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioEvent, RecordingAudio};

    fn engine() -> (PlaybackEngine<RecordingAudio>, RecordingAudio) {
        let audio = RecordingAudio::new();
        (PlaybackEngine::new(audio.clone()), audio)
    }

    #[test]
    fn reveals_prefixes_and_stops_audio_once() {
        let (mut engine, audio) = engine();
        let token = engine.start("HELLO").token();
        assert!(audio.is_playing());

        let mut frames = Vec::new();
        let mut outcomes = Vec::new();
        for _ in 0..5 {
            outcomes.push(engine.tick(token));
            frames.push(engine.revealed().to_string());
        }

        assert_eq!(frames, ["H", "HE", "HEL", "HELL", "HELLO"]);
        assert_eq!(outcomes[..4], [TickOutcome::Advanced; 4]);
        assert_eq!(outcomes[4], TickOutcome::Completed);
        assert_eq!(engine.status(), PlaybackStatus::Complete);
        assert_eq!(audio.count(AudioEvent::Pause), 1);
        assert!(!audio.is_playing());

        assert_eq!(engine.tick(token), TickOutcome::Stale);
        assert_eq!(audio.count(AudioEvent::Pause), 1);
    }

    #[test]
    fn restart_cancels_prior_cycle_before_new_tick() {
        let (mut engine, audio) = engine();
        let old = engine.start("first text").token();
        engine.tick(old);
        engine.tick(old);

        let new = engine.start("second").token();
        assert_ne!(old, new);
        // prior audio stopped and rewound before the new play
        let events = audio.events();
        let second_play = events
            .iter()
            .rposition(|e| *e == AudioEvent::Play)
            .unwrap();
        assert!(events[..second_play].contains(&AudioEvent::Pause));
        assert_eq!(audio.count(AudioEvent::Play), 2);

        assert_eq!(engine.tick(old), TickOutcome::Stale);
        assert_eq!(engine.revealed(), "");
        assert_eq!(engine.tick(new), TickOutcome::Advanced);
        assert_eq!(engine.revealed(), "s");
    }

    #[test]
    fn empty_text_completes_without_audio() {
        let (mut engine, audio) = engine();
        let outcome = engine.start("");
        assert!(outcome.is_started());
        assert_eq!(engine.status(), PlaybackStatus::Complete);
        assert_eq!(audio.count(AudioEvent::Play), 0);
        assert_eq!(engine.tick(outcome.token()), TickOutcome::Stale);
    }

    #[test]
    fn same_text_after_completion_is_a_no_op() {
        let (mut engine, audio) = engine();
        let token = engine.start("ab").token();
        engine.tick(token);
        engine.tick(token);
        assert_eq!(engine.status(), PlaybackStatus::Complete);

        let again = engine.start("ab");
        assert_eq!(again, StartOutcome::Unchanged(token));
        assert_eq!(engine.revealed(), "ab");
        assert_eq!(audio.count(AudioEvent::Play), 1);
    }

    #[test]
    fn same_text_after_cancel_restarts() {
        let (mut engine, _audio) = engine();
        engine.start("ab");
        engine.cancel();
        assert_eq!(engine.status(), PlaybackStatus::Cancelled);
        assert!(engine.start("ab").is_started());
        assert_eq!(engine.status(), PlaybackStatus::Playing);
    }

    #[test]
    fn blocked_audio_does_not_stop_reveal() {
        let audio = RecordingAudio::blocked();
        let mut engine = PlaybackEngine::new(audio.clone());
        let token = engine.start("ok").token();
        assert_eq!(engine.tick(token), TickOutcome::Advanced);
        assert_eq!(engine.tick(token), TickOutcome::Completed);
        assert_eq!(engine.revealed(), "ok");
    }

    #[test]
    fn multibyte_text_reveals_whole_characters() {
        let (mut engine, _audio) = engine();
        let token = engine.start("哲学").token();
        engine.tick(token);
        assert_eq!(engine.revealed(), "哲");
        assert_eq!(engine.session().revealed_len(), 1);
        assert_eq!(engine.tick(token), TickOutcome::Completed);
        assert_eq!(engine.revealed(), "哲学");
    }

    #[test]
    fn cancel_after_complete_keeps_status() {
        let (mut engine, audio) = engine();
        let token = engine.start("a").token();
        engine.tick(token);
        engine.cancel();
        assert_eq!(engine.status(), PlaybackStatus::Complete);
        assert_eq!(audio.count(AudioEvent::Pause), 1);
    }

    #[test]
    fn drop_while_playing_releases_audio() {
        let audio = RecordingAudio::new();
        {
            let mut engine = PlaybackEngine::new(audio.clone());
            engine.start("unfinished");
            assert!(audio.is_playing());
        }
        assert!(!audio.is_playing());
    }
}

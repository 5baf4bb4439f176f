//! Audio sinks backed by `HTMLAudioElement`s inside the webview.

use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::document::eval;
use sense_core::audio::{AudioCue, AudioError, AudioSink};
use tracing::{debug, warn};

pub type SharedSink = Box<dyn AudioSink + Send>;

/// Opens one sink per cue. Views ask for a sink once and keep it.
pub trait AudioOutput: Send + Sync {
    fn open(&self, cue: AudioCue) -> SharedSink;
}

#[derive(Debug, Default)]
pub struct WebviewAudioOutput {
    next_handle: AtomicU32,
}

impl WebviewAudioOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WebviewAudioOutput {
    fn next_key(&self, cue: AudioCue) -> String {
        let n = self.next_handle.fetch_add(1, Ordering::Relaxed);
        format!("{cue:?}-{n}")
    }
}

impl AudioOutput for WebviewAudioOutput {
    fn open(&self, cue: AudioCue) -> SharedSink {
        Box::new(WebviewAudio {
            handle: self.next_key(cue),
            source: cue.source(),
        })
    }
}

/// One audio element, addressed by handle in a page-global registry.
///
/// Calls are fire-and-forget; a rejected `play()` promise is swallowed on the
/// page, so autoplay refusals never surface here.
#[derive(Debug)]
pub struct WebviewAudio {
    handle: String,
    source: &'static str,
}

impl WebviewAudio {
    fn run(&self, op: &str) {
        let _ = eval(&self.script(op));
    }

    fn script(&self, op: &str) -> String {
        let handle = &self.handle;
        let source = self.source;
        format!(
            r#"(function() {{
                const reg = window.__senseAudio || (window.__senseAudio = {{}});
                const a = reg[{handle:?}] || (reg[{handle:?}] = new Audio({source:?}));
                {op}
            }})();"#
        )
    }

    /// Stops the element and forgets it, without creating one that was
    /// never touched.
    fn release_script(&self) -> String {
        let handle = &self.handle;
        format!(
            r#"(function() {{
                const reg = window.__senseAudio;
                if (!reg) return;
                const a = reg[{handle:?}];
                if (a) {{ a.pause(); a.currentTime = 0; }}
                delete reg[{handle:?}];
            }})();"#
        )
    }
}

impl Drop for WebviewAudio {
    fn drop(&mut self) {
        let _ = eval(&self.release_script());
    }
}

impl AudioSink for WebviewAudio {
    fn play(&mut self) -> Result<(), AudioError> {
        self.run("a.play().catch(() => {});");
        Ok(())
    }

    fn pause(&mut self) {
        self.run("a.pause();");
    }

    fn rewind(&mut self) {
        self.run("a.currentTime = 0;");
    }

    fn set_volume(&mut self, volume: f32) {
        let volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.run(&format!("a.volume = {volume};"));
    }

    fn set_looping(&mut self, looping: bool) {
        self.run(&format!("a.loop = {looping};"));
    }
}

/// Restart a one-shot cue from the top.
pub fn play_cue(sink: &mut SharedSink, cue: AudioCue) {
    sink.set_looping(cue.loops());
    sink.set_volume(cue.default_volume());
    sink.rewind();
    match sink.play() {
        Ok(()) => {}
        Err(AudioError::Blocked(reason)) => debug!(?cue, %reason, "cue blocked"),
        Err(err) => warn!(?cue, error = %err, "cue failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sense_core::audio::{AudioEvent, RecordingAudio};

    #[test]
    fn play_cue_rewinds_before_playing() {
        let audio = RecordingAudio::new();
        let mut sink: SharedSink = Box::new(audio.clone());
        play_cue(&mut sink, AudioCue::HoverClick);
        assert_eq!(
            audio.events(),
            vec![
                AudioEvent::Looping(false),
                AudioEvent::Volume(0.4),
                AudioEvent::Rewind,
                AudioEvent::Play,
            ]
        );
    }

    #[test]
    fn blocked_cue_is_absorbed() {
        let mut sink: SharedSink = Box::new(RecordingAudio::blocked());
        play_cue(&mut sink, AudioCue::AlertConfirm);
    }

    #[test]
    fn each_open_takes_a_new_handle() {
        let output = WebviewAudioOutput::new();
        assert_eq!(output.next_key(AudioCue::TypingLoop), "TypingLoop-0");
        assert_eq!(output.next_key(AudioCue::TypingLoop), "TypingLoop-1");
    }

    #[test]
    fn release_pauses_and_forgets_the_element() {
        let sink = std::mem::ManuallyDrop::new(WebviewAudio {
            handle: "BootLoop-3".into(),
            source: AudioCue::BootLoop.source(),
        });
        let release = sink.release_script();
        assert!(release.contains(r#"const a = reg["BootLoop-3"];"#));
        assert!(release.contains("a.pause();"));
        assert!(release.contains(r#"delete reg["BootLoop-3"];"#));
        assert!(!release.contains("new Audio"));

        let play = sink.script("a.play();");
        assert!(play.contains(r#"new Audio(""#));
        assert!(play.contains("a.play();"));
    }
}

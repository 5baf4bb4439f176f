use std::time::Duration;

use dioxus::prelude::*;
use sense_core::audio::AudioCue;
use sense_core::playback::{PlaybackStatus, StartOutcome};
use services::{RevealFrame, Typewriter};

use crate::audio::SharedSink;
use crate::context::AppContext;

/// Reveal whatever `text` currently holds, restarting on every change.
///
/// The engine is owned by the component: a new text cancels the running
/// cycle before the next one starts, and unmounting cancels it for good.
pub fn use_reveal(text: Memo<String>, speed: Duration) -> Signal<RevealFrame> {
    let ctx = use_context::<AppContext>();
    let typewriter: Typewriter<SharedSink> =
        use_hook(|| Typewriter::new(ctx.audio().open(AudioCue::TypingLoop)));
    let mut frame = use_signal(|| RevealFrame {
        text: String::new(),
        status: PlaybackStatus::Idle,
    });

    {
        let typewriter = typewriter.clone();
        use_effect(move || {
            let text = text();
            if let StartOutcome::Started(token) = typewriter.start(text) {
                frame.set(typewriter.snapshot());
                let typewriter = typewriter.clone();
                spawn(async move {
                    typewriter
                        .run(token, speed, move |next| frame.set(next.clone()))
                        .await;
                });
            }
        });
    }

    use_drop(move || typewriter.cancel());

    frame
}

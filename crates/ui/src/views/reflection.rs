use dioxus::prelude::*;
use dioxus_router::Link;
use sense_core::model::Scene;
use sense_core::playback::PlaybackStatus;
use sense_core::sequencer::{SceneSequencer, SequencerState};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::reveal::use_reveal;
use crate::vm::{scene_counter, scene_status};

#[component]
pub fn ReflectionView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut sequencer = {
        let catalog = ctx.catalog();
        use_signal(move || SceneSequencer::new(catalog.scenes().to_vec()))
    };

    let text = use_memo(move || {
        sequencer
            .read()
            .current_scene()
            .map(|scene| scene.text().to_owned())
            .unwrap_or_default()
    });
    let frame = use_reveal(text, ctx.config().scene_speed);

    let on_continue = use_callback(move |status: PlaybackStatus| {
        sequencer.write().advance(status);
    });

    let state = sequencer.read().state();
    let body = match state {
        SequencerState::Boot => rsx! {
            div { class: "reflection-boot",
                h1 { "REFLECTION" }
                p { "Everything you have read leads here." }
                button {
                    class: "reflection-start",
                    onclick: move |_| {
                        sequencer.write().start();
                    },
                    "BEGIN"
                }
            }
        },
        SequencerState::Playing(index) => {
            let seq = sequencer.read();
            match seq.current_scene().cloned() {
                Some(scene) => {
                    let status = scene_status(&frame.read(), scene.text());
                    rsx! {
                        SceneView {
                            scene,
                            counter: scene_counter(index, seq.len()),
                            revealed: frame.read().text.clone(),
                            status,
                            can_continue: seq.can_continue(status),
                            is_last: seq.is_last(),
                            on_continue,
                        }
                    }
                }
                None => rsx! {},
            }
        }
        SequencerState::Finished => rsx! {
            div { class: "reflection-end",
                h1 { "END OF REFLECTION" }
                p { "Thank you for exploring every self." }
                Link { to: Route::Hub {}, "Return to hub" }
            }
        },
    };

    rsx! {
        div { class: "page reflection", {body} }
    }
}

#[component]
fn SceneView(
    scene: Scene,
    counter: String,
    revealed: String,
    status: PlaybackStatus,
    can_continue: bool,
    is_last: bool,
    on_continue: Callback<PlaybackStatus>,
) -> Element {
    rsx! {
        div { class: "scene",
            img { class: "scene-media", src: "{scene.media().as_str()}" }
            div { class: "dialogue",
                div { class: "dialogue-head",
                    span { class: "speaker", "{scene.speaker()}" }
                    span { class: "scene-counter", "{counter}" }
                }
                p { class: "typewriter", "{revealed}" }
                if can_continue {
                    button {
                        class: "continue",
                        onclick: move |_| on_continue.call(status),
                        if is_last { "FINISH" } else { "CONTINUE ▸" }
                    }
                }
            }
        }
    }
}

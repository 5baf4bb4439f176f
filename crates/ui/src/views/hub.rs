use dioxus::prelude::*;
use dioxus_router::use_navigator;
use sense_core::audio::AudioCue;
use sense_core::boot::{BOOT_SEGMENTS, BootPhase, BootProgress};
use sense_core::highlight::Press;
use sense_core::model::{ProgressState, SegmentId};

use crate::audio::{SharedSink, play_cue};
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::highlight::use_active_segment;
use crate::vm::{HubTileVm, center_button, map_hub_panel, map_hub_tiles};

#[component]
pub fn HubView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let catalog = ctx.catalog();
    let highlight = ctx.highlight();
    let threshold = ctx.config().unlock_threshold;
    let active = use_active_segment();

    let mut boot = use_signal(BootProgress::new);
    let hover_cue = use_hover_cue(boot);

    {
        let boot_service = ctx.boot();
        use_hook(move || {
            spawn(async move {
                let initial = boot_service.initial().await;
                if boot.peek().phase() == BootPhase::AwaitingStart {
                    boot.set(initial);
                }
            });
        });
    }

    let progress_resource = {
        let store = ctx.progress();
        use_resource(move || {
            let store = store.clone();
            async move { store.current_state().await }
        })
    };
    let progress = progress_resource
        .value()
        .read()
        .as_ref()
        .cloned()
        .unwrap_or_else(ProgressState::default);

    let start_boot = {
        let boot_service = ctx.boot();
        let audio = ctx.audio();
        move |_: MouseEvent| {
            let boot_service = boot_service.clone();
            let audio = audio.clone();
            spawn(async move {
                let mut sink: SharedSink = audio.open(AudioCue::BootLoop);
                let mut rng = rand::rng();
                boot_service
                    .run(&mut sink, &mut rng, move |next| boot.set(next))
                    .await;
            });
        }
    };

    let on_hover = {
        let highlight = highlight.clone();
        use_callback(move |id: SegmentId| {
            hover_cue.call(());
            highlight.set_active(id);
        })
    };

    let on_leave = {
        let highlight = highlight.clone();
        use_callback(move |()| highlight.clear())
    };

    let on_press = {
        let highlight = highlight.clone();
        let catalog = catalog.clone();
        use_callback(move |id: SegmentId| {
            if highlight.press(id) != Press::Confirmed {
                return;
            }
            if let Some(section) = catalog.section(id) {
                let _ = navigator.push(Route::Section {
                    slug: section.path.slug().to_owned(),
                });
            }
        })
    };

    {
        let highlight = highlight.clone();
        use_drop(move || highlight.clear());
    }

    let active_now = active();
    let tiles = map_hub_tiles(&catalog, &progress, active_now);
    let panel = map_hub_panel(&catalog, active_now);
    let center = center_button(&progress, threshold);
    let boot_now = boot();
    let root_class = if active_now.is_some() {
        "hub focused"
    } else {
        "hub"
    };

    rsx! {
        div { class: root_class,
            if let Some(panel) = panel.clone() {
                div {
                    class: "hub-bg",
                    style: "background-image: url('{panel.background}')",
                }
            }

            div { class: "hub-grid",
                for tile in tiles {
                    HubTile {
                        key: "{tile.segment}",
                        tile: tile.clone(),
                        on_hover,
                        on_leave,
                        on_press,
                    }
                }

                if center.unlocked {
                    button {
                        class: "center-button unlocked",
                        onmouseenter: move |_| hover_cue.call(()),
                        onclick: move |_| {
                            let _ = navigator.push(Route::Reflection {});
                        },
                        "{center.label}"
                    }
                } else {
                    button {
                        class: "center-button locked",
                        disabled: true,
                        title: "Visit every self to unlock the reflection",
                        "{center.label}"
                    }
                }
            }

            if let Some(panel) = panel.clone() {
                aside { class: if panel.on_left { "flyout left" } else { "flyout right" },
                    h3 { "{panel.name}" }
                    p { class: "flyout-kanji", "{panel.kanji} · {panel.translation}" }
                    ul {
                        for meaning in panel.sub_meanings.iter() {
                            li { "{meaning}" }
                        }
                    }
                }
            }

            if let Some(panel) = panel {
                div { class: "mobile-overlay",
                    span { class: "mobile-kanji", "{panel.kanji}" }
                    span { "{panel.name}" }
                    span { class: "mobile-hint", "Tap again to enter" }
                }
            }

            if !boot_now.is_ready() {
                BootOverlay { progress: boot_now, on_start: start_boot }
            }
        }
    }
}

/// Click played when hovering hub targets. Silent until the boot sequence
/// has finished.
pub(crate) fn use_hover_cue(boot: Signal<BootProgress>) -> Callback<()> {
    let ctx = use_context::<AppContext>();
    let mut sink = use_signal(|| ctx.audio().open(AudioCue::HoverClick));
    use_callback(move |()| {
        if boot.peek().is_ready() {
            play_cue(&mut sink.write(), AudioCue::HoverClick);
        }
    })
}

#[component]
fn HubTile(
    tile: HubTileVm,
    on_hover: Callback<SegmentId>,
    on_leave: Callback<()>,
    on_press: Callback<SegmentId>,
) -> Element {
    let id = tile.segment;
    rsx! {
        div {
            class: "{tile.class}",
            style: "background-image: url('{tile.background}')",
            onmouseenter: move |_| on_hover.call(id),
            onmouseleave: move |_| on_leave.call(()),
            onclick: move |_| on_press.call(id),
            span { class: "tile-kanji", "{tile.kanji}" }
            span { class: "tile-translation", "{tile.translation}" }
            span { class: "tile-name", "{tile.name}" }
            if tile.visited {
                span { class: "tile-visited", "VISITED" }
            }
        }
    }
}

#[component]
fn BootOverlay(progress: BootProgress, on_start: EventHandler<MouseEvent>) -> Element {
    let lit = progress.lit_segments();
    let percent = progress.percent();
    rsx! {
        div { class: "boot-overlay",
            match progress.phase() {
                BootPhase::AwaitingStart => rsx! {
                    button { class: "boot-start", onclick: move |evt| on_start.call(evt), "START SYSTEM" }
                },
                BootPhase::Loading | BootPhase::Settling | BootPhase::Ready => rsx! {
                    div { class: "boot-bar",
                        for i in 0..BOOT_SEGMENTS {
                            span { class: if i < lit { "boot-cell lit" } else { "boot-cell" } }
                        }
                    }
                    p { class: "boot-percent", "LOADING {percent}%" }
                },
            }
        }
    }
}

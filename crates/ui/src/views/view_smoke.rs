use dioxus::prelude::ReadableExt;
use sense_core::audio::AudioEvent;
use sense_core::catalog::{PHILOSOPHICAL_PATH, PHYSICAL_PATH, PSYCHOLOGICAL_PATH, SEXUAL_PATH};
use sense_core::model::{SectionId, SegmentId, SelectedContent};

use super::test_harness::{ViewKind, setup_view_harness};

async fn visit(harness: &super::test_harness::ViewHarness, paths: &[&str]) {
    for path in paths {
        harness
            .services
            .progress()
            .record_visit(&SectionId::new(*path).unwrap())
            .await;
    }
}

#[tokio::test(flavor = "current_thread")]
async fn hub_view_smoke_renders_tiles_and_boot_overlay() {
    let mut harness = setup_view_harness(ViewKind::Hub);
    harness.rebuild();
    let html = harness.render();

    for kanji in ["哲学", "心理", "身体", "性愛"] {
        assert!(html.contains(kanji), "missing {kanji} in {html}");
    }
    assert!(html.contains("0/4"), "missing counter in {html}");
    assert!(html.contains("START SYSTEM"), "missing boot overlay in {html}");
    assert!(!html.contains("REFLECT<"), "reflection should be locked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn hub_view_smoke_unlocks_center_button() {
    let mut harness = setup_view_harness(ViewKind::Hub);
    visit(
        &harness,
        &[PHILOSOPHICAL_PATH, PSYCHOLOGICAL_PATH, PHYSICAL_PATH, SEXUAL_PATH],
    )
    .await;

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("center-button unlocked"), "missing unlock in {html}");
    assert!(html.contains("VISITED"), "missing visited marks in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn section_view_smoke_records_visit() {
    let mut harness = setup_view_harness(ViewKind::Section("psychological_self".into()));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("The Psychological Self"), "missing title in {html}");
    assert!(html.contains("Material Self"), "missing facet in {html}");
    assert!(html.contains("Select a card"), "missing hint in {html}");

    let state = harness.services.progress().current_state().await;
    assert_eq!(state.visit_count(), 1);
    assert!(harness.audio.count(AudioEvent::Play) >= 1);
}

#[tokio::test(flavor = "current_thread")]
async fn section_view_smoke_announces_unlock() {
    let mut harness = setup_view_harness(ViewKind::Section("sexual_self".into()));
    visit(&harness, &[PHILOSOPHICAL_PATH, PSYCHOLOGICAL_PATH, PHYSICAL_PATH]).await;

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("My Sexual Self"), "missing title in {html}");
    assert!(html.contains("Reflection unlocked"), "missing toast in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn section_view_smoke_unknown_slug() {
    let mut harness = setup_view_harness(ViewKind::Section("astral_self".into()));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Nothing here"), "missing not-found in {html}");
    assert_eq!(harness.services.progress().current_state().await.visit_count(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn reflection_view_smoke_waits_for_begin() {
    let mut harness = setup_view_harness(ViewKind::Reflection);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("BEGIN"), "missing start action in {html}");
    assert!(!html.contains("CONTINUE"), "continue shown before start in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn hover_cue_is_silent_until_boot_finishes() {
    let mut cold = setup_view_harness(ViewKind::HoverCue { booted: false });
    cold.rebuild();
    cold.act(|handles| handles.hover().call(()));
    assert_eq!(cold.audio.count(AudioEvent::Play), 0);

    let mut booted = setup_view_harness(ViewKind::HoverCue { booted: true });
    booted.rebuild();
    booted.act(|handles| handles.hover().call(()));
    booted.act(|handles| handles.hover().call(()));
    assert_eq!(booted.audio.count(AudioEvent::Play), 2);
    assert_eq!(booted.audio.count(AudioEvent::Volume(0.4)), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn detail_hover_clicks_only_for_the_open_facet() {
    let material = SegmentId::new(21);
    let social = SegmentId::new(22);
    let mut harness = setup_view_harness(ViewKind::SectionState("psychological_self".into()));
    harness.rebuild();
    let click = AudioEvent::Volume(0.8);

    harness.act(|handles| handles.section().on_detail_enter.call((material, 0)));
    assert_eq!(harness.audio.count(click), 0);

    harness.act(|handles| handles.section().on_toggle.call(material));
    harness.act(|handles| handles.section().on_detail_enter.call((social, 0)));
    assert_eq!(harness.audio.count(click), 0);

    harness.act(|handles| handles.section().on_detail_enter.call((material, 1)));
    assert_eq!(harness.audio.count(click), 1);
    let selected = harness
        .dom
        .in_runtime(|| *harness.handles.section().selected.peek());
    assert_eq!(
        selected,
        SelectedContent::SectionDetail {
            facet: material,
            detail: 1
        }
    );
}

#[tokio::test(flavor = "current_thread")]
async fn leaving_a_section_mid_reveal_releases_the_typing_loop() {
    let mut harness = setup_view_harness(ViewKind::SectionState("psychological_self".into()));
    harness.rebuild();
    harness.act(|handles| handles.section().on_toggle.call(SegmentId::new(21)));
    harness.drive_async().await;
    assert!(harness.audio.is_playing(), "typing loop should be running");

    let audio = harness.audio.clone();
    drop(harness);

    assert!(!audio.is_playing());
    let events = audio.events();
    let last_play = events
        .iter()
        .rposition(|e| *e == AudioEvent::Play)
        .expect("typing loop played");
    let pauses = events[last_play..]
        .iter()
        .filter(|e| **e == AudioEvent::Pause)
        .count();
    assert_eq!(pauses, 1);
}

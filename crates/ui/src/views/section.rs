use dioxus::prelude::*;
use dioxus_router::Link;
use sense_core::audio::AudioCue;
use sense_core::model::{ResolvedContent, SectionPage, SegmentId, SelectedContent, VisitOutcome};
use services::RevealFrame;

use crate::audio::play_cue;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::NotFoundView;
use crate::views::reveal::use_reveal;
use crate::vm::{
    DetailItemVm, FacetCardVm, UnlockBanner, map_detail_items, map_facet_cards, unlock_banner,
};

#[component]
pub fn SectionView(slug: String) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    match catalog.page_by_slug(&slug).cloned() {
        Some(page) => rsx! {
            SectionPageView { key: "{slug}", page }
        },
        None => rsx! {
            NotFoundView { segments: vec![slug.clone()] }
        },
    }
}

/// Selection, visit and reveal state behind one section page.
#[derive(Clone, Copy)]
pub(crate) struct SectionPageState {
    pub selected: Signal<SelectedContent>,
    pub visit: Resource<VisitOutcome>,
    pub frame: Signal<RevealFrame>,
    pub on_toggle: Callback<SegmentId>,
    pub on_detail_enter: Callback<(SegmentId, usize)>,
    pub on_detail_leave: Callback<()>,
}

/// Records the visit, feeds the selected text to the typewriter and clicks
/// when a detail of the open facet is hovered.
pub(crate) fn use_section_page(page: &SectionPage) -> SectionPageState {
    let ctx = use_context::<AppContext>();
    let mut selected = use_signal(SelectedContent::default);
    let mut click_sink = use_signal(|| ctx.audio().open(AudioCue::DetailClick));

    let visit = {
        let store = ctx.progress();
        let path = page.path.clone();
        use_resource(move || {
            let store = store.clone();
            let path = path.clone();
            async move { store.record_visit(&path).await }
        })
    };

    let text = {
        let page = page.clone();
        use_memo(move || {
            selected()
                .resolve(&page)
                .map(ResolvedContent::body)
                .unwrap_or_default()
                .to_owned()
        })
    };
    let frame = use_reveal(text, ctx.config().reveal_speed);

    let on_toggle = use_callback(move |id: SegmentId| {
        let next = selected.peek().toggle(id);
        selected.set(next);
    });
    let on_detail_enter = use_callback(move |(facet, detail): (SegmentId, usize)| {
        let current = *selected.peek();
        if current.facet() != Some(facet) {
            return;
        }
        play_cue(&mut click_sink.write(), AudioCue::DetailClick);
        selected.set(current.hover_detail(facet, detail));
    });
    let on_detail_leave = use_callback(move |()| {
        let next = selected.peek().leave_detail();
        selected.set(next);
    });

    SectionPageState {
        selected,
        visit,
        frame,
        on_toggle,
        on_detail_enter,
        on_detail_leave,
    }
}

#[component]
fn SectionPageView(page: SectionPage) -> Element {
    let ctx = use_context::<AppContext>();
    let mut toast_dismissed = use_signal(|| false);
    let SectionPageState {
        selected,
        visit,
        frame,
        on_toggle,
        on_detail_enter,
        on_detail_leave,
    } = use_section_page(&page);

    // Held for the page's lifetime; dropping a sink releases its element.
    let _alert = use_signal(|| {
        let mut sink = ctx.audio().open(AudioCue::AlertConfirm);
        play_cue(&mut sink, AudioCue::AlertConfirm);
        sink
    });

    let banner = unlock_banner(visit.value().read().as_ref());
    let current = selected();
    let cards = map_facet_cards(&page, current);
    let details = map_detail_items(&page, current);
    let resolved = current.resolve(&page);
    let heading = resolved.map(ResolvedContent::heading);
    let tone_class = resolved.map_or("tone-none", |r| r.tone().css_class());
    let open_facet = current.facet();
    let revealed = frame.read().text.clone();

    rsx! {
        div { class: "page section-page",
            header { class: "section-header",
                Link { class: "back-link", to: Route::Hub {}, "← HUB" }
                h1 { "{page.title}" }
                if let Some(epigraph) = page.epigraph.as_ref() {
                    blockquote { class: "epigraph", "“{epigraph}”" }
                }
            }

            if banner == UnlockBanner::Celebrate && !toast_dismissed() {
                div { class: "toast unlocked",
                    p { "Reflection unlocked." }
                    Link { to: Route::Reflection {}, "Open the reflection" }
                    button { onclick: move |_| toast_dismissed.set(true), "Dismiss" }
                }
            } else if banner != UnlockBanner::Hidden {
                div { class: "unlock-hint",
                    Link { to: Route::Reflection {}, "Reflection available" }
                }
            }

            div { class: "facets",
                for card in cards {
                    FacetCard { key: "{card.segment}", card: card.clone(), on_toggle }
                }
            }

            if let Some(facet) = open_facet {
                ul { class: "details",
                    for item in details {
                        DetailItem {
                            key: "{item.index}",
                            facet,
                            item: item.clone(),
                            on_enter: on_detail_enter,
                            on_leave: on_detail_leave,
                        }
                    }
                }
            }

            div { class: "reveal {tone_class}",
                if let Some(heading) = heading {
                    h2 { "{heading}" }
                    p { class: "typewriter", "{revealed}" }
                } else {
                    p { class: "reveal-hint", "Select a card to read more." }
                }
            }
        }
    }
}

#[component]
fn FacetCard(card: FacetCardVm, on_toggle: Callback<SegmentId>) -> Element {
    let id = card.segment;
    rsx! {
        button { class: "{card.class}", onclick: move |_| on_toggle.call(id),
            h3 { "{card.title}" }
            if let Some(subtitle) = card.subtitle.as_ref() {
                p { class: "facet-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
fn DetailItem(
    facet: SegmentId,
    item: DetailItemVm,
    on_enter: Callback<(SegmentId, usize)>,
    on_leave: Callback<()>,
) -> Element {
    let index = item.index;
    rsx! {
        li {
            class: if item.hovered { "detail hovered" } else { "detail" },
            onmouseenter: move |_| on_enter.call((facet, index)),
            onmouseleave: move |_| on_leave.call(()),
            if let Some(image) = item.image.as_ref() {
                img { src: "{image}", alt: "{item.title}" }
            }
            span { "{item.title}" }
        }
    }
}

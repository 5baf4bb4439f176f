use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use sense_core::Catalog;
use sense_core::audio::{AudioCue, RecordingAudio};
use sense_core::boot::BootProgress;
use services::{AppServices, BootService, ProgressStore, ServicesConfig};

use crate::audio::{AudioOutput, SharedSink};
use crate::context::{UiApp, build_app_context};
use crate::views::hub::use_hover_cue;
use crate::views::section::{SectionPageState, use_section_page};
use crate::views::{HubView, ReflectionView, SectionView};

/// Hands out sinks that all record into one shared log.
struct RecordingOutput {
    audio: RecordingAudio,
}

impl AudioOutput for RecordingOutput {
    fn open(&self, _cue: AudioCue) -> SharedSink {
        Box::new(self.audio.clone())
    }
}

#[derive(Clone)]
struct TestApp {
    services: AppServices,
    audio: RecordingAudio,
}

impl UiApp for TestApp {
    fn config(&self) -> ServicesConfig {
        self.services.config()
    }

    fn catalog(&self) -> Arc<Catalog> {
        self.services.catalog()
    }

    fn progress(&self) -> Arc<ProgressStore> {
        self.services.progress()
    }

    fn boot(&self) -> BootService {
        self.services.boot()
    }

    fn audio_output(&self) -> Arc<dyn AudioOutput> {
        Arc::new(RecordingOutput {
            audio: self.audio.clone(),
        })
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Hub,
    Section(String),
    Reflection,
    /// Mounts the hub hover cue alone, before or after boot.
    HoverCue { booted: bool },
    /// Mounts the state behind a section page without its markup.
    SectionState(String),
}

/// Hook outputs captured by the hook-only harness views.
#[derive(Clone, Default)]
pub struct HookHandles {
    hover: Rc<RefCell<Option<Callback<()>>>>,
    section: Rc<RefCell<Option<SectionPageState>>>,
}

impl HookHandles {
    pub fn hover(&self) -> Callback<()> {
        self.hover.borrow().expect("hover cue registered")
    }

    pub fn section(&self) -> SectionPageState {
        self.section.borrow().expect("section state registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: HookHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Hub => rsx! { HubView {} },
        ViewKind::Section(slug) => rsx! { SectionView { slug } },
        ViewKind::Reflection => rsx! { ReflectionView {} },
        ViewKind::HoverCue { booted } => rsx! { HoverCueHooks { booted } },
        ViewKind::SectionState(slug) => rsx! { SectionStateHooks { slug } },
    }
}

#[component]
fn HoverCueHooks(booted: bool) -> Element {
    let handles = use_context::<HookHandles>();
    let boot = use_signal(|| {
        if booted {
            BootProgress::resumed()
        } else {
            BootProgress::new()
        }
    });
    let hover = use_hover_cue(boot);
    *handles.hover.borrow_mut() = Some(hover);
    rsx! { div {} }
}

#[component]
fn SectionStateHooks(slug: String) -> Element {
    let handles = use_context::<HookHandles>();
    let ctx = use_context::<crate::context::AppContext>();
    let page = use_hook(|| {
        ctx.catalog()
            .page_by_slug(&slug)
            .cloned()
            .expect("known section slug")
    });
    let state = use_section_page(&page);
    *handles.section.borrow_mut() = Some(state);
    rsx! { div {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
    pub audio: RecordingAudio,
    pub handles: HookHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    /// Run `f` inside the dom's runtime, then settle the resulting updates.
    pub fn act(&mut self, f: impl FnOnce(&HookHandles)) {
        let handles = self.handles.clone();
        self.dom.in_runtime(|| f(&handles));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_services(
        view,
        AppServices::in_memory(ServicesConfig::default()).expect("services"),
    )
}

pub fn setup_view_harness_with_services(view: ViewKind, services: AppServices) -> ViewHarness {
    let audio = RecordingAudio::new();
    let app = Arc::new(TestApp {
        services: services.clone(),
        audio: audio.clone(),
    });
    let handles = HookHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );
    ViewHarness {
        dom,
        services,
        audio,
        handles,
    }
}

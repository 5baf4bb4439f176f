use dioxus::prelude::*;
use sense_core::model::SegmentId;

use crate::context::AppContext;

/// Mirror the shared highlight into a signal so the component re-renders
/// whenever any region changes it.
pub fn use_active_segment() -> Signal<Option<SegmentId>> {
    let ctx = use_context::<AppContext>();
    let highlight = ctx.highlight();
    let mut active = use_signal(|| highlight.current());

    use_hook(move || {
        let mut subscriber = highlight.subscribe();
        spawn(async move {
            while let Some(next) = subscriber.changed().await {
                active.set(next);
            }
        });
    });

    active
}

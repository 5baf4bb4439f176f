use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "page not-found",
            h2 { "Nothing here" }
            p { "/{path} is not part of this system." }
            Link { to: Route::Hub {}, "Return to hub" }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{HubView, NotFoundView, ReflectionView, SectionView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HubView)] Hub {},
        #[route("/reflection", ReflectionView)] Reflection {},
        #[route("/:slug", SectionView)] Section { slug: String },
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

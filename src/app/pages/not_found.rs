use dioxus::prelude::*;

use crate::app::pages::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "c-not-found",
            h2 { class: "c-not-found__title", "Page not found" }
            p { class: "c-not-found__text", "Nothing lives at {path}." }
            Link { to: Route::OrderList {}, "Go to orders" }
        }
    }
}

use dioxus::prelude::*;

use crate::app::pages::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "c-navbar",
            div { class: "c-navbar__title", "📦 Cargo Orders" }
            Link { class: "c-navbar__link", to: Route::OrderList {}, "All orders" }
        }
    }
}

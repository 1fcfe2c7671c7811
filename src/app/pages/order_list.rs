use dioxus::prelude::*;

use crate::app::components::{EmptyState, ErrorMessage, LoadingText, OrderCard};
use crate::domain::models::{order_items, OrderCollection};
use crate::shared::hooks::use_orders_api;

#[component]
pub fn OrderList() -> Element {
    let api = use_orders_api();

    let upcoming_api = api.clone();
    let upcoming_resource = use_resource(move || {
        let api = upcoming_api.clone();
        async move { api.get_upcoming_orders().await }
    });

    // No value here means the request failed or returned nothing
    let all_resource = use_resource(move || {
        let api = api.clone();
        async move { api.get_all_orders().await }
    });

    rsx! {
        div { class: "c-orders",
            section { class: "c-orders__section",
                h2 { class: "c-orders__title", "Upcoming orders" }
                match &*upcoming_resource.read() {
                    Some(Ok(orders)) => rsx! { OrderCards { collection: orders.clone() } },
                    Some(Err(e)) => rsx! {
                        ErrorMessage { message: format!("Failed to load upcoming orders: {e}") }
                    },
                    None => rsx! { LoadingText { message: "Loading upcoming orders...".to_string() } },
                }
            }
            section { class: "c-orders__section",
                h2 { class: "c-orders__title", "All orders" }
                match &*all_resource.read() {
                    Some(Some(orders)) => rsx! { OrderCards { collection: orders.clone() } },
                    Some(None) => rsx! { EmptyState { message: "No orders available.".to_string() } },
                    None => rsx! { LoadingText { message: "Loading orders...".to_string() } },
                }
            }
        }
    }
}

#[component]
fn OrderCards(collection: OrderCollection) -> Element {
    let records = order_items(&collection).to_vec();

    if records.is_empty() {
        return rsx! { EmptyState { message: "No orders.".to_string() } };
    }

    rsx! {
        div { class: "c-orders__list",
            for record in records {
                OrderCard { record }
            }
        }
    }
}

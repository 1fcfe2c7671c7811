use dioxus::prelude::*;

use crate::app::components::{format_record, ErrorMessage, LoadingText};
use crate::app::pages::Route;
use crate::domain::models::{order_id_of, order_items, OrderCollection, OrderId, OrderRecord};
use crate::shared::hooks::use_orders_api;

/// Record in `collection` whose `id` matches `order_id`
pub fn find_order(collection: &OrderCollection, order_id: &OrderId) -> Option<OrderRecord> {
    order_items(collection)
        .iter()
        .find(|record| order_id_of(record).as_ref() == Some(order_id))
        .cloned()
}

#[component]
pub fn OrderDetail(order_id: OrderId) -> Element {
    let api = use_orders_api();

    // Re-runs when the router hands this page a different id
    let id = order_id.clone();
    let order_resource = use_resource(use_reactive!(|(id,)| {
        let api = api.clone();
        async move {
            api.try_get_all_orders()
                .await
                .map(|orders| find_order(&orders, &id))
        }
    }));

    rsx! {
        div { class: "c-order-detail",
            Link { class: "c-order-detail__back", to: Route::OrderList {}, "← Back to orders" }
            h2 { class: "c-order-detail__title", "Order {order_id}" }
            match &*order_resource.read() {
                Some(Ok(Some(record))) => {
                    let body = format_record(record);
                    rsx! { pre { class: "c-order-detail__body", "{body}" } }
                }
                Some(Ok(None)) => rsx! {
                    ErrorMessage { message: format!("Order {order_id} not found.") }
                },
                Some(Err(e)) => rsx! {
                    ErrorMessage { message: format!("Failed to load order: {e}") }
                },
                None => rsx! { LoadingText { message: "Loading order...".to_string() } },
            }
        }
    }
}

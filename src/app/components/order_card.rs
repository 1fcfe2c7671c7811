use dioxus::prelude::*;

use crate::app::pages::Route;
use crate::domain::models::{order_id_of, OrderRecord};

/// Pretty-printed JSON for records whose shape is not interpreted
pub fn format_record(record: &OrderRecord) -> String {
    serde_json::to_string_pretty(record).unwrap_or_else(|_| record.to_string())
}

// One order; links to the detail page when the record carries an `id`
#[component]
pub fn OrderCard(record: OrderRecord) -> Element {
    let body = format_record(&record);

    rsx! {
        div { class: "c-order-card",
            if let Some(order_id) = order_id_of(&record) {
                Link {
                    class: "c-order-card__link",
                    to: Route::OrderDetail { order_id: order_id.clone() },
                    "Order {order_id}"
                }
            }
            pre { class: "c-order-card__body", "{body}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_record_is_pretty() {
        let formatted = format_record(&json!({ "id": 1 }));
        assert_eq!(formatted, "{\n  \"id\": 1\n}");
    }
}

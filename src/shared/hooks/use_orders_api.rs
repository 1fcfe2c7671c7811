use dioxus::prelude::*;

use crate::config::ApiConfig;
use crate::shared::services::OrdersApi;

/// Orders client built from the `ApiConfig` in context, or the default config
/// when the launcher did not provide one.
pub fn use_orders_api() -> OrdersApi {
    let config = try_use_context::<ApiConfig>().unwrap_or_default();
    use_hook(move || OrdersApi::new(config))
}

// Custom Dioxus hooks
pub mod use_orders_api;

pub use use_orders_api::use_orders_api;

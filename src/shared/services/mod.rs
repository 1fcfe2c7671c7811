// Shared services
pub mod api_service;

pub use api_service::{get_all_orders, get_upcoming_orders, OrdersApi};

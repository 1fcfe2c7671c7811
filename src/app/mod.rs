pub mod components;
pub mod layouts;
pub mod pages;

pub use pages::order_routes::App;

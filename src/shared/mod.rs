pub mod errors;
pub mod logging;
pub mod services;

// Dioxus hooks (client side)
pub mod hooks;

// Domain models
// Pure Rust, no framework dependencies

pub mod order;

pub use order::{order_id_of, order_items, OrderCollection, OrderId, OrderRecord};

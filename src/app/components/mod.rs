pub mod common;
pub mod order_card;

pub use common::{EmptyState, ErrorMessage, LoadingText};
pub use order_card::{format_record, OrderCard};

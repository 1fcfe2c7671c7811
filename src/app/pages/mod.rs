pub mod order_routes;
pub mod order_list;
pub mod order_detail;
pub mod not_found;

pub use order_routes::{App, Route, RouteEntry, ROUTE_TABLE};
pub use order_list::OrderList;
pub use order_detail::OrderDetail;
pub use not_found::PageNotFound;

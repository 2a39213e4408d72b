mod group;
mod order;
mod order_export;

pub use group::{group_orders, GroupedOrder};
pub use order::{OrderId, OrderLineItem};
pub use order_export::{load, load_file, EXPECTED_HEADERS};

pub mod use_orders;

pub use use_orders::{use_orders, OrdersState, UseOrdersHandle};

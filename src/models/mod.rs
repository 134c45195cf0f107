pub mod order;

pub use order::{CartItem, Order, OrderStatus, StatusFilter};

pub mod order_type;

pub use order_type::OrderType;

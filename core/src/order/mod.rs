// comanda/src/order/mod.rs

//! The order side of the core: the immutable [`Order`] snapshot model
//! and the [`OrderLifecycle`] that creates and advances it.

pub mod lifecycle;
pub mod model;

pub use lifecycle::OrderLifecycle;
pub use model::{Order, OrderLine, OrderStatus};

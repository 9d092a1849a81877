//! Order entity.

pub mod model;

pub use model::{Order, OrderWithCustomer};

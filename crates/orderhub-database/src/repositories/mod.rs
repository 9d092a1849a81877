//! Repository implementations for the OrderHub entities.

pub mod order;
pub mod user;

pub use order::OrderRepository;
pub use user::UserRepository;

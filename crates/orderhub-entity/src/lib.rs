//! # orderhub-entity
//!
//! Domain entity models for OrderHub: directory users and orders.

pub mod order;
pub mod user;

pub use order::Order;
pub use user::{User, UserRole};

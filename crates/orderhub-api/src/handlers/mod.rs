//! HTTP handlers, grouped per domain.

pub mod auth;
pub mod health;
pub mod order;
pub mod user;

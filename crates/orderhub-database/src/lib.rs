//! # orderhub-database
//!
//! PostgreSQL connection management and concrete repository implementations
//! for the OrderHub user directory and orders.

pub mod connection;
pub mod migration;
pub mod repositories;

//! # orderhub-api
//!
//! HTTP API layer for OrderHub built on Axum.
//!
//! Provides the OAuth login endpoints, the cookie-based authentication
//! gate, the admin authorization gate, CORS and request logging, DTOs,
//! and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use error::ApiError;
pub use state::AppState;

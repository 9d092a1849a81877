//! Route definitions for the OrderHub HTTP API.
//!
//! The OAuth entry points live at the root (`/auth/google/*`) because the
//! provider redirect URI points there; everything else is mounted under
//! `/api`. `/protected/me` is the legacy alias of `/api/auth/me` that the
//! browser client still calls.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(order_routes())
        .merge(user_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(oauth_routes())
        .nest("/api", api_routes)
        .route("/protected/me", get(handlers::auth::me))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// OAuth entry points, mounted at the root (no auth required).
fn oauth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/google/url", get(handlers::auth::google_auth_url))
        .route(
            "/auth/google/callback",
            get(handlers::auth::google_callback),
        )
}

/// Session endpoints: me, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(handlers::auth::me))
        .route("/auth/logout", post(handlers::auth::logout))
}

/// Order listing for the authenticated user
fn order_routes() -> Router<AppState> {
    Router::new().route("/ordenes", get(handlers::order::list_orders))
}

/// Directory listing, admin only
fn user_routes() -> Router<AppState> {
    Router::new().route("/usuarios", get(handlers::user::list_users))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

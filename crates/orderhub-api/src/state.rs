//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use orderhub_auth::jwt::TokenCodec;
use orderhub_auth::oauth::{GoogleOAuthClient, IdTokenVerifier};
use orderhub_core::config::AppConfig;
use orderhub_database::repositories::{OrderRepository, UserRepository};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Session credential codec.
    pub token_codec: Arc<TokenCodec>,
    /// Google authorization-code exchange client.
    pub oauth_client: Arc<GoogleOAuthClient>,
    /// Google ID-token verifier.
    pub id_token_verifier: Arc<IdTokenVerifier>,
    /// User directory repository.
    pub user_repo: Arc<UserRepository>,
    /// Order repository.
    pub order_repo: Arc<OrderRepository>,
}

impl AppState {
    /// Builds the state graph from configuration and a database pool.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let token_codec = Arc::new(TokenCodec::new(&config.auth));
        let oauth_client = Arc::new(GoogleOAuthClient::new(config.google.clone()));
        let id_token_verifier = Arc::new(IdTokenVerifier::new(config.google.clone()));
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let order_repo = Arc::new(OrderRepository::new(db_pool.clone()));

        Self {
            config: Arc::new(config),
            db_pool,
            token_codec,
            oauth_client,
            id_token_verifier,
            user_repo,
            order_repo,
        }
    }
}

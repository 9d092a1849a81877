//! Google OAuth provider configuration.

use serde::{Deserialize, Serialize};

/// Google OAuth 2.0 / OpenID Connect settings.
///
/// The endpoint URLs are configurable so tests can point the exchange
/// client at a local stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleConfig {
    /// OAuth client id (also the expected `aud` of Google ID tokens).
    pub client_id: String,
    /// OAuth client secret.
    #[serde(default)]
    pub client_secret: String,
    /// Redirect URI registered with Google; the callback endpoint.
    pub redirect_uri: String,
    /// Authorization (consent screen) endpoint.
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    /// Token exchange endpoint.
    #[serde(default = "default_token_url")]
    pub token_url: String,
    /// JWKS endpoint for ID-token signature verification.
    #[serde(default = "default_jwks_url")]
    pub jwks_url: String,
    /// Requested OAuth scopes.
    #[serde(default = "default_scopes")]
    pub scopes: Vec<String>,
}

fn default_auth_url() -> String {
    "https://accounts.google.com/o/oauth2/v2/auth".to_string()
}

fn default_token_url() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

fn default_jwks_url() -> String {
    "https://www.googleapis.com/oauth2/v3/certs".to_string()
}

fn default_scopes() -> Vec<String> {
    vec![
        "openid".to_string(),
        "email".to_string(),
        "profile".to_string(),
    ]
}

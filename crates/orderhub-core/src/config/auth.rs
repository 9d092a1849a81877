//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Credential issuance and session-cookie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Credential TTL in minutes. There is no refresh mechanism; a new
    /// credential is only issued at login.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Name of the session cookie holding the credential.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Emails granted the admin role at login time. Evaluated on every
    /// login, so removing an entry takes effect at the user's next login.
    #[serde(default)]
    pub admin_emails: Vec<String>,
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    60
}

fn default_cookie_name() -> String {
    "auth_token".to_string()
}

//! Claims embedded in the session credential.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orderhub_entity::user::UserRole;

/// Identity claims carried by the session credential.
///
/// Authoritative for the credential's lifetime; the backend does not
/// re-validate them against the directory on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the directory-assigned user ID.
    pub sub: Uuid,
    /// Email address at issuance.
    pub email: String,
    /// Display name at issuance.
    pub name: String,
    /// Role at issuance. Missing role in an otherwise valid credential
    /// falls back to the regular user role.
    #[serde(default)]
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this credential has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

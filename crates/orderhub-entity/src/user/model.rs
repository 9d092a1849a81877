//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A directory record for a user who has logged in at least once.
///
/// The id is directory-assigned and immutable; the email is the unique
/// upsert key. Everything else is refreshed from the provider profile on
/// every login.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email address (unique key).
    pub email: String,
    /// Display name from the provider profile.
    pub name: String,
    /// Avatar URL from the provider profile.
    pub picture: Option<String>,
    /// Identity provider name (currently always `"google"`).
    pub provider: String,
    /// The provider's stable subject identifier.
    pub provider_id: Option<String>,
    /// Role computed from the admin allow-list at last login.
    pub role: UserRole,
    /// When the user first logged in.
    pub created_at: DateTime<Utc>,
    /// When the record was last refreshed.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data written by the login upsert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertUser {
    /// Email address (unique key).
    pub email: String,
    /// Display name.
    pub name: String,
    /// Avatar URL.
    pub picture: Option<String>,
    /// Provider subject identifier.
    pub provider_id: Option<String>,
    /// Identity provider name.
    pub provider: String,
    /// Role from the latest allow-list evaluation.
    pub role: UserRole,
}

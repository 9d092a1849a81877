//! User directory repository.

use sqlx::PgPool;

use orderhub_core::error::{AppError, ErrorKind};
use orderhub_core::result::AppResult;
use orderhub_entity::user::{UpsertUser, User};

/// Repository for the email-keyed user directory.
///
/// The directory performs no role logic; the role written here is whatever
/// the login flow computed from the admin allow-list.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert-or-update a directory record keyed by email.
    ///
    /// On conflict, name/picture/provider/provider_id/role are refreshed;
    /// the directory-assigned id and the email never change. Returns the
    /// stored row so the caller sees the stable id and persisted role.
    pub async fn upsert(&self, data: &UpsertUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, name, picture, provider, provider_id, role) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (email) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 picture = EXCLUDED.picture, \
                 provider = EXCLUDED.provider, \
                 provider_id = EXCLUDED.provider_id, \
                 role = EXCLUDED.role, \
                 updated_at = NOW() \
             RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.name)
        .bind(&data.picture)
        .bind(&data.provider)
        .bind(&data.provider_id)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert user", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// List all directory records, most recent first.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }
}

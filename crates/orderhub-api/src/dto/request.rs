//! Request DTOs.

use serde::Deserialize;

/// Query string of the provider redirect back to `GET /auth/google/callback`.
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    /// One-time authorization code. Absent when the user denied consent.
    pub code: Option<String>,
    /// Error code set by the provider on denial.
    pub error: Option<String>,
}

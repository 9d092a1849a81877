//! User directory handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, DirectoryUserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/usuarios — admin only.
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<DirectoryUserResponse>>>, ApiError> {
    require_admin(&auth)?;

    let users = state.user_repo.find_all().await?;

    Ok(Json(ApiResponse::ok(
        users.into_iter().map(DirectoryUserResponse::from).collect(),
    )))
}

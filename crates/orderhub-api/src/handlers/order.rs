//! Order handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, OrderResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/ordenes
///
/// Lists the authenticated user's own orders, newest first.
pub async fn list_orders(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<OrderResponse>>>, ApiError> {
    let orders = state.order_repo.find_by_user(auth.user_id()).await?;

    Ok(Json(ApiResponse::ok(
        orders.into_iter().map(OrderResponse::from).collect(),
    )))
}

//! Order repository.

use sqlx::PgPool;
use uuid::Uuid;

use orderhub_core::error::{AppError, ErrorKind};
use orderhub_core::result::AppResult;
use orderhub_entity::order::OrderWithCustomer;

/// Repository for order queries.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    /// Create a new order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a user's orders with the owning user's display name, newest
    /// first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<OrderWithCustomer>> {
        sqlx::query_as::<_, OrderWithCustomer>(
            "SELECT o.id, o.order_date, o.total, u.name AS customer_name \
             FROM orders o \
             INNER JOIN users u ON u.id = o.user_id \
             WHERE o.user_id = $1 \
             ORDER BY o.order_date DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list orders", e))
    }
}

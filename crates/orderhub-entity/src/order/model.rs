//! Order entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A purchase order belonging to a directory user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    /// Unique order identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// When the order was placed.
    pub order_date: DateTime<Utc>,
    /// Order total.
    pub total: f64,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

/// An order joined with the owning user's display name, as returned by the
/// order listing query.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderWithCustomer {
    /// Unique order identifier.
    pub id: Uuid,
    /// When the order was placed.
    pub order_date: DateTime<Utc>,
    /// Order total.
    pub total: f64,
    /// Display name of the owning user.
    pub customer_name: String,
}

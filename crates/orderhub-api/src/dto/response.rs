//! Response DTOs.
//!
//! Field names on the order DTOs keep the Spanish wire format the browser
//! client already consumes (`id_orden`, `fecha_orden`, `Usuario`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orderhub_auth::jwt::Claims;
use orderhub_entity::order::OrderWithCustomer;
use orderhub_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Consent URL response for `GET /auth/google/url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsentUrlResponse {
    /// The provider consent-screen URL.
    pub url: String,
}

/// The caller's identity as asserted by their credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    /// Directory-assigned user id.
    pub id: Uuid,
    /// Email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Role.
    pub role: String,
}

impl From<&Claims> for MeResponse {
    fn from(claims: &Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email.clone(),
            name: claims.name.clone(),
            role: claims.role.to_string(),
        }
    }
}

/// A full directory record for the admin user listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryUserResponse {
    /// Directory-assigned user id.
    pub id: Uuid,
    /// Email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Avatar URL.
    pub picture: Option<String>,
    /// Identity provider.
    pub provider: String,
    /// Role.
    pub role: String,
    /// First login time.
    pub created_at: DateTime<Utc>,
}

impl From<User> for DirectoryUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            picture: user.picture,
            provider: user.provider,
            role: user.role.to_string(),
            created_at: user.created_at,
        }
    }
}

/// One order row for the order listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    /// Order id.
    pub id_orden: Uuid,
    /// Order date.
    pub fecha_orden: DateTime<Utc>,
    /// Order total.
    pub total: f64,
    /// Owning user, nested the way the client expects.
    #[serde(rename = "Usuario")]
    pub usuario: OrderCustomer,
}

/// Nested customer name on an order row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCustomer {
    /// Display name of the owning user.
    pub nombre_completo: String,
}

impl From<OrderWithCustomer> for OrderResponse {
    fn from(order: OrderWithCustomer) -> Self {
        Self {
            id_orden: order.id,
            fecha_orden: order.order_date,
            total: order.total,
            usuario: OrderCustomer {
                nombre_completo: order.customer_name,
            },
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Directory connectivity: `"connected"` or `"unavailable"`.
    pub database: String,
}

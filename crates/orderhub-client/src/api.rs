//! HTTP client for the OrderHub API.
//!
//! Built with a cookie jar so the session credential set by the OAuth
//! callback rides along on every subsequent request.

use serde::Deserialize;
use uuid::Uuid;

use orderhub_core::error::AppError;
use orderhub_core::result::AppResult;
use orderhub_entity::user::UserRole;

/// The identity the backend asserts for the current session cookie.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionUser {
    /// Directory-assigned user id.
    pub id: Uuid,
    /// Email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Role.
    #[serde(default)]
    pub role: UserRole,
}

/// Success envelope used by every OrderHub endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[allow(dead_code)]
    success: bool,
    data: T,
}

#[derive(Debug, Deserialize)]
struct ConsentUrl {
    url: String,
}

/// Cookie-carrying client for the OrderHub HTTP API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client rooted at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Asks the backend who the ambient session cookie belongs to.
    ///
    /// A non-success status means the cookie is missing, expired, or
    /// invalid, which is an absent identity rather than an error. Only
    /// transport failures surface as `Err`.
    pub async fn fetch_current_user(&self) -> AppResult<Option<SessionUser>> {
        let response = self
            .http
            .get(format!("{}/api/auth/me", self.base_url))
            .send()
            .await
            .map_err(|e| AppError::internal(format!("Session check failed: {e}")))?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let envelope: Envelope<SessionUser> = response
            .json()
            .await
            .map_err(|e| AppError::internal(format!("Malformed session response: {e}")))?;

        Ok(Some(envelope.data))
    }

    /// Fetches the provider consent-screen URL to start a login.
    ///
    /// This endpoint answers with a bare `{url}` object, not the standard
    /// envelope.
    pub async fn google_auth_url(&self) -> AppResult<String> {
        let payload: ConsentUrl = self
            .http
            .get(format!("{}/auth/google/url", self.base_url))
            .send()
            .await
            .map_err(|e| AppError::internal(format!("Consent URL request failed: {e}")))?
            .json()
            .await
            .map_err(|e| AppError::internal(format!("Malformed consent URL response: {e}")))?;

        Ok(payload.url)
    }

    /// Clears the session cookie on the backend.
    pub async fn logout(&self) -> AppResult<()> {
        self.http
            .post(format!("{}/api/auth/logout", self.base_url))
            .send()
            .await
            .map_err(|e| AppError::internal(format!("Logout request failed: {e}")))?;

        Ok(())
    }
}

//! `AuthUser` extractor — the authentication gate.
//!
//! Pulls the credential from the session cookie, verifies it, and injects
//! the decoded claims into the handler. Handlers that take an `AuthUser`
//! therefore never run without a verified credential, which is what lets
//! the admin gate assume claims are present.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use orderhub_auth::jwt::Claims;
use orderhub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated identity available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Returns the decoded claims.
    pub fn claims(&self) -> &Claims {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = Claims;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(&state.config.auth.cookie_name)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| AppError::unauthenticated("Missing session cookie"))?;

        let claims = state.token_codec.verify(&token)?;

        Ok(AuthUser(claims))
    }
}

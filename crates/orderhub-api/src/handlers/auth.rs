//! Auth handlers — consent URL, OAuth callback, me, logout.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::json;

use orderhub_auth::GoogleProfile;
use orderhub_auth::role_for_email;
use orderhub_core::config::AuthConfig;
use orderhub_core::error::AppError;
use orderhub_entity::user::UpsertUser;

use crate::dto::request::CallbackQuery;
use crate::dto::response::{ApiResponse, ConsentUrlResponse, MeResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /auth/google/url
///
/// Returns a bare `{url}` object rather than the standard envelope; the
/// browser client reads the property off the top level.
pub async fn google_auth_url(State(state): State<AppState>) -> Json<ConsentUrlResponse> {
    Json(ConsentUrlResponse {
        url: state.oauth_client.consent_url(),
    })
}

/// GET /auth/google/callback
///
/// Provider-side failures (denied consent, bad code, unverifiable id
/// token) bounce back to the client with no cookie set. Only a missing
/// code is a caller error, and only a directory failure is ours.
pub async fn google_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<CallbackQuery>,
) -> Result<Response, ApiError> {
    if let Some(error) = query.error {
        tracing::warn!(error = %error, "OAuth consent denied");
        return Ok(Redirect::to(&state.config.server.client_url).into_response());
    }

    let code = match query.code.as_deref() {
        Some(code) if !code.is_empty() => code,
        _ => return Err(AppError::validation("Missing authorization code").into()),
    };

    let profile = match authenticate(&state, code).await {
        Ok(profile) => profile,
        Err(err) => {
            tracing::warn!(error = %err, "OAuth code exchange failed");
            return Ok(Redirect::to(&state.config.server.client_url).into_response());
        }
    };

    let role = role_for_email(&profile.email, &state.config.auth.admin_emails);
    let name = profile
        .name
        .clone()
        .unwrap_or_else(|| profile.email.clone());

    let user = state
        .user_repo
        .upsert(&UpsertUser {
            email: profile.email,
            name,
            picture: profile.picture,
            provider_id: Some(profile.sub),
            provider: "google".to_string(),
            role,
        })
        .await?;

    let token = state
        .token_codec
        .issue(user.id, &user.email, &user.name, user.role)?;

    tracing::info!(user_id = %user.id, role = %user.role, "User logged in");

    let cookie = session_cookie(&state.config.auth, token);
    let destination = success_redirect(&state.config.server.client_url);
    Ok((jar.add(cookie), Redirect::to(&destination)).into_response())
}

/// GET /api/auth/me
///
/// Answers from the validated claims alone; the credential is the
/// authoritative identity for its lifetime.
pub async fn me(auth: AuthUser) -> Response {
    (
        [(header::CACHE_CONTROL, "no-store")],
        Json(ApiResponse::ok(MeResponse::from(auth.claims()))),
    )
        .into_response()
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    let removal = Cookie::build((state.config.auth.cookie_name.clone(), "")).path("/");
    (jar.remove(removal), Json(json!({ "success": true }))).into_response()
}

/// Runs the code-for-token exchange and id-token verification.
async fn authenticate(state: &AppState, code: &str) -> Result<GoogleProfile, AppError> {
    let tokens = state.oauth_client.exchange_code(code).await?;
    let id_token = tokens
        .id_token
        .ok_or_else(|| AppError::exchange_failed("Token response carried no id_token"))?;
    state.id_token_verifier.verify(&id_token).await
}

/// Browser destination after a successful login.
///
/// The client's callback page finalizes the session (reads the identity,
/// then navigates on), so the redirect must land there rather than on the
/// public entry the failure paths use.
fn success_redirect(client_url: &str) -> String {
    format!("{}/auth/callback", client_url.trim_end_matches('/'))
}

/// Builds the HttpOnly session cookie from auth configuration.
fn session_cookie(config: &AuthConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::minutes(config.token_ttl_minutes as i64))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_redirect_targets_the_client_callback_page() {
        assert_eq!(
            success_redirect("http://localhost:5175"),
            "http://localhost:5175/auth/callback"
        );
        assert_eq!(
            success_redirect("http://localhost:5175/"),
            "http://localhost:5175/auth/callback"
        );
    }

    #[test]
    fn session_cookie_carries_hardening_attributes() {
        let config = AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_minutes: 60,
            cookie_name: "auth_token".to_string(),
            admin_emails: vec![],
        };

        let cookie = session_cookie(&config, "tok".to_string());
        assert_eq!(cookie.name(), "auth_token");
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::minutes(60)));
    }
}

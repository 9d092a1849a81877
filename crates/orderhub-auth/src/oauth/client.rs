//! Consent URL construction and authorization-code exchange.

use serde::Deserialize;

use orderhub_core::config::GoogleConfig;
use orderhub_core::error::AppError;

/// Tokens returned by the provider's token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderTokens {
    /// Bearer token for provider APIs (unused beyond the exchange).
    #[serde(default)]
    pub access_token: Option<String>,
    /// Signed OpenID Connect identity token.
    #[serde(default)]
    pub id_token: Option<String>,
    /// Offline-access refresh token, present on first consent.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Access token lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Client for Google's authorization-code flow.
#[derive(Debug, Clone)]
pub struct GoogleOAuthClient {
    http: reqwest::Client,
    config: GoogleConfig,
}

impl GoogleOAuthClient {
    /// Creates a new client from provider configuration.
    pub fn new(config: GoogleConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Builds the consent-screen URL.
    ///
    /// Deterministic URL construction from configuration; no side effects
    /// and no state.
    pub fn consent_url(&self) -> String {
        let scope = self.config.scopes.join(" ");
        format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&access_type=offline&prompt=consent",
            self.config.auth_url,
            urlencoding::encode(&self.config.client_id),
            urlencoding::encode(&self.config.redirect_uri),
            urlencoding::encode(&scope),
        )
    }

    /// Exchanges a one-time authorization code for provider tokens.
    ///
    /// Single network call; the provider rejects expired, reused, or
    /// wrong-redirect codes.
    pub async fn exchange_code(&self, code: &str) -> Result<ProviderTokens, AppError> {
        let params = [
            ("grant_type", "authorization_code"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("code", code),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ];

        let response = self
            .http
            .post(&self.config.token_url)
            .header("Accept", "application/json")
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                AppError::exchange_failed(format!("Token exchange request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "OAuth token exchange rejected: {body}");
            return Err(AppError::exchange_failed("Provider rejected the code"));
        }

        response
            .json::<ProviderTokens>()
            .await
            .map_err(|e| AppError::exchange_failed(format!("Malformed token response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GoogleConfig {
        GoogleConfig {
            client_id: "client-123.apps.googleusercontent.com".to_string(),
            client_secret: "shh".to_string(),
            redirect_uri: "http://localhost:3000/auth/google/callback".to_string(),
            auth_url: "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
            token_url: "https://oauth2.googleapis.com/token".to_string(),
            jwks_url: "https://www.googleapis.com/oauth2/v3/certs".to_string(),
            scopes: vec![
                "openid".to_string(),
                "email".to_string(),
                "profile".to_string(),
            ],
        }
    }

    #[test]
    fn test_consent_url_is_deterministic() {
        let client = GoogleOAuthClient::new(config());
        assert_eq!(client.consent_url(), client.consent_url());
    }

    #[test]
    fn test_consent_url_carries_required_params() {
        let url = GoogleOAuthClient::new(config()).consent_url();

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.contains("client_id=client-123.apps.googleusercontent.com"));
        assert!(url.contains(&format!(
            "redirect_uri={}",
            urlencoding::encode("http://localhost:3000/auth/google/callback")
        )));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("scope=openid%20email%20profile"));
        assert!(url.contains("access_type=offline"));
        assert!(url.contains("prompt=consent"));
    }
}

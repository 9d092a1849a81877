//! ID-token verification against Google's published signing keys.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use serde::Deserialize;
use tokio::sync::RwLock;

use orderhub_core::config::GoogleConfig;
use orderhub_core::error::AppError;

/// Issuer spellings Google has used in ID tokens.
const GOOGLE_ISSUERS: [&str; 2] = ["https://accounts.google.com", "accounts.google.com"];

/// A single RSA key from the provider's JWKS document.
#[derive(Debug, Clone, Deserialize)]
pub struct Jwk {
    /// Key id, matched against the token header.
    pub kid: String,
    /// Key type, expected to be `"RSA"`.
    pub kty: String,
    /// RSA modulus (base64url).
    pub n: String,
    /// RSA exponent (base64url).
    pub e: String,
}

/// The provider's key set.
#[derive(Debug, Clone, Deserialize)]
pub struct JwkSet {
    /// Published keys.
    pub keys: Vec<Jwk>,
}

impl JwkSet {
    /// Finds the RSA key matching the given key id.
    pub fn find(&self, kid: &str) -> Option<&Jwk> {
        self.keys.iter().find(|k| k.kid == kid && k.kty == "RSA")
    }
}

/// Profile claims extracted from a verified Google ID token.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleProfile {
    /// Google's stable subject identifier.
    pub sub: String,
    /// Email address.
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub picture: Option<String>,
}

/// Verifies Google ID tokens cryptographically, bound to our client id.
pub struct IdTokenVerifier {
    http: reqwest::Client,
    config: GoogleConfig,
    /// Cached JWKS document; refetched when an unknown key id appears
    /// (Google rotates keys).
    keys: RwLock<Option<JwkSet>>,
}

impl std::fmt::Debug for IdTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdTokenVerifier")
            .field("jwks_url", &self.config.jwks_url)
            .finish()
    }
}

impl IdTokenVerifier {
    /// Creates a new verifier from provider configuration.
    pub fn new(config: GoogleConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            keys: RwLock::new(None),
        }
    }

    /// Verifies an ID token and returns the profile it asserts.
    ///
    /// Checks signature (RS256 against the JWKS), audience (our client id),
    /// issuer, and expiry. Any mismatch fails with an
    /// invalid-identity-token error.
    pub async fn verify(&self, id_token: &str) -> Result<GoogleProfile, AppError> {
        let header = decode_header(id_token)
            .map_err(|e| AppError::invalid_identity_token(format!("Bad token header: {e}")))?;
        let kid = header
            .kid
            .ok_or_else(|| AppError::invalid_identity_token("Token header missing key id"))?;

        let jwk = self.key_for(&kid).await?;
        let decoding_key = DecodingKey::from_rsa_components(&jwk.n, &jwk.e)
            .map_err(|e| AppError::invalid_identity_token(format!("Bad provider key: {e}")))?;

        let validation = self.validation();

        let data = decode::<GoogleProfile>(id_token, &decoding_key, &validation)
            .map_err(|e| AppError::invalid_identity_token(format!("Verification failed: {e}")))?;

        Ok(data.claims)
    }

    /// RS256 validation bound to our client id and Google's issuers.
    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[self.config.client_id.as_str()]);
        validation.set_issuer(&GOOGLE_ISSUERS);
        validation.leeway = 5;
        validation
    }

    /// Returns the key for `kid`, refetching the JWKS once on a miss.
    async fn key_for(&self, kid: &str) -> Result<Jwk, AppError> {
        if let Some(set) = self.keys.read().await.as_ref() {
            if let Some(jwk) = set.find(kid) {
                return Ok(jwk.clone());
            }
        }

        let fresh = self.fetch_jwks().await?;
        let found = fresh.find(kid).cloned();
        *self.keys.write().await = Some(fresh);

        found.ok_or_else(|| AppError::invalid_identity_token("Unknown signing key"))
    }

    async fn fetch_jwks(&self) -> Result<JwkSet, AppError> {
        let response = self
            .http
            .get(&self.config.jwks_url)
            .send()
            .await
            .map_err(|e| AppError::invalid_identity_token(format!("JWKS fetch failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::invalid_identity_token(format!(
                "JWKS endpoint returned {}",
                response.status()
            )));
        }

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| AppError::invalid_identity_token(format!("Malformed JWKS: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwk_set_selects_by_kid_and_type() {
        let set: JwkSet = serde_json::from_str(
            r#"{
                "keys": [
                    {"kid": "a1", "kty": "RSA", "n": "mod-a", "e": "AQAB"},
                    {"kid": "b2", "kty": "EC",  "n": "",      "e": ""},
                    {"kid": "b2", "kty": "RSA", "n": "mod-b", "e": "AQAB"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(set.find("a1").unwrap().n, "mod-a");
        assert_eq!(set.find("b2").unwrap().n, "mod-b");
        assert!(set.find("missing").is_none());
    }

    #[test]
    fn test_validation_binds_audience_and_issuer() {
        let verifier = IdTokenVerifier::new(GoogleConfig {
            client_id: "client-123".to_string(),
            client_secret: String::new(),
            redirect_uri: "http://localhost:3000/auth/google/callback".to_string(),
            auth_url: String::new(),
            token_url: String::new(),
            jwks_url: String::new(),
            scopes: vec![],
        });

        let validation = verifier.validation();
        let aud = validation.aud.expect("audience must be set");
        assert!(aud.contains("client-123"));
        let iss = validation.iss.expect("issuer must be set");
        assert!(iss.contains("https://accounts.google.com"));
        assert!(iss.contains("accounts.google.com"));
    }
}

//! Session credential creation and verification.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use orderhub_core::config::AuthConfig;
use orderhub_core::error::AppError;
use orderhub_entity::user::UserRole;

use super::claims::Claims;

/// Signs and verifies session credentials.
///
/// Fixed symmetric secret, fixed TTL, no refresh and no revocation list:
/// logout merely clears the client-held cookie, so a captured credential
/// stays valid until natural expiry.
#[derive(Clone)]
pub struct TokenCodec {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Credential TTL in minutes.
    ttl_minutes: i64,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("validation", &self.validation)
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl TokenCodec {
    /// Creates a new codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            ttl_minutes: config.token_ttl_minutes as i64,
        }
    }

    /// Issues a signed credential for the given identity.
    pub fn issue(
        &self,
        user_id: Uuid,
        email: &str,
        name: &str,
        role: UserRole,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::minutes(self.ttl_minutes);

        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            name: name.to_string(),
            role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode credential: {e}")))
    }

    /// Decodes and validates a credential string.
    ///
    /// Any malformed, expired, or mis-signed credential fails with an
    /// unauthenticated error; callers map this to a 401 response.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthenticated("Credential has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::unauthenticated("Invalid credential format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthenticated("Invalid credential signature")
                    }
                    _ => AppError::unauthenticated(format!("Credential validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderhub_core::error::ErrorKind;

    fn codec() -> TokenCodec {
        TokenCodec::new(&AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_minutes: 60,
            cookie_name: "auth_token".to_string(),
            admin_emails: vec![],
        })
    }

    #[test]
    fn test_issue_then_verify_round_trips_claims() {
        let codec = codec();
        let id = Uuid::new_v4();

        let token = codec
            .issue(id, "ana@example.com", "Ana", UserRole::Admin)
            .unwrap();
        let claims = codec.verify(&token).unwrap();

        assert_eq!(claims.sub, id);
        assert_eq!(claims.email, "ana@example.com");
        assert_eq!(claims.name, "Ana");
        assert_eq!(claims.role, UserRole::Admin);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let err = codec().verify("not-a-jwt").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = codec()
            .issue(Uuid::new_v4(), "a@b.com", "A", UserRole::User)
            .unwrap();

        let other = TokenCodec::new(&AuthConfig {
            jwt_secret: "different-secret".to_string(),
            token_ttl_minutes: 60,
            cookie_name: "auth_token".to_string(),
            admin_emails: vec![],
        });

        let err = other.verify(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_verify_rejects_expired() {
        let codec = codec();
        let now = Utc::now();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "old@example.com".to_string(),
            name: "Old".to_string(),
            role: UserRole::User,
            iat: (now - chrono::Duration::hours(2)).timestamp(),
            exp: (now - chrono::Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let err = codec.verify(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_missing_role_defaults_to_user() {
        // A credential whose payload omits `role` still verifies, with the
        // regular user role.
        #[derive(serde::Serialize)]
        struct Bare {
            sub: Uuid,
            email: String,
            name: String,
            iat: i64,
            exp: i64,
        }
        let now = Utc::now();
        let token = encode(
            &Header::default(),
            &Bare {
                sub: Uuid::new_v4(),
                email: "bare@example.com".to_string(),
                name: "Bare".to_string(),
                iat: now.timestamp(),
                exp: (now + chrono::Duration::hours(1)).timestamp(),
            },
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let claims = codec().verify(&token).unwrap();
        assert_eq!(claims.role, UserRole::User);
    }
}

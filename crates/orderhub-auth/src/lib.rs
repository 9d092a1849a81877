//! # orderhub-auth
//!
//! Authentication building blocks for OrderHub: the session credential
//! codec (HS256 JWT in a cookie), the Google OAuth authorization-code
//! exchange client with ID-token verification, and the admin allow-list
//! role policy.

pub mod jwt;
pub mod oauth;
pub mod roles;

pub use jwt::{Claims, TokenCodec};
pub use oauth::{GoogleOAuthClient, GoogleProfile, IdTokenVerifier};
pub use roles::role_for_email;

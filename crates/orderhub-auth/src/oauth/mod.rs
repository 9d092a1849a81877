//! Google OAuth 2.0 authorization-code flow.
//!
//! Three concerns: building the consent URL, exchanging the one-time code
//! for provider tokens, and verifying the returned ID token against
//! Google's published signing keys.

pub mod client;
pub mod verifier;

pub use client::{GoogleOAuthClient, ProviderTokens};
pub use verifier::{GoogleProfile, IdTokenVerifier};

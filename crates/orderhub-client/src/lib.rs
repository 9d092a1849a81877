//! # orderhub-client
//!
//! Session-aware client pieces for OrderHub frontends: an HTTP client that
//! carries the session cookie, a process-wide session store populated by a
//! bootstrap "who am I" check, and route guards that gate rendering on the
//! store's state.

pub mod api;
pub mod guard;
pub mod store;

pub use api::{ApiClient, SessionUser};
pub use guard::{GuardOutcome, RedirectTarget, RouteGuard};
pub use store::{SessionSnapshot, SessionStore};

//! Process-wide session store.
//!
//! Holds the current authenticated identity and a loading flag. The store
//! starts in `loading` and settles exactly once through [`SessionStore::bootstrap`];
//! login and logout flows mutate it directly through [`SessionStore::set_identity`].

use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::api::{ApiClient, SessionUser};

/// A copy of the store's state at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// The current identity, absent when logged out or not yet known.
    pub identity: Option<SessionUser>,
    /// True until the bootstrap check has settled.
    pub loading: bool,
}

/// Owned, single-instance session state. Pass by reference to whatever
/// needs it rather than making it a global.
#[derive(Debug)]
pub struct SessionStore {
    state: RwLock<SessionSnapshot>,
}

impl SessionStore {
    /// Creates a store in the initial loading state.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(SessionSnapshot {
                identity: None,
                loading: true,
            }),
        }
    }

    /// Runs the one-shot "who am I" check and settles the store.
    ///
    /// Any failure, transport or otherwise, settles to an absent identity.
    /// If `cancel` fires before the check resolves, the resolution is a
    /// no-op: the store is left untouched for its owner to tear down.
    pub async fn bootstrap(&self, api: &ApiClient, cancel: &CancellationToken) {
        let identity = match api.fetch_current_user().await {
            Ok(identity) => identity,
            Err(err) => {
                tracing::debug!(error = %err, "Session bootstrap failed");
                None
            }
        };

        if cancel.is_cancelled() {
            return;
        }

        let mut state = self.state.write().await;
        state.identity = identity;
        state.loading = false;
    }

    /// Directly sets (or clears) the identity, settling the store.
    ///
    /// Used by login and logout flows that already know the outcome and
    /// must not wait for another bootstrap round trip.
    pub async fn set_identity(&self, identity: Option<SessionUser>) {
        let mut state = self.state.write().await;
        state.identity = identity;
        state.loading = false;
    }

    /// Returns a copy of the current state.
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.state.read().await.clone()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderhub_entity::user::UserRole;
    use uuid::Uuid;

    fn some_user() -> SessionUser {
        SessionUser {
            id: Uuid::new_v4(),
            email: "someone@example.com".to_string(),
            name: "Someone".to_string(),
            role: UserRole::User,
        }
    }

    #[test]
    fn starts_loading_with_no_identity() {
        let store = SessionStore::new();
        let snapshot = store.state.blocking_read().clone();
        assert!(snapshot.loading);
        assert!(snapshot.identity.is_none());
    }

    #[tokio::test]
    async fn bootstrap_settles_to_absent_when_backend_unreachable() {
        let store = SessionStore::new();
        let api = ApiClient::new("http://127.0.0.1:1").unwrap();
        let cancel = CancellationToken::new();

        store.bootstrap(&api, &cancel).await;

        let snapshot = store.snapshot().await;
        assert!(!snapshot.loading);
        assert!(snapshot.identity.is_none());
    }

    #[tokio::test]
    async fn cancelled_bootstrap_leaves_store_untouched() {
        let store = SessionStore::new();
        let api = ApiClient::new("http://127.0.0.1:1").unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();

        store.bootstrap(&api, &cancel).await;

        let snapshot = store.snapshot().await;
        assert!(snapshot.loading);
        assert!(snapshot.identity.is_none());
    }

    #[tokio::test]
    async fn set_identity_settles_and_clears() {
        let store = SessionStore::new();

        store.set_identity(Some(some_user())).await;
        let snapshot = store.snapshot().await;
        assert!(!snapshot.loading);
        assert!(snapshot.identity.is_some());

        store.set_identity(None).await;
        let snapshot = store.snapshot().await;
        assert!(!snapshot.loading);
        assert!(snapshot.identity.is_none());
    }
}

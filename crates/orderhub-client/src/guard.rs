//! Route guards.
//!
//! One parameterized guard covers both the authenticated-only and the
//! admin-only cases, so the two variants cannot drift apart. Guards check
//! `loading` before `identity` so a page refresh does not redirect while
//! the bootstrap check is still in flight.

use orderhub_entity::user::UserRole;

use crate::store::SessionSnapshot;

/// Where a denied navigation should be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// The public login entry point, for unauthenticated navigation.
    PublicEntry,
    /// The default authenticated page, for under-privileged navigation.
    Home,
}

/// What the caller should render for the guarded route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Bootstrap has not settled; show a pending indicator.
    Loading,
    /// Navigation denied; send the user elsewhere.
    Redirect(RedirectTarget),
    /// Requirement met; render the protected content.
    Render,
}

/// A render-time gate over the session store's state.
#[derive(Debug, Clone, Copy)]
pub struct RouteGuard {
    required_role: Option<UserRole>,
}

impl RouteGuard {
    /// Guard that only requires a present identity.
    pub fn authenticated() -> Self {
        Self {
            required_role: None,
        }
    }

    /// Guard that additionally requires the admin role.
    pub fn admin() -> Self {
        Self {
            required_role: Some(UserRole::Admin),
        }
    }

    /// Decides the render outcome for the given session state.
    pub fn evaluate(&self, state: &SessionSnapshot) -> GuardOutcome {
        if state.loading {
            return GuardOutcome::Loading;
        }

        let identity = match &state.identity {
            Some(identity) => identity,
            None => return GuardOutcome::Redirect(RedirectTarget::PublicEntry),
        };

        if let Some(required) = self.required_role {
            if identity.role != required {
                return GuardOutcome::Redirect(RedirectTarget::Home);
            }
        }

        GuardOutcome::Render
    }
}

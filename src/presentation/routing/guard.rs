//! Authorization guard for protected routes.

use crate::domain::{AppRoute, AuthorizationStatus};

/// Returns whether `current` satisfies `required`.
#[must_use]
pub fn is_allowed(required: AuthorizationStatus, current: AuthorizationStatus) -> bool {
    required == current
}

/// What the router does with a guarded screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the protected screen.
    Render,
    /// Status not known yet; render nothing.
    Pending,
    /// Leave for another route.
    Redirect(AppRoute),
}

/// Wrapper that only lets a screen render under one authorization status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivateRoute {
    required: AuthorizationStatus,
}

impl PrivateRoute {
    #[must_use]
    pub const fn new(required: AuthorizationStatus) -> Self {
        Self { required }
    }

    /// Returns the guard protecting `route`, if it has one.
    #[must_use]
    pub const fn for_route(route: AppRoute) -> Option<Self> {
        match route {
            AppRoute::Favorites => Some(Self::new(AuthorizationStatus::Auth)),
            AppRoute::Login => Some(Self::new(AuthorizationStatus::NoAuth)),
            AppRoute::Main | AppRoute::Offer | AppRoute::NotFound => None,
        }
    }

    #[must_use]
    pub const fn required(&self) -> AuthorizationStatus {
        self.required
    }

    /// Decides what to render for the current status.
    #[must_use]
    pub fn evaluate(&self, current: AuthorizationStatus) -> GuardOutcome {
        if is_allowed(self.required, current) {
            return GuardOutcome::Render;
        }
        if current == AuthorizationStatus::Unknown {
            return GuardOutcome::Pending;
        }

        match self.required {
            AuthorizationStatus::Auth => GuardOutcome::Redirect(AppRoute::Login),
            AuthorizationStatus::NoAuth | AuthorizationStatus::Unknown => {
                GuardOutcome::Redirect(AppRoute::Main)
            }
        }
    }
}

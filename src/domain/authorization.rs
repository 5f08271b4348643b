//! Login state of the current session.

/// Tri-state authorization status.
///
/// `Unknown` is the startup value, before the stored token has been checked
/// against the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthorizationStatus {
    /// Signed in.
    Auth,
    /// Signed out.
    NoAuth,
    /// Not yet resolved.
    #[default]
    Unknown,
}

impl AuthorizationStatus {
    /// Returns whether the status has been resolved.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Returns whether the user is signed in.
    #[must_use]
    pub const fn is_authorized(self) -> bool {
        matches!(self, Self::Auth)
    }
}

impl std::fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auth => write!(f, "AUTH"),
            Self::NoAuth => write!(f, "NO_AUTH"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

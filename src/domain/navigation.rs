//! Navigable application routes.

/// Closed set of the application's navigable paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// Catalog of offers for the active city.
    Main,
    /// Sign-in form.
    Login,
    /// Saved offers of the signed-in user.
    Favorites,
    /// Offer detail page, `/offer/:id`.
    Offer,
    /// Fallback for unmatched paths.
    NotFound,
}

impl AppRoute {
    /// Returns the route's path template.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Main => "/",
            Self::Login => "/login",
            Self::Favorites => "/favorites",
            Self::Offer => "/offer/:id",
            Self::NotFound => "*",
        }
    }

    /// Builds the concrete path of an offer detail page.
    #[must_use]
    pub fn offer(id: &str) -> String {
        format!("/offer/{id}")
    }
}

impl std::fmt::Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

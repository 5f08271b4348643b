//! Route table.

use crate::domain::AppRoute;

/// Offer id used when the detail path has no id segment.
pub const MISSING_OFFER_ID: &str = "0";

/// A path matched against the route table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouteMatch {
    Main,
    Login,
    Favorites,
    Offer { id: String },
    NotFound { path: String },
}

impl RouteMatch {
    /// Matches a path. Never fails; unknown paths resolve to `NotFound`.
    ///
    /// Query strings, fragments and trailing slashes are ignored. The offer
    /// id loses one leading `:` so `/offer/:42` and `/offer/42` are the same
    /// page.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        let normalized = normalize(path);

        match normalized {
            "" => Self::Main,
            "/login" => Self::Login,
            "/favorites" => Self::Favorites,
            "/offer" => Self::offer(MISSING_OFFER_ID),
            _ => match normalized.strip_prefix("/offer/") {
                Some(segment) if !segment.contains('/') => {
                    let id = segment.strip_prefix(':').unwrap_or(segment);
                    if id.is_empty() {
                        Self::offer(MISSING_OFFER_ID)
                    } else {
                        Self::offer(id)
                    }
                }
                _ => Self::NotFound {
                    path: path.to_string(),
                },
            },
        }
    }

    /// Creates an offer detail match.
    #[must_use]
    pub fn offer(id: impl Into<String>) -> Self {
        Self::Offer { id: id.into() }
    }

    /// Id of the offer on screen, if this is a detail page.
    #[must_use]
    pub fn offer_id(&self) -> Option<&str> {
        match self {
            Self::Offer { id } => Some(id),
            _ => None,
        }
    }

    /// Returns the route this match belongs to.
    #[must_use]
    pub const fn route(&self) -> AppRoute {
        match self {
            Self::Main => AppRoute::Main,
            Self::Login => AppRoute::Login,
            Self::Favorites => AppRoute::Favorites,
            Self::Offer { .. } => AppRoute::Offer,
            Self::NotFound { .. } => AppRoute::NotFound,
        }
    }

    /// Returns the concrete path for display in the address bar.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Offer { id } => AppRoute::offer(id),
            Self::NotFound { path } => path.clone(),
            other => other.route().path().to_string(),
        }
    }
}

impl From<AppRoute> for RouteMatch {
    fn from(route: AppRoute) -> Self {
        match route {
            AppRoute::Main => Self::Main,
            AppRoute::Login => Self::Login,
            AppRoute::Favorites => Self::Favorites,
            AppRoute::Offer => Self::offer(MISSING_OFFER_ID),
            AppRoute::NotFound => Self::NotFound {
                path: route.path().to_string(),
            },
        }
    }
}

fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].trim().trim_end_matches('/')
}

//! Signed-in user profile.

use serde::{Deserialize, Serialize};

use super::token::AuthToken;

/// Profile of the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub is_pro: bool,
}

impl UserData {
    /// Creates new user profile.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar_url: String::new(),
            is_pro: false,
        }
    }
}

/// Result of a successful sign-in.
#[derive(Debug, Clone)]
pub struct AuthInfo {
    pub user: UserData,
    pub token: AuthToken,
}

impl AuthInfo {
    /// Creates new auth info.
    #[must_use]
    pub const fn new(user: UserData, token: AuthToken) -> Self {
        Self { user, token }
    }
}

/// Sign-in form values.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Creates new credentials.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

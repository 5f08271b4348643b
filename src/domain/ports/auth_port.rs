//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::{AuthInfo, AuthToken, Credentials, UserData};
use crate::domain::errors::ApiError;

/// Port for session operations against the rental API.
///
/// Implementations remember the token of the last successful `login` or
/// `check_auth` and attach it to subsequent requests until `logout`.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Validates a stored token and returns the user it belongs to.
    async fn check_auth(&self, token: &AuthToken) -> Result<UserData, ApiError>;

    /// Signs in with email and password.
    async fn login(&self, credentials: &Credentials) -> Result<AuthInfo, ApiError>;

    /// Ends the session.
    async fn logout(&self, token: &AuthToken) -> Result<(), ApiError>;
}

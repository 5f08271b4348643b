//! Session token persistence port.

use async_trait::async_trait;

use crate::domain::entities::AuthToken;
use crate::domain::errors::ApiError;

/// Keeps the `X-Token` of the signed-in user between runs.
#[async_trait]
pub trait TokenStoragePort: Send + Sync {
    /// Returns the saved token, if any.
    async fn load_session(&self) -> Result<Option<AuthToken>, ApiError>;

    /// Saves the token of a fresh session, replacing any previous one.
    async fn save_session(&self, token: &AuthToken) -> Result<(), ApiError>;

    /// Forgets the saved token. Succeeds when nothing is saved.
    async fn clear_session(&self) -> Result<(), ApiError>;

    /// Returns whether a token is saved.
    async fn has_session_token(&self) -> Result<bool, ApiError> {
        Ok(self.load_session().await?.is_some())
    }
}

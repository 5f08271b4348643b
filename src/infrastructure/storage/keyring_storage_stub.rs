//! Token storage for builds without keyring support.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::AuthToken;
use crate::domain::errors::ApiError;
use crate::domain::ports::TokenStoragePort;

/// Storage that keeps nothing; sessions last for one run.
pub struct KeyringTokenStorage;

impl KeyringTokenStorage {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn with_names(_service: impl Into<String>, _user: impl Into<String>) -> Self {
        Self
    }
}

impl Default for KeyringTokenStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStoragePort for KeyringTokenStorage {
    async fn load_session(&self) -> Result<Option<AuthToken>, ApiError> {
        Ok(None)
    }

    async fn save_session(&self, _token: &AuthToken) -> Result<(), ApiError> {
        debug!("Built without keyring support, session ends with this run");
        Ok(())
    }

    async fn clear_session(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_session_is_not_kept() {
        let storage = KeyringTokenStorage::new();
        storage
            .save_session(&AuthToken::new_unchecked("abc"))
            .await
            .unwrap();

        assert!(storage.load_session().await.unwrap().is_none());
    }
}

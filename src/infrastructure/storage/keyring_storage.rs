//! Keyring-based token storage.

use async_trait::async_trait;
use keyring::Entry;
use tracing::{debug, warn};

use crate::domain::entities::AuthToken;
use crate::domain::errors::{ApiError, SecretError};
use crate::domain::ports::TokenStoragePort;

const KEYRING_SERVICE: &str = "six-cities";
const KEYRING_ACCOUNT: &str = "x-token";

/// Keeps the session token in the platform keyring under one account.
pub struct KeyringTokenStorage {
    service: String,
    account: String,
}

impl KeyringTokenStorage {
    /// Uses the `six-cities` service and the `x-token` account.
    #[must_use]
    pub fn new() -> Self {
        Self::with_names(KEYRING_SERVICE, KEYRING_ACCOUNT)
    }

    /// Uses a custom service and account, e.g. to keep tests apart.
    #[must_use]
    pub fn with_names(service: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            account: account.into(),
        }
    }

    fn entry(&self) -> Result<Entry, SecretError> {
        Entry::new(&self.service, &self.account).map_err(|e| SecretError::Unavailable(e.to_string()))
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
        let secret = match self.entry()?.get_password() {
            Ok(secret) => secret,
            Err(keyring::Error::NoEntry) => return Ok(None),
            Err(e) => return Err(SecretError::Read(e.to_string()).into()),
        };

        let token = AuthToken::new(&secret);
        if token.is_none() {
            warn!(account = %self.account, "Ignoring blank session token in keyring");
        }
        Ok(token)
    }

    async fn save_session(&self, token: &AuthToken) -> Result<(), ApiError> {
        debug!(account = %self.account, token = %token, "Saving session token");
        self.entry()?
            .set_password(token.as_str())
            .map_err(|e| SecretError::Write(e.to_string()).into())
    }

    async fn clear_session(&self) -> Result<(), ApiError> {
        debug!(account = %self.account, "Clearing session token");
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(SecretError::Clear(e.to_string()).into()),
        }
    }
}

//! Startup session check.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::TokenSource;
use crate::application::store::{Dispatch, action};
use crate::domain::AuthorizationStatus;
use crate::domain::entities::AuthToken;
use crate::domain::errors::ApiError;
use crate::domain::ports::{AuthPort, TokenStoragePort};

/// Resolved token with its source.
#[derive(Debug, Clone)]
pub struct ResolvedToken {
    /// The session token.
    pub token: AuthToken,
    /// Source of the token.
    pub source: TokenSource,
}

impl ResolvedToken {
    /// Creates new resolved token.
    #[must_use]
    pub const fn new(token: AuthToken, source: TokenSource) -> Self {
        Self { token, source }
    }
}

/// Seeds the authorization status from a stored token.
#[derive(Clone)]
pub struct CheckAuthUseCase {
    auth_port: Arc<dyn AuthPort>,
    storage_port: Arc<dyn TokenStoragePort>,
}

impl CheckAuthUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(
        auth_port: Arc<dyn AuthPort>,
        storage_port: Arc<dyn TokenStoragePort>,
    ) -> Self {
        Self {
            auth_port,
            storage_port,
        }
    }

    /// Resolves token from keyring or CLI/Env.
    ///
    /// Priority:
    /// 1. Keyring
    /// 2. CLI/Env (passed as argument)
    ///
    /// # Errors
    /// Returns error if storage access fails.
    pub async fn resolve_token(
        &self,
        cli_token: Option<String>,
    ) -> Result<Option<ResolvedToken>, ApiError> {
        debug!("Checking keyring for stored token");
        match self.storage_port.load_session().await {
            Ok(Some(token)) => {
                info!("Using token from system keyring");
                return Ok(Some(ResolvedToken::new(token, TokenSource::Keyring)));
            }
            Ok(None) => {
                debug!("No token found in keyring");
            }
            Err(e) => {
                debug!(error = %e, "Failed to check keyring");
            }
        }

        if let Some(token) = cli_token.as_deref().and_then(AuthToken::new) {
            info!("Using token from command line / environment");
            return Ok(Some(ResolvedToken::new(token, TokenSource::CommandLine)));
        }

        debug!("No token found in any source");
        Ok(None)
    }

    /// Checks the resolved token and dispatches the resulting status.
    ///
    /// Always leaves the store resolved to `Auth` or `NoAuth`. Returns the
    /// token when the session is valid.
    pub async fn execute(
        &self,
        cli_token: Option<String>,
        dispatcher: &dyn Dispatch,
    ) -> Option<AuthToken> {
        let resolved = match self.resolve_token(cli_token).await {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!(error = %e, "Token resolution failed");
                None
            }
        };

        let Some(resolved) = resolved else {
            dispatcher.dispatch(action::require_authorization(AuthorizationStatus::NoAuth));
            return None;
        };

        match self.auth_port.check_auth(&resolved.token).await {
            Ok(user) => {
                info!(email = %user.email, source = %resolved.source, "Session restored");
                dispatcher.dispatch(action::require_authorization(AuthorizationStatus::Auth));
                dispatcher.dispatch(action::set_user_info(Some(user)));
                Some(resolved.token)
            }
            Err(e) => {
                warn!(error = %e, "Stored session rejected");
                if e.is_unauthorized() && resolved.source == TokenSource::Keyring {
                    if let Err(e) = self.storage_port.clear_session().await {
                        warn!(error = %e, "Failed to delete stale token");
                    }
                }
                dispatcher.dispatch(action::require_authorization(AuthorizationStatus::NoAuth));
                dispatcher.dispatch(action::set_user_info(None));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::store::mock::RecordingDispatcher;
    use crate::domain::entities::UserData;
    use crate::domain::ports::mocks::{MOCK_TOKEN, MockAuthPort, MockTokenStorage};

    fn stored() -> AuthToken {
        AuthToken::new_unchecked(MOCK_TOKEN)
    }

    #[tokio::test]
    async fn test_keyring_priority() {
        let storage = Arc::new(MockTokenStorage::with_token(stored()));
        let use_case = CheckAuthUseCase::new(Arc::new(MockAuthPort::new(true)), storage);

        let result = use_case
            .resolve_token(Some("cli-token".to_string()))
            .await
            .unwrap();

        assert_eq!(result.unwrap().source, TokenSource::Keyring);
    }

    #[tokio::test]
    async fn test_cli_fallback() {
        let storage = Arc::new(MockTokenStorage::new());
        let use_case = CheckAuthUseCase::new(Arc::new(MockAuthPort::new(true)), storage);

        let result = use_case
            .resolve_token(Some("cli-token".to_string()))
            .await
            .unwrap();

        assert_eq!(result.unwrap().source, TokenSource::CommandLine);
    }

    #[tokio::test]
    async fn test_blank_cli_token_ignored() {
        let storage = Arc::new(MockTokenStorage::new());
        let use_case = CheckAuthUseCase::new(Arc::new(MockAuthPort::new(true)), storage);

        let result = use_case.resolve_token(Some("  ".to_string())).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_no_token_resolves_to_no_auth() {
        let use_case = CheckAuthUseCase::new(
            Arc::new(MockAuthPort::new(true)),
            Arc::new(MockTokenStorage::new()),
        );
        let dispatcher = RecordingDispatcher::new();

        let token = use_case.execute(None, &dispatcher).await;

        assert!(token.is_none());
        assert_eq!(
            dispatcher.actions(),
            vec![action::require_authorization(AuthorizationStatus::NoAuth)]
        );
    }

    #[tokio::test]
    async fn test_valid_session_resolves_to_auth() {
        let use_case = CheckAuthUseCase::new(
            Arc::new(MockAuthPort::new(true)),
            Arc::new(MockTokenStorage::with_token(stored())),
        );
        let dispatcher = RecordingDispatcher::new();

        let token = use_case.execute(None, &dispatcher).await;

        assert_eq!(token, Some(stored()));
        assert_eq!(
            dispatcher.actions(),
            vec![
                action::require_authorization(AuthorizationStatus::Auth),
                action::set_user_info(Some(UserData::new("Oliver", "oliver@example.com"))),
            ]
        );
    }

    #[tokio::test]
    async fn test_rejected_session_clears_keyring() {
        let storage = Arc::new(MockTokenStorage::with_token(stored()));
        let use_case = CheckAuthUseCase::new(Arc::new(MockAuthPort::new(false)), storage.clone());
        let dispatcher = RecordingDispatcher::new();

        let token = use_case.execute(None, &dispatcher).await;

        assert!(token.is_none());
        assert!(!storage.has_session_token().await.unwrap());
        assert_eq!(
            dispatcher.kinds(),
            vec!["user/requireAuthorization", "user/setUserInfo"]
        );
    }
}

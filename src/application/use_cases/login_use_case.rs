//! Sign-in and sign-out.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{LoginRequest, LoginResponse};
use crate::domain::entities::AuthToken;
use crate::domain::errors::ApiError;
use crate::domain::ports::{AuthPort, TokenStoragePort};

/// Handles sign-in and sign-out.
#[derive(Clone)]
pub struct LoginUseCase {
    auth_port: Arc<dyn AuthPort>,
    storage_port: Arc<dyn TokenStoragePort>,
}

impl LoginUseCase {
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

    /// Validates the form, signs in and optionally remembers the token.
    ///
    /// # Errors
    /// Returns error if the form is invalid or the API rejects it.
    pub async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let credentials = request.validate().map_err(|e| {
            debug!(error = %e, "Login form rejected");
            e
        })?;

        debug!(email = %credentials.email, "Signing in");

        let auth = self.auth_port.login(&credentials).await.map_err(|e| {
            warn!(error = %e, "Login failed");
            e
        })?;

        info!(email = %auth.user.email, "Signed in");

        let token_persisted = if request.persist_token {
            self.storage_port
                .save_session(&auth.token)
                .await
                .inspect_err(|e| warn!(error = %e, "Session will not survive a restart"))
                .is_ok()
        } else {
            // An older remembered session must not outlive this one.
            if let Err(e) = self.storage_port.clear_session().await {
                warn!(error = %e, "Failed to forget previous session");
            }
            false
        };

        Ok(LoginResponse::new(auth.user, auth.token, token_persisted))
    }

    /// Ends the session and deletes the stored token.
    ///
    /// The API call is best effort; the local token is removed either way.
    ///
    /// # Errors
    /// Returns error if deletion fails.
    pub async fn logout(&self, token: &AuthToken) -> Result<(), ApiError> {
        if let Err(e) = self.auth_port.logout(token).await {
            warn!(error = %e, "Logout request failed, clearing local session anyway");
        }

        self.storage_port.clear_session().await?;
        info!("Signed out");
        Ok(())
    }
}

//! API and session error types.

use thiserror::Error;

use super::{SecretError, ValidationError};

/// Errors raised by calls to the rental API and the token store.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("not authorized: {message}")]
    Unauthorized { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("request rejected: {message}")]
    BadRequest { message: String },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("secure storage error: {0}")]
    Secret(#[from] SecretError),

    #[error("unexpected API error: {message}")]
    Unexpected { message: String },
}

impl ApiError {
    /// Creates unauthorized error.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Creates not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Creates bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the API refused the session.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts() {
        let err: ApiError = ValidationError::InvalidEmail.into();
        assert!(matches!(err, ApiError::Validation(ValidationError::InvalidEmail)));
        assert_eq!(
            err.to_string(),
            "invalid input: enter a valid email address"
        );
    }

    #[test]
    fn test_classification() {
        assert!(ApiError::unauthorized("expired").is_unauthorized());
        assert!(ApiError::network("timeout").is_network_error());
        assert!(!ApiError::not_found("offer 7").is_network_error());
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::not_found("offer 7").to_string(), "offer 7 not found");
    }
}

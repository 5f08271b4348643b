//! Keyring error types.

use thiserror::Error;

/// Failures of the keyring holding the session token.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum SecretError {
    #[error("keyring unavailable: {0}")]
    Unavailable(String),

    #[error("could not read session token: {0}")]
    Read(String),

    #[error("could not save session token: {0}")]
    Write(String),

    #[error("could not remove session token: {0}")]
    Clear(String),
}

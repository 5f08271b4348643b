//! Authentication DTOs.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::entities::{AuthToken, Credentials, UserData};
use crate::domain::errors::ValidationError;

/// Source of a stored session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Token passed on the command line or via environment.
    CommandLine,
    /// Token from system keyring.
    Keyring,
}

impl TokenSource {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::CommandLine => "command line / environment",
            Self::Keyring => "system keyring",
        }
    }
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Login request data.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginRequest {
    /// Entered email.
    pub email: String,
    /// Entered password.
    pub password: String,
    /// Whether to persist the session token.
    pub persist_token: bool,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("persist_token", &self.persist_token)
            .finish_non_exhaustive()
    }
}

impl LoginRequest {
    /// Creates new login request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            persist_token: true,
        }
    }

    /// Disables token persistence.
    #[must_use]
    pub const fn without_persistence(mut self) -> Self {
        self.persist_token = false;
        self
    }

    /// Checks the form values and returns credentials to send.
    ///
    /// # Errors
    /// Returns the first rule the input breaks.
    ///
    /// # Panics
    ///
    /// Panics if the internal regex is invalid.
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
        let email_re =
            EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));

        let email = self.email.trim();
        if !email_re.is_match(email) {
            return Err(ValidationError::InvalidEmail);
        }

        let password = &self.password;
        let has_letter = password.chars().any(char::is_alphabetic);
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        if !has_letter || !has_digit || password.chars().any(char::is_whitespace) {
            return Err(ValidationError::WeakPassword);
        }

        Ok(Credentials::new(email, password.clone()))
    }
}

/// Login response data.
#[derive(Debug, Clone)]
pub struct LoginResponse {
    /// Authenticated user.
    pub user: UserData,
    /// Session token.
    pub token: AuthToken,
    /// Whether token was persisted.
    pub token_persisted: bool,
}

impl LoginResponse {
    /// Creates new login response.
    #[must_use]
    pub const fn new(user: UserData, token: AuthToken, token_persisted: bool) -> Self {
        Self {
            user,
            token,
            token_persisted,
        }
    }
}

//! Session token value object.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// API session token, sent as `X-Token`. Masked in logs, zeroed on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AuthToken {
    value: String,
}

impl AuthToken {
    /// Creates new token, rejecting blank values and embedded whitespace.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Option<Self> {
        let value = value.as_ref().trim();

        if value.is_empty() || value.chars().any(char::is_whitespace) {
            return None;
        }

        Some(Self {
            value: value.to_string(),
        })
    }

    /// Creates token without validation.
    #[must_use]
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns token as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns masked token for display.
    #[must_use]
    pub fn masked(&self) -> String {
        if self.value.len() <= 10 || !self.value.is_ascii() {
            return "*".repeat(self.value.chars().count());
        }

        let visible_prefix = &self.value[..4];
        let visible_suffix = &self.value[self.value.len() - 4..];
        format!("{visible_prefix}...{visible_suffix}")
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("value", &self.masked())
            .finish()
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "T2xpdmVyLmNvbm5lckBnbWFpbC5jb20=";

    #[test]
    fn test_valid_token_creation() {
        let token = AuthToken::new(format!("  {TOKEN}\n"));
        assert_eq!(token.map(|t| t.as_str().to_string()), Some(TOKEN.to_string()));
    }

    #[test]
    fn test_blank_token_rejected() {
        assert!(AuthToken::new("   ").is_none());
    }

    #[test]
    fn test_token_with_inner_whitespace_rejected() {
        assert!(AuthToken::new("abc def").is_none());
    }

    #[test]
    fn test_token_masking() {
        let token = AuthToken::new_unchecked(TOKEN);
        let masked = token.masked();

        assert_eq!(masked, "T2xp...b20=");
        assert!(!masked.contains(TOKEN));
    }

    #[test]
    fn test_short_token_fully_masked() {
        assert_eq!(AuthToken::new_unchecked("abc").masked(), "***");
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let token = AuthToken::new_unchecked(TOKEN);
        let debug_output = format!("{token:?}");

        assert!(!debug_output.contains(TOKEN));
    }
}

//! Form validation errors.

use thiserror::Error;

/// Rejected form input, reported before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("enter a valid email address")]
    InvalidEmail,

    #[error("password must contain at least one letter and one digit and no spaces")]
    WeakPassword,

    #[error("choose a rating from 1 to 5 stars")]
    MissingRating,

    #[error("review must be {min} to {max} characters long, got {len}")]
    CommentLength { len: usize, min: usize, max: usize },
}

//! Review form DTO.

use crate::domain::entities::NewReview;
use crate::domain::errors::ValidationError;

/// Shortest accepted review text, in characters.
pub const COMMENT_MIN_LENGTH: usize = 50;
/// Longest accepted review text, in characters.
pub const COMMENT_MAX_LENGTH: usize = 300;

/// Review form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    pub offer_id: String,
    pub rating: Option<u8>,
    pub comment: String,
}

impl ReviewRequest {
    /// Creates new review request.
    #[must_use]
    pub fn new(offer_id: impl Into<String>, rating: Option<u8>, comment: impl Into<String>) -> Self {
        Self {
            offer_id: offer_id.into(),
            rating,
            comment: comment.into(),
        }
    }

    /// Returns whether the form may be submitted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks rating and comment length.
    ///
    /// # Errors
    /// Returns the first rule the input breaks.
    pub fn validate(&self) -> Result<NewReview, ValidationError> {
        let rating = self
            .rating
            .filter(|rating| (1..=5).contains(rating))
            .ok_or(ValidationError::MissingRating)?;

        let comment = self.comment.trim();
        let len = comment.chars().count();
        if !(COMMENT_MIN_LENGTH..=COMMENT_MAX_LENGTH).contains(&len) {
            return Err(ValidationError::CommentLength {
                len,
                min: COMMENT_MIN_LENGTH,
                max: COMMENT_MAX_LENGTH,
            });
        }

        Ok(NewReview::new(comment, rating))
    }
}

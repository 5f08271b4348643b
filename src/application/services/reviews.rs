//! Review list derivations.

use crate::domain::entities::Review;

/// Upper bound of reviews rendered under an offer.
pub const MAX_REVIEWS_SHOWN: usize = 10;

/// Returns the newest reviews first, at most [`MAX_REVIEWS_SHOWN`].
///
/// Dates are ISO-8601 strings, which order lexicographically.
#[must_use]
pub fn latest_reviews(reviews: &[Review]) -> Vec<&Review> {
    let mut sorted: Vec<&Review> = reviews.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(MAX_REVIEWS_SHOWN);
    sorted
}

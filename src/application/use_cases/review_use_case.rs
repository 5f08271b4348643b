//! Review submission.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::dto::ReviewRequest;
use crate::application::store::{Dispatch, action};
use crate::domain::entities::Review;
use crate::domain::errors::ApiError;
use crate::domain::ports::OffersPort;

/// Publishes reviews from the review form.
#[derive(Clone)]
pub struct ReviewUseCase {
    offers_port: Arc<dyn OffersPort>,
}

impl ReviewUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(offers_port: Arc<dyn OffersPort>) -> Self {
        Self { offers_port }
    }

    /// Validates and posts a review, appending it to the store on success.
    ///
    /// # Errors
    /// Returns error if the form is invalid or the API rejects the review.
    pub async fn submit(
        &self,
        request: ReviewRequest,
        dispatcher: &dyn Dispatch,
    ) -> Result<Review, ApiError> {
        let new_review = request.validate()?;

        let review = self
            .offers_port
            .post_comment(&request.offer_id, &new_review)
            .await
            .map_err(|e| {
                warn!(offer_id = %request.offer_id, error = %e, "Failed to post review");
                e
            })?;

        info!(offer_id = %request.offer_id, review_id = %review.id, "Review posted");
        dispatcher.dispatch(action::post_comment(review.clone()));

        Ok(review)
    }
}

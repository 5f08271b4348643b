//! Offers data port definition.

use async_trait::async_trait;

use crate::domain::entities::{NewReview, Offer, Review};
use crate::domain::errors::ApiError;

/// Port for catalog, review and favorite data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OffersPort: Send + Sync {
    /// Fetches the full catalog.
    async fn fetch_offers(&self) -> Result<Vec<Offer>, ApiError>;

    /// Fetches one offer with its detail fields.
    async fn fetch_offer(&self, offer_id: &str) -> Result<Offer, ApiError>;

    /// Fetches offers near the given one.
    async fn fetch_nearby(&self, offer_id: &str) -> Result<Vec<Offer>, ApiError>;

    /// Fetches reviews of an offer.
    async fn fetch_comments(&self, offer_id: &str) -> Result<Vec<Review>, ApiError>;

    /// Publishes a review and returns it as stored.
    async fn post_comment(&self, offer_id: &str, review: &NewReview) -> Result<Review, ApiError>;

    /// Fetches the signed-in user's favorites.
    async fn fetch_favorites(&self) -> Result<Vec<Offer>, ApiError>;

    /// Adds or removes an offer from favorites and returns the updated offer.
    async fn set_favorite(&self, offer_id: &str, is_favorite: bool) -> Result<Offer, ApiError>;
}

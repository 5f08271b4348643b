//! Catalog, detail and favorite loading.
//!
//! Each operation brackets its request with the matching loading-status
//! actions, so the screens can show a pending state. Failures are reported
//! as data through `setLoadError` rather than returned.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::store::{Dispatch, action};
use crate::domain::AppRoute;
use crate::domain::errors::ApiError;
use crate::domain::ports::OffersPort;

/// Loads catalog data and pushes the results into the store.
#[derive(Clone)]
pub struct OffersUseCase {
    offers_port: Arc<dyn OffersPort>,
}

impl OffersUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(offers_port: Arc<dyn OffersPort>) -> Self {
        Self { offers_port }
    }

    /// Loads the full catalog.
    pub async fn fetch_offers(&self, dispatcher: &dyn Dispatch) {
        dispatcher.dispatch(action::set_offers_data_loading_status(true));

        match self.offers_port.fetch_offers().await {
            Ok(offers) => {
                info!(count = offers.len(), "Offers loaded");
                dispatcher.dispatch(action::load_offers(offers));
                dispatcher.dispatch(action::set_load_error(None));
            }
            Err(e) => {
                warn!(error = %e, "Failed to load offers");
                dispatcher.dispatch(action::set_load_error(Some(e.to_string())));
            }
        }

        dispatcher.dispatch(action::set_offers_data_loading_status(false));
    }

    /// Loads the detail of one offer.
    ///
    /// An unknown id is not a load failure: the page falls back to the
    /// not-found view on its own.
    pub async fn fetch_offer(&self, offer_id: &str, dispatcher: &dyn Dispatch) {
        dispatcher.dispatch(action::set_details_offer_data_loading_status(true));

        match self.offers_port.fetch_offer(offer_id).await {
            Ok(offer) => {
                debug!(offer_id, "Offer detail loaded");
                dispatcher.dispatch(action::load_offer(offer));
            }
            Err(ApiError::NotFound { .. }) => debug!(offer_id, "Offer does not exist"),
            Err(e) => {
                warn!(offer_id, error = %e, "Failed to load offer");
                dispatcher.dispatch(action::set_load_error(Some(e.to_string())));
            }
        }

        dispatcher.dispatch(action::set_details_offer_data_loading_status(false));
    }

    /// Loads offers near one offer; stores `None` on failure.
    pub async fn fetch_nearby(&self, offer_id: &str, dispatcher: &dyn Dispatch) {
        dispatcher.dispatch(action::set_offer_nearby_loading_status(true));

        let nearby = match self.offers_port.fetch_nearby(offer_id).await {
            Ok(nearby) => Some(nearby),
            Err(e) => {
                warn!(offer_id, error = %e, "Failed to load nearby offers");
                None
            }
        };
        dispatcher.dispatch(action::load_nearby_offers(nearby));

        dispatcher.dispatch(action::set_offer_nearby_loading_status(false));
    }

    /// Loads reviews of one offer; stores `None` on failure.
    pub async fn fetch_comments(&self, offer_id: &str, dispatcher: &dyn Dispatch) {
        dispatcher.dispatch(action::set_reviews_data_loading_status(true));

        let comments = match self.offers_port.fetch_comments(offer_id).await {
            Ok(comments) => Some(comments),
            Err(e) => {
                warn!(offer_id, error = %e, "Failed to load reviews");
                None
            }
        };
        dispatcher.dispatch(action::load_comments(comments));

        dispatcher.dispatch(action::set_reviews_data_loading_status(false));
    }

    /// Loads everything the offer page shows.
    pub async fn fetch_offer_page(&self, offer_id: &str, dispatcher: &dyn Dispatch) {
        self.fetch_offer(offer_id, dispatcher).await;
        self.fetch_nearby(offer_id, dispatcher).await;
        self.fetch_comments(offer_id, dispatcher).await;
    }

    /// Loads the signed-in user's favorites.
    pub async fn fetch_favorites(&self, dispatcher: &dyn Dispatch) {
        dispatcher.dispatch(action::set_favorites_data_loading_status(true));

        match self.offers_port.fetch_favorites().await {
            Ok(favorites) => {
                info!(count = favorites.len(), "Favorites loaded");
                dispatcher.dispatch(action::load_favorites(favorites));
            }
            Err(e) => {
                warn!(error = %e, "Failed to load favorites");
                dispatcher.dispatch(action::set_load_error(Some(e.to_string())));
            }
        }

        dispatcher.dispatch(action::set_favorites_data_loading_status(false));
    }

    /// Adds or removes a favorite. Guests are sent to the login page.
    pub async fn toggle_favorite(
        &self,
        offer_id: &str,
        is_favorite: bool,
        is_authorized: bool,
        dispatcher: &dyn Dispatch,
    ) {
        if !is_authorized {
            debug!(offer_id, "Favorite toggle requires login");
            dispatcher.dispatch(action::redirect_to_route(AppRoute::Login));
            return;
        }

        match self.offers_port.set_favorite(offer_id, is_favorite).await {
            Ok(offer) => {
                info!(offer_id, is_favorite, "Favorite updated");
                dispatcher.dispatch(action::update_offer(offer));
            }
            Err(e) if e.is_unauthorized() => {
                warn!(offer_id, "Session expired while updating favorite");
                dispatcher.dispatch(action::redirect_to_route(AppRoute::Login));
            }
            Err(e) => {
                warn!(offer_id, error = %e, "Failed to update favorite");
                dispatcher.dispatch(action::set_load_error(Some(e.to_string())));
            }
        }
    }
}

//! Store state.

use crate::domain::entities::{DEFAULT_CITY, Offer, Review, SortType, UserData};
use crate::domain::{AppRoute, AuthorizationStatus};

/// Everything the screens render from.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    pub city: String,
    pub sorting: SortType,
    pub offers: Vec<Offer>,
    pub is_offers_data_loading: bool,
    pub offer: Option<Offer>,
    pub is_offer_data_loading: bool,
    pub nearby: Option<Vec<Offer>>,
    pub is_nearby_data_loading: bool,
    pub comments: Option<Vec<Review>>,
    pub is_comments_data_loading: bool,
    pub favorites: Vec<Offer>,
    pub is_favorites_data_loading: bool,
    pub authorization_status: AuthorizationStatus,
    pub user_info: Option<UserData>,
    pub redirect: Option<AppRoute>,
    pub load_error: Option<String>,
}

impl StoreState {
    /// Returns the offer with the given id from the catalog.
    #[must_use]
    pub fn find_offer(&self, offer_id: &str) -> Option<&Offer> {
        self.offers.iter().find(|offer| offer.id == offer_id)
    }

    /// Returns whether any data request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_offers_data_loading
            || self.is_offer_data_loading
            || self.is_nearby_data_loading
            || self.is_comments_data_loading
            || self.is_favorites_data_loading
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY.to_string(),
            sorting: SortType::default(),
            offers: Vec::new(),
            is_offers_data_loading: false,
            offer: None,
            is_offer_data_loading: false,
            nearby: None,
            is_nearby_data_loading: false,
            comments: None,
            is_comments_data_loading: false,
            favorites: Vec::new(),
            is_favorites_data_loading: false,
            authorization_status: AuthorizationStatus::Unknown,
            user_info: None,
            redirect: None,
            load_error: None,
        }
    }
}

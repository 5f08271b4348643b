//! Action catalog.
//!
//! Every state transition the store accepts is an [`Action`]. The factory
//! functions below are the only intended way to build one; they are pure and
//! leave dispatching to the caller.

use crate::domain::entities::{Offer, Review, SortType, UserData};
use crate::domain::{AppRoute, AuthorizationStatus};

/// Tagged state transition request.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetActiveCity(String),
    ChangeSort(SortType),
    LoadOffers(Vec<Offer>),
    SetOffersDataLoadingStatus(bool),
    LoadOffer(Offer),
    SetDetailsOfferDataLoadingStatus(bool),
    LoadNearbyOffers(Option<Vec<Offer>>),
    SetOfferNearbyLoadingStatus(bool),
    LoadComments(Option<Vec<Review>>),
    SetReviewsDataLoadingStatus(bool),
    RequireAuthorization(AuthorizationStatus),
    SetUserInfo(Option<UserData>),
    RedirectToRoute(AppRoute),
    PostComment(Review),
    UpdateOffer(Offer),
    LoadFavorites(Vec<Offer>),
    SetFavoritesDataLoadingStatus(bool),
    SetLoadError(Option<String>),
}

impl Action {
    /// Returns the unique type tag of the action.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SetActiveCity(_) => "setActiveCity",
            Self::ChangeSort(_) => "offers/changeSort",
            Self::LoadOffers(_) => "data/loadOffers",
            Self::SetOffersDataLoadingStatus(_) => "data/setOffersDataLoadingStatus",
            Self::LoadOffer(_) => "data/loadOffer",
            Self::SetDetailsOfferDataLoadingStatus(_) => "data/setDetailsOfferDataLoadingStatus",
            Self::LoadNearbyOffers(_) => "data/loadNearbyOffers",
            Self::SetOfferNearbyLoadingStatus(_) => "data/setOfferNearbyLoadingStatus",
            Self::LoadComments(_) => "data/loadComments",
            Self::SetReviewsDataLoadingStatus(_) => "data/setReviewsDataLoadingStatus",
            Self::RequireAuthorization(_) => "user/requireAuthorization",
            Self::SetUserInfo(_) => "user/setUserInfo",
            Self::RedirectToRoute(_) => "app/redirectToRoute",
            Self::PostComment(_) => "data/postComment",
            Self::UpdateOffer(_) => "data/updateOffer",
            Self::LoadFavorites(_) => "data/loadFavorites",
            Self::SetFavoritesDataLoadingStatus(_) => "data/setFavoritesDataLoadingStatus",
            Self::SetLoadError(_) => "data/setLoadError",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind())
    }
}

/// Selects the city whose offers are listed.
#[must_use]
pub fn set_active_city(city: impl Into<String>) -> Action {
    Action::SetActiveCity(city.into())
}

/// Changes the sort order of the offers list.
#[must_use]
pub const fn change_sort(sorting: SortType) -> Action {
    Action::ChangeSort(sorting)
}

/// Replaces the catalog.
#[must_use]
pub const fn load_offers(offers: Vec<Offer>) -> Action {
    Action::LoadOffers(offers)
}

#[must_use]
pub const fn set_offers_data_loading_status(is_loading: bool) -> Action {
    Action::SetOffersDataLoadingStatus(is_loading)
}

/// Stores the detail of the currently opened offer.
#[must_use]
pub const fn load_offer(offer: Offer) -> Action {
    Action::LoadOffer(offer)
}

#[must_use]
pub const fn set_details_offer_data_loading_status(is_loading: bool) -> Action {
    Action::SetDetailsOfferDataLoadingStatus(is_loading)
}

/// Stores nearby offers; `None` when they could not be loaded.
#[must_use]
pub const fn load_nearby_offers(nearby: Option<Vec<Offer>>) -> Action {
    Action::LoadNearbyOffers(nearby)
}

#[must_use]
pub const fn set_offer_nearby_loading_status(is_loading: bool) -> Action {
    Action::SetOfferNearbyLoadingStatus(is_loading)
}

/// Stores reviews; `None` when they could not be loaded.
#[must_use]
pub const fn load_comments(comments: Option<Vec<Review>>) -> Action {
    Action::LoadComments(comments)
}

#[must_use]
pub const fn set_reviews_data_loading_status(is_loading: bool) -> Action {
    Action::SetReviewsDataLoadingStatus(is_loading)
}

#[must_use]
pub const fn require_authorization(status: AuthorizationStatus) -> Action {
    Action::RequireAuthorization(status)
}

#[must_use]
pub const fn set_user_info(user_info: Option<UserData>) -> Action {
    Action::SetUserInfo(user_info)
}

/// Requests navigation; consumed by the application loop.
#[must_use]
pub const fn redirect_to_route(route: AppRoute) -> Action {
    Action::RedirectToRoute(route)
}

/// Appends a published review.
#[must_use]
pub const fn post_comment(review: Review) -> Action {
    Action::PostComment(review)
}

/// Replaces every copy of an offer after its favorite flag changed.
#[must_use]
pub const fn update_offer(offer: Offer) -> Action {
    Action::UpdateOffer(offer)
}

#[must_use]
pub const fn load_favorites(favorites: Vec<Offer>) -> Action {
    Action::LoadFavorites(favorites)
}

#[must_use]
pub const fn set_favorites_data_loading_status(is_loading: bool) -> Action {
    Action::SetFavoritesDataLoadingStatus(is_loading)
}

/// Records the last failed load, or clears it.
#[must_use]
pub const fn set_load_error(message: Option<String>) -> Action {
    Action::SetLoadError(message)
}

//! Store reducer.

use super::action::Action;
use super::state::StoreState;
use crate::domain::entities::Offer;

/// Applies one action to the state.
pub fn reduce(state: &mut StoreState, action: Action) {
    match action {
        Action::SetActiveCity(city) => state.city = city,
        Action::ChangeSort(sorting) => state.sorting = sorting,
        Action::LoadOffers(offers) => state.offers = offers,
        Action::SetOffersDataLoadingStatus(is_loading) => state.is_offers_data_loading = is_loading,
        Action::LoadOffer(offer) => state.offer = Some(offer),
        Action::SetDetailsOfferDataLoadingStatus(is_loading) => {
            state.is_offer_data_loading = is_loading;
        }
        Action::LoadNearbyOffers(nearby) => state.nearby = nearby,
        Action::SetOfferNearbyLoadingStatus(is_loading) => state.is_nearby_data_loading = is_loading,
        Action::LoadComments(comments) => state.comments = comments,
        Action::SetReviewsDataLoadingStatus(is_loading) => {
            state.is_comments_data_loading = is_loading;
        }
        Action::RequireAuthorization(status) => state.authorization_status = status,
        Action::SetUserInfo(user_info) => state.user_info = user_info,
        Action::RedirectToRoute(route) => state.redirect = Some(route),
        Action::PostComment(review) => state.comments.get_or_insert_with(Vec::new).push(review),
        Action::UpdateOffer(offer) => update_offer(state, offer),
        Action::LoadFavorites(favorites) => state.favorites = favorites,
        Action::SetFavoritesDataLoadingStatus(is_loading) => {
            state.is_favorites_data_loading = is_loading;
        }
        Action::SetLoadError(message) => state.load_error = message,
    }
}

fn update_offer(state: &mut StoreState, updated: Offer) {
    let replace = |offer: &mut Offer| {
        if offer.id == updated.id {
            offer.is_favorite = updated.is_favorite;
        }
    };

    state.offers.iter_mut().for_each(replace);
    state.nearby.iter_mut().flatten().for_each(replace);
    if let Some(offer) = state.offer.as_mut() {
        replace(offer);
    }

    if updated.is_favorite {
        if !state.favorites.iter().any(|offer| offer.id == updated.id) {
            state.favorites.push(updated);
        }
    } else {
        state.favorites.retain(|offer| offer.id != updated.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::store::action;
    use crate::domain::entities::{Review, SortType, UserData};
    use crate::domain::{AppRoute, AuthorizationStatus};

    fn offer(id: &str) -> Offer {
        Offer {
            id: id.to_string(),
            ..Offer::default()
        }
    }

    fn reduced(actions: impl IntoIterator<Item = Action>) -> StoreState {
        let mut state = StoreState::default();
        for action in actions {
            reduce(&mut state, action);
        }
        state
    }

    #[test]
    fn test_initial_state() {
        let state = StoreState::default();
        assert_eq!(state.city, "Paris");
        assert_eq!(state.sorting, SortType::Popular);
        assert_eq!(state.authorization_status, AuthorizationStatus::Unknown);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_city_and_sort() {
        let state = reduced([
            action::set_active_city("Amsterdam"),
            action::change_sort(SortType::TopRatedFirst),
        ]);
        assert_eq!(state.city, "Amsterdam");
        assert_eq!(state.sorting, SortType::TopRatedFirst);
    }

    #[test]
    fn test_offers_replaced_wholesale() {
        let state = reduced([
            action::load_offers(vec![offer("1"), offer("2")]),
            action::load_offers(vec![offer("3")]),
        ]);
        assert_eq!(state.offers, vec![offer("3")]);
        assert!(state.find_offer("3").is_some());
        assert!(state.find_offer("1").is_none());
    }

    #[test]
    fn test_loading_flags() {
        let state = reduced([
            action::set_offers_data_loading_status(true),
            action::set_reviews_data_loading_status(true),
            action::set_reviews_data_loading_status(false),
        ]);
        assert!(state.is_offers_data_loading);
        assert!(!state.is_comments_data_loading);
        assert!(state.is_loading());
    }

    #[test]
    fn test_auth_and_user_info() {
        let user = UserData::new("Oliver", "oliver@example.com");
        let state = reduced([
            action::require_authorization(AuthorizationStatus::Auth),
            action::set_user_info(Some(user.clone())),
        ]);
        assert_eq!(state.authorization_status, AuthorizationStatus::Auth);
        assert_eq!(state.user_info, Some(user));

        let state = reduced([
            action::set_user_info(Some(UserData::default())),
            action::require_authorization(AuthorizationStatus::NoAuth),
            action::set_user_info(None),
        ]);
        assert!(state.user_info.is_none());
    }

    #[test]
    fn test_post_comment_appends() {
        let existing = Review {
            id: "1".to_string(),
            ..Review::default()
        };
        let posted = Review {
            id: "2".to_string(),
            ..Review::default()
        };

        let state = reduced([
            action::load_comments(Some(vec![existing.clone()])),
            action::post_comment(posted.clone()),
        ]);
        assert_eq!(state.comments, Some(vec![existing, posted.clone()]));

        let state = reduced([action::post_comment(posted.clone())]);
        assert_eq!(state.comments, Some(vec![posted]));
    }

    #[test]
    fn test_redirect_recorded() {
        let state = reduced([action::redirect_to_route(AppRoute::Login)]);
        assert_eq!(state.redirect, Some(AppRoute::Login));
    }

    #[test]
    fn test_update_offer_propagates_favorite_flag() {
        let state = reduced([
            action::load_offers(vec![offer("1"), offer("2")]),
            action::load_offer(offer("1")),
            action::load_nearby_offers(Some(vec![offer("1")])),
            action::update_offer(offer("1").with_favorite(true)),
        ]);

        assert!(state.offers[0].is_favorite);
        assert!(!state.offers[1].is_favorite);
        assert!(state.offer.as_ref().is_some_and(|o| o.is_favorite));
        assert!(state.nearby.as_ref().is_some_and(|n| n[0].is_favorite));
        assert_eq!(state.favorites.len(), 1);
    }

    #[test]
    fn test_update_offer_removes_favorite() {
        let state = reduced([
            action::load_favorites(vec![offer("1").with_favorite(true)]),
            action::update_offer(offer("1")),
        ]);
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn test_update_offer_does_not_duplicate_favorite() {
        let state = reduced([
            action::load_favorites(vec![offer("1").with_favorite(true)]),
            action::update_offer(offer("1").with_favorite(true)),
        ]);
        assert_eq!(state.favorites.len(), 1);
    }

    #[test]
    fn test_load_error() {
        let state = reduced([action::set_load_error(Some("offline".to_string()))]);
        assert_eq!(state.load_error.as_deref(), Some("offline"));
        let state = reduced([
            action::set_load_error(Some("offline".to_string())),
            action::set_load_error(None),
        ]);
        assert!(state.load_error.is_none());
    }
}

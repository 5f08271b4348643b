use crate::application::dto::{LoginRequest, ReviewRequest};
use crate::application::store::Action;

/// What a screen asks the application to do after a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    None,
    /// Open a path.
    Navigate(String),
    /// Apply an action to the store.
    Dispatch(Action),
    ToggleFavorite { offer_id: String, is_favorite: bool },
    SubmitLogin(LoginRequest),
    SubmitReview(ReviewRequest),
}

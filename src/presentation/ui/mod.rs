//! Screens and the application loop.

mod app;
mod favorites_screen;
mod login_screen;
mod main_screen;
mod not_found_screen;
mod offer_screen;
mod screen_action;

pub use app::App;
pub use favorites_screen::{FavoritesScreen, FavoritesScreenState};
pub use login_screen::{LoginScreen, LoginState, LoginView};
pub use main_screen::{MainScreen, MainScreenState};
pub use not_found_screen::NotFoundScreen;
pub use offer_screen::{OfferFocus, OfferScreen, OfferScreenState, resolve_offer};
pub use screen_action::ScreenAction;

//! Domain layer with core business entities and port definitions.

/// Authorization status definitions.
pub mod authorization;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Navigable application routes.
pub mod navigation;
/// Port definitions.
pub mod ports;
/// Pure domain services.
pub mod services;

pub use authorization::AuthorizationStatus;
pub use entities::{AuthToken, Offer, Review, UserData};
pub use errors::ApiError;
pub use navigation::AppRoute;
pub use ports::{AuthPort, OffersPort, TokenStoragePort};

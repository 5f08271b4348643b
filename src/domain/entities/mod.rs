//! Domain entity definitions.

mod city;
mod offer;
mod review;
mod sorting;
mod token;
mod user;

pub use city::{CITIES, City, DEFAULT_CITY, Location};
pub use offer::{Host, Offer, OfferType};
pub use review::{NewReview, Review, ReviewUser};
pub use sorting::SortType;
pub use token::AuthToken;
pub use user::{AuthInfo, Credentials, UserData};

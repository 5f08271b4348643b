//! Application services.

pub mod description;
pub mod offers;
pub mod reviews;

pub use description::description_paragraphs;
pub use offers::{NEARBY_OFFERS_COUNT, favorites_by_city, nearby_offers, offers_in_city};
pub use reviews::{MAX_REVIEWS_SHOWN, latest_reviews};

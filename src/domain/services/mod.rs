//! Pure domain services.

mod rating;

pub use rating::{MAX_RATING, calc_rating, rating_percent};

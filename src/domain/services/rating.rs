//! Star rating width calculation.

/// Highest rating an offer or review can have.
pub const MAX_RATING: f64 = 5.0;

/// Returns the filled share of a five-star bar, rounded to whole stars.
#[must_use]
pub fn rating_percent(rating: f64) -> u32 {
    if rating.is_nan() {
        return 0;
    }
    let stars = rating.clamp(0.0, MAX_RATING).round();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (stars * 100.0 / MAX_RATING) as u32;
    percent
}

/// Formats a rating as a star bar width, e.g. `4.0` as `"80%"`.
#[must_use]
pub fn calc_rating(rating: f64) -> String {
    format!("{}%", rating_percent(rating))
}

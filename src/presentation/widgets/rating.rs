use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::domain::services::rating_percent;

const STARS: usize = 5;

/// Renders a rating as five stars filled in proportion to `calc_rating`.
#[must_use]
pub fn rating_stars(rating: f64) -> Span<'static> {
    let filled = rating_percent(rating) as usize * STARS / 100;
    let stars = format!("{}{}", "★".repeat(filled), "☆".repeat(STARS - filled));
    Span::styled(stars, Style::default().fg(Color::LightYellow))
}

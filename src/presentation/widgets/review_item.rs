//! Single review entry.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::rating::rating_stars;
use crate::domain::entities::Review;

/// Builds the lines of one review: author, stars, comment and date.
#[must_use]
pub fn review_lines(review: &Review) -> Vec<Line<'static>> {
    let mut author = vec![Span::styled(
        review.user.name.clone(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    if review.user.is_pro {
        author.push(Span::styled(" Pro", Style::default().fg(Color::LightYellow)));
    }

    vec![
        Line::from(author),
        Line::from(vec![rating_stars(review.rating)]),
        Line::raw(review.comment.clone()),
        Line::styled(review.formatted_date(), Style::default().fg(Color::DarkGray)),
        Line::raw(""),
    ]
}

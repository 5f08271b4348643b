//! City tabs.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Tabs as TabsWidget, Widget},
};

use crate::application::store::{Action, action};
use crate::domain::entities::CITIES;

/// Row of city tabs with the active one highlighted.
pub struct Tabs<'a> {
    active_city: &'a str,
}

impl<'a> Tabs<'a> {
    #[must_use]
    pub const fn new(active_city: &'a str) -> Self {
        Self { active_city }
    }

    /// Returns the action selecting the tab at `index`.
    #[must_use]
    pub fn select(index: usize) -> Option<Action> {
        CITIES
            .get(index)
            .map(|city| action::set_active_city((*city).to_string()))
    }

    /// Returns the action selecting the tab `step` positions away, wrapping.
    #[must_use]
    pub fn select_relative(active_city: &str, step: isize) -> Action {
        let current = CITIES.iter().position(|city| *city == active_city).unwrap_or(0);
        let len = CITIES.len().cast_signed();
        let next = (current.cast_signed() + step).rem_euclid(len).cast_unsigned();
        action::set_active_city(CITIES[next].to_string())
    }
}

impl Widget for Tabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let selected = CITIES.iter().position(|city| *city == self.active_city);

        TabsWidget::new(CITIES)
            .select(selected)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("│")
            .render(area, buf);
    }
}

//! Sort order selector.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::domain::entities::SortType;

/// Drop-down list of sort orders.
pub struct SortOptions {
    active: SortType,
}

impl SortOptions {
    #[must_use]
    pub const fn new(active: SortType) -> Self {
        Self { active }
    }

    /// Height needed to show every option.
    #[must_use]
    pub const fn height() -> u16 {
        SortType::ALL.len() as u16 + 2
    }
}

impl StatefulWidget for SortOptions {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        Clear.render(area, buf);

        let items: Vec<ListItem> = SortType::ALL
            .iter()
            .map(|sort| {
                let style = if *sort == self.active {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(sort.label()).style(style)
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Sort by "),
            )
            .highlight_symbol("› ")
            .highlight_style(Style::default().bg(Color::Rgb(40, 40, 40)));

        StatefulWidget::render(list, area, buf, state);
    }
}

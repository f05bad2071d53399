//! Header bar with the event title and tabs

use awaazein_app::state::Tab;
use chrono::{DateTime, Local, Utc};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};

use crate::theme::styles;

/// Event title, start time and the tab bar
pub struct MainHeader<'a> {
    event_name: &'a str,
    event_start: DateTime<Utc>,
    selected: Tab,
}

impl<'a> MainHeader<'a> {
    pub fn new(event_name: &'a str, event_start: DateTime<Utc>, selected: Tab) -> Self {
        Self {
            event_name,
            event_start,
            selected,
        }
    }

    fn tab_titles() -> Vec<Line<'static>> {
        Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!(" {} {} ", i + 1, tab.title())))
            .collect()
    }

    fn selected_index(&self) -> usize {
        Tab::ALL
            .iter()
            .position(|tab| *tab == self.selected)
            .unwrap_or(0)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title_area = Rect { height: 1, ..inner };
        Paragraph::new(Line::from(vec![
            Span::styled("♪ ", styles::accent()),
            Span::styled(self.event_name.to_string(), styles::accent_bold()),
        ]))
        .render(title_area, buf);

        let when = self
            .event_start
            .with_timezone(&Local)
            .format("%a %b %-d · %-I:%M %p")
            .to_string();
        Paragraph::new(Span::styled(when, styles::text_secondary()))
            .alignment(Alignment::Right)
            .render(title_area, buf);

        if inner.height < 2 {
            return;
        }

        let tabs_area = Rect {
            y: inner.y + 1,
            height: 1,
            ..inner
        };
        Tabs::new(Self::tab_titles())
            .select(self.selected_index())
            .style(styles::text_muted())
            .highlight_style(styles::highlighted())
            .divider("│")
            .render(tabs_area, buf);
    }
}

//! Livestream tab

use awaazein_app::state::LivestreamView;
use awaazein_core::{embed_url, watch_url};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

/// Current stream, or a placeholder when none is set
pub struct LivestreamPanel<'a> {
    view: &'a LivestreamView,
}

impl<'a> LivestreamPanel<'a> {
    pub fn new(view: &'a LivestreamView) -> Self {
        Self { view }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        match self.view {
            LivestreamView::Live(id) => live_lines(id),
            LivestreamView::NotConfigured => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No livestream available",
                    styles::accent_bold(),
                )),
                Line::from(Span::styled(
                    "Check back when the show starts",
                    styles::text_muted(),
                )),
            ],
            LivestreamView::Unavailable(reason) => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Livestream setting could not be read",
                    styles::status_red(),
                )),
                Line::from(Span::styled(reason.as_str(), styles::text_muted())),
            ],
        }
    }
}

fn live_lines(id: &str) -> Vec<Line<'static>> {
    let (watch, embed) = match (watch_url(id), embed_url(id)) {
        (Ok(watch), Ok(embed)) => (watch, embed),
        (Err(e), _) | (_, Err(e)) => {
            return vec![Line::from(Span::styled(
                e.user_message(),
                styles::status_red(),
            ))]
        }
    };

    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("● ", styles::status_red()),
            Span::styled("LIVE", styles::accent_bold()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Video  ", styles::text_muted()),
            Span::styled(id.to_string(), styles::text_primary()),
        ]),
        Line::from(vec![
            Span::styled("Watch  ", styles::text_muted()),
            Span::styled(watch.to_string(), styles::accent()),
        ]),
        Line::from(vec![
            Span::styled("Embed  ", styles::text_muted()),
            Span::styled(embed.to_string(), styles::text_secondary()),
        ]),
    ]
}

impl Widget for LivestreamPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(Span::styled(" Live ", styles::accent_bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(view: &LivestreamView) -> TestTerminal {
        let mut term = TestTerminal::new();
        term.render_widget(LivestreamPanel::new(view), Rect::new(0, 0, 80, 12));
        term
    }

    #[test]
    fn test_live_shows_urls() {
        let term = render(&LivestreamView::Live("abc123".to_string()));
        assert!(term.buffer_contains("LIVE"));
        assert!(term.buffer_contains("https://www.youtube.com/watch?v=abc123"));
        assert!(term.buffer_contains("https://www.youtube.com/embed/abc123"));
    }

    #[test]
    fn test_not_configured_placeholder() {
        let term = render(&LivestreamView::NotConfigured);
        assert!(term.buffer_contains("No livestream available"));
        assert!(!term.buffer_contains("LIVE"));
    }

    #[test]
    fn test_unavailable_shows_reason() {
        let term = render(&LivestreamView::Unavailable("corrupt store".to_string()));
        assert!(term.buffer_contains("could not be read"));
        assert!(term.buffer_contains("corrupt store"));
    }
}

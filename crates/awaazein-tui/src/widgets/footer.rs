//! Key hint row

use awaazein_app::state::UiMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

// The admin shortcut is deliberately absent
const NORMAL_HINTS: &[(&str, &str)] = &[
    ("Tab", "switch"),
    ("1", "countdown"),
    ("2", "live"),
    ("r", "refresh"),
    ("q", "quit"),
];

const DIALOG_HINTS: &[(&str, &str)] = &[
    ("Enter", "submit"),
    ("Esc", "close"),
    ("Ctrl+U", "clear"),
    ("Ctrl+L", "logout"),
];

/// Bottom row listing the keys for the current mode
pub struct KeyHints {
    mode: UiMode,
}

impl KeyHints {
    pub fn new(mode: UiMode) -> Self {
        Self { mode }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints = match self.mode {
            UiMode::Normal => NORMAL_HINTS,
            UiMode::AdminDialog => DIALOG_HINTS,
        };

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}"), styles::text_muted()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_normal_hints_hide_admin_shortcut() {
        let mut term = TestTerminal::new();
        term.render_widget(KeyHints::new(UiMode::Normal), Rect::new(0, 0, 80, 1));
        assert!(term.buffer_contains("q quit"));
        assert!(!term.buffer_contains("Ctrl+A"));
        assert!(!term.buffer_contains("admin"));
    }

    #[test]
    fn test_dialog_hints() {
        let mut term = TestTerminal::new();
        term.render_widget(KeyHints::new(UiMode::AdminDialog), Rect::new(0, 0, 80, 1));
        assert!(term.buffer_contains("Esc close"));
        assert!(term.buffer_contains("Ctrl+L logout"));
    }
}

//! Hidden admin dialog

use awaazein_app::state::{AdminDialogState, AdminStage};
use chrono::{DateTime, Utc};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use super::modal_overlay;
use crate::theme::styles;

const DIALOG_WIDTH: u16 = 64;
const DIALOG_HEIGHT: u16 = 10;

pub const SUCCESS_MESSAGE: &str = "Livestream Link Updated Successfully";

/// Login form, or link form once authenticated
pub struct AdminDialog<'a> {
    stage: AdminStage,
    dialog: &'a AdminDialogState,
    now: DateTime<Utc>,
}

impl<'a> AdminDialog<'a> {
    pub fn new(stage: AdminStage, dialog: &'a AdminDialogState, now: DateTime<Utc>) -> Self {
        Self { stage, dialog, now }
    }

    /// Input line; passwords are masked, long links show their tail
    fn input_line(&self, width: usize) -> Line<'static> {
        let (label, value) = match self.stage {
            AdminStage::Login => (
                "Password ",
                "•".repeat(self.dialog.input.chars().count()),
            ),
            AdminStage::LinkEntry => ("Link     ", self.dialog.input.clone()),
        };

        let room = width.saturating_sub(label.len() + 1);
        let count = value.chars().count();
        let shown: String = value.chars().skip(count.saturating_sub(room)).collect();

        Line::from(vec![
            Span::styled(label, styles::text_muted()),
            Span::styled(shown, styles::text_primary()),
            Span::styled("▏", styles::accent()),
        ])
    }

    fn status_line(&self) -> Line<'static> {
        if let Some(error) = &self.dialog.error {
            Line::from(Span::styled(error.clone(), styles::status_red()))
        } else if self.dialog.show_success(self.now) {
            Line::from(Span::styled(SUCCESS_MESSAGE, styles::status_green()))
        } else {
            Line::from("")
        }
    }
}

impl Widget for AdminDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let popup = modal_overlay::centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        Clear.render(popup, buf);

        let block = styles::modal_block(" Admin ");
        let inner = block.inner(popup);
        block.render(popup, buf);

        let prompt = match self.stage {
            AdminStage::Login => "Enter the admin password",
            AdminStage::LinkEntry => "Paste a YouTube watch, youtu.be or embed link",
        };
        let hints = match self.stage {
            AdminStage::Login => "Enter log in   Esc close",
            AdminStage::LinkEntry => "Enter update   Ctrl+L log out   Esc close",
        };

        let text_area = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };

        let lines = vec![
            Line::from(Span::styled(prompt, styles::text_secondary())),
            Line::from(""),
            self.input_line(text_area.width as usize),
            Line::from(""),
            self.status_line(),
            Line::from(""),
            Line::from(Span::styled(hints, styles::text_muted())),
        ];

        Paragraph::new(lines).render(text_area, buf);
    }
}

//! Phase heading and the four countdown cards

use awaazein_core::{CountdownParts, SchedulePhase};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const CARD_WIDTH: u16 = 12;
const CARD_HEIGHT: u16 = 4;

/// Countdown tab top panel
pub struct CountdownPanel<'a> {
    phase: &'a SchedulePhase,
    event_name: &'a str,
}

impl<'a> CountdownPanel<'a> {
    pub fn new(phase: &'a SchedulePhase, event_name: &'a str) -> Self {
        Self { phase, event_name }
    }

    fn caption(&self) -> &'static str {
        match self.phase {
            SchedulePhase::CountingDown { .. } => "Doors open in",
            SchedulePhase::PreShow { .. } => "First team takes the stage in",
            SchedulePhase::Performing { .. } => "Time left in this set",
            SchedulePhase::Complete => "Thank you for celebrating with us",
        }
    }
}

impl Widget for CountdownPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [heading_area, caption_area, cards_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        Paragraph::new(Span::styled(
            self.phase.heading(self.event_name),
            styles::accent_bold(),
        ))
        .alignment(Alignment::Center)
        .render(heading_area, buf);

        Paragraph::new(Span::styled(self.caption(), styles::text_secondary()))
            .alignment(Alignment::Center)
            .render(caption_area, buf);

        if let Some(parts) = self.phase.countdown_parts() {
            render_cards(parts, cards_area, buf);
        }
    }
}

fn render_cards(parts: CountdownParts, area: Rect, buf: &mut Buffer) {
    if area.height < CARD_HEIGHT {
        // Not enough room for cards: one compact line
        let text = format!(
            "{}d {:02}h {:02}m {:02}s",
            parts.days, parts.hours, parts.minutes, parts.seconds
        );
        Paragraph::new(Span::styled(text, styles::text_primary()))
            .alignment(Alignment::Center)
            .render(area, buf);
        return;
    }

    let cards = [
        (parts.days, "DAYS"),
        (parts.hours, "HOURS"),
        (parts.minutes, "MINS"),
        (parts.seconds, "SECS"),
    ];

    let row = Rect {
        height: CARD_HEIGHT,
        ..area
    };
    let slots = Layout::horizontal([Constraint::Length(CARD_WIDTH); 4])
        .flex(Flex::Center)
        .spacing(2)
        .split(row);

    for ((value, label), slot) in cards.into_iter().zip(slots.iter()) {
        let block = styles::glass_block(false);
        let inner = block.inner(*slot);
        block.render(*slot, buf);

        Paragraph::new(vec![
            Line::from(Span::styled(format!("{value:02}"), styles::accent_bold())),
            Line::from(Span::styled(label, styles::text_muted())),
        ])
        .alignment(Alignment::Center)
        .render(inner, buf);
    }
}

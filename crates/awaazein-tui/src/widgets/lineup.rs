//! Run-of-show list with the current slot highlighted

use awaazein_core::{PhaseKind, ScheduleConfig};
use chrono::{DateTime, Local, Utc};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Pre-show row followed by one row per performer
pub struct Lineup<'a> {
    schedule: &'a ScheduleConfig,
    current: PhaseKind,
}

impl<'a> Lineup<'a> {
    pub fn new(schedule: &'a ScheduleConfig, current: PhaseKind) -> Self {
        Self { schedule, current }
    }

    /// Row index of the active phase, if it has a row
    fn current_row(&self) -> Option<usize> {
        match self.current {
            PhaseKind::PreShow => Some(0),
            PhaseKind::Performing(i) => Some(i + 1),
            PhaseKind::CountingDown | PhaseKind::Complete => None,
        }
    }

    fn row_kinds(&self) -> impl Iterator<Item = PhaseKind> + '_ {
        std::iter::once(PhaseKind::PreShow)
            .chain((0..self.schedule.performer_names().len()).map(PhaseKind::Performing))
    }

    fn rows(&self) -> Vec<Line<'a>> {
        let mut rows = vec![(self.schedule.event_start(), "Pre-Show")];
        rows.extend(
            self.schedule
                .slots()
                .into_iter()
                .map(|slot| (slot.start, slot.name)),
        );

        rows.into_iter()
            .zip(self.row_kinds())
            .map(|((start, name), kind)| {
                let (marker, style) = if kind == self.current {
                    ("▶ ", styles::highlighted())
                } else if kind < self.current {
                    ("  ", styles::text_muted())
                } else {
                    ("  ", styles::text_primary())
                };

                Line::from(vec![
                    Span::styled(marker, styles::accent()),
                    Span::styled(format_time(start), styles::text_secondary()),
                    Span::raw("  "),
                    Span::styled(name, style),
                ])
            })
            .collect()
    }
}

fn format_time(at: DateTime<Utc>) -> String {
    format!("{:>8}", at.with_timezone(&Local).format("%-I:%M %p"))
}

impl Widget for Lineup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Span::styled(" Lineup ", styles::accent_bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        // Keep the active row in view
        let visible = inner.height as usize;
        let offset = self
            .current_row()
            .map(|row| row.saturating_sub(visible / 2))
            .unwrap_or(0);

        Paragraph::new(self.rows())
            .scroll((offset as u16, 0))
            .render(inner, buf);
    }
}

//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header rows: top border + title row + tabs row + bottom border
pub const HEADER_HEIGHT: u16 = 4;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Event title and tabs
    pub header: Rect,

    /// Active tab content
    pub body: Rect,

    /// Key hints
    pub footer: Rect,
}

/// Split the screen into header, body and footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Countdown tab: phase panel on top, lineup below
pub fn split_countdown(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::vertical([Constraint::Length(9), Constraint::Min(3)]).split(body);
    (chunks[0], chunks[1])
}

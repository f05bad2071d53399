//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use awaazein_app::state::{AppState, Tab, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(
            state.event_name(),
            state.schedule.event_start(),
            state.tab,
        ),
        areas.header,
    );

    match state.tab {
        Tab::Countdown => {
            let (phase_area, lineup_area) = layout::split_countdown(areas.body);
            frame.render_widget(
                widgets::CountdownPanel::new(&state.phase, state.event_name()),
                phase_area,
            );
            frame.render_widget(
                widgets::Lineup::new(&state.schedule, state.phase.kind()),
                lineup_area,
            );
        }
        Tab::Livestream => {
            frame.render_widget(widgets::LivestreamPanel::new(&state.livestream), areas.body);
        }
    }

    frame.render_widget(widgets::KeyHints::new(state.ui_mode), areas.footer);

    if state.ui_mode == UiMode::AdminDialog {
        frame.render_widget(
            widgets::AdminDialog::new(state.admin_stage(), &state.admin_dialog, state.now),
            area,
        );
    }
}

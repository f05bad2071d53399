//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, Tab, UiMode};

use super::{admin, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick(now) => {
            state.tick(now);
            UpdateResult::none()
        }

        Message::LivestreamUpdated => {
            state.refresh_livestream();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SwitchTab(tab) => {
            switch_tab(state, tab);
            UpdateResult::none()
        }
        Message::NextTab => {
            switch_tab(state, state.tab.next());
            UpdateResult::none()
        }
        Message::PreviousTab => {
            switch_tab(state, state.tab.previous());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Admin dialog
        // ─────────────────────────────────────────────────────────
        Message::OpenAdmin => {
            state.open_admin_dialog();
            UpdateResult::none()
        }
        Message::CloseAdmin => {
            state.close_admin_dialog();
            UpdateResult::none()
        }
        Message::AdminInput(c) => admin::handle_input(state, c),
        Message::AdminBackspace => admin::handle_backspace(state),
        Message::AdminClearInput => admin::handle_clear(state),
        Message::AdminSubmit => admin::handle_submit(state),
        Message::AdminLogout => admin::handle_logout(state),
    }
}

fn switch_tab(state: &mut AppState, tab: Tab) {
    if state.ui_mode != UiMode::Normal {
        return;
    }
    state.tab = tab;
    // Another process may have changed the setting
    if tab == Tab::Livestream {
        state.refresh_livestream();
    }
}

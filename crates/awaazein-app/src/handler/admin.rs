//! Admin dialog handlers

use awaazein_core::prelude::*;

use crate::state::{AdminStage, AppState, UiMode};

use super::UpdateResult;

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    if state.ui_mode == UiMode::AdminDialog {
        state.admin_dialog.input.push(c);
    }
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    state.admin_dialog.input.pop();
    UpdateResult::none()
}

pub fn handle_clear(state: &mut AppState) -> UpdateResult {
    state.admin_dialog.clear_input();
    UpdateResult::none()
}

/// Enter in the dialog: log in, or submit a livestream link
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.ui_mode != UiMode::AdminDialog {
        return UpdateResult::none();
    }

    match state.admin_stage() {
        AdminStage::Login => {
            let password = std::mem::take(&mut state.admin_dialog.input);
            if state.admin.authenticate(&password) {
                state.admin_dialog.error = None;
            } else {
                state.admin_dialog.error = Some(Error::InvalidCredentials.user_message());
            }
            UpdateResult::none()
        }
        AdminStage::LinkEntry => {
            if state.admin_dialog.input.trim().is_empty() {
                return UpdateResult::none();
            }

            match state.admin.update_livestream(&state.admin_dialog.input) {
                Ok(video_id) => {
                    info!("Admin set livestream to {}", video_id);
                    state.admin_dialog.clear_input();
                    state.admin_dialog.error = None;
                    state.flash_success();
                    state.refresh_livestream();
                }
                Err(e) => {
                    warn!("Livestream update rejected: {}", e);
                    state.admin_dialog.error = Some(e.user_message());
                    state.admin_dialog.success_until = None;
                }
            }
            UpdateResult::none()
        }
    }
}

pub fn handle_logout(state: &mut AppState) -> UpdateResult {
    state.admin.logout();
    state.admin_dialog.reset();
    UpdateResult::none()
}

//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Tab, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(key),
        UiMode::AdminDialog => handle_key_admin_dialog(key),
    }
}

/// Handle key events in normal mode
fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Tab => Some(Message::NextTab),
        InputKey::BackTab => Some(Message::PreviousTab),
        InputKey::Char('1') => Some(Message::SwitchTab(Tab::Countdown)),
        InputKey::Char('2') => Some(Message::SwitchTab(Tab::Livestream)),

        // Not listed in the key hints
        InputKey::CharCtrl('a') => Some(Message::OpenAdmin),

        InputKey::Char('r') => Some(Message::LivestreamUpdated),

        _ => None,
    }
}

/// Handle key events while the admin dialog captures text
fn handle_key_admin_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseAdmin),
        InputKey::Enter => Some(Message::AdminSubmit),
        InputKey::Backspace => Some(Message::AdminBackspace),
        InputKey::CharCtrl('u') => Some(Message::AdminClearInput),
        InputKey::CharCtrl('l') => Some(Message::AdminLogout),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char(c) => Some(Message::AdminInput(c)),
        _ => None,
    }
}

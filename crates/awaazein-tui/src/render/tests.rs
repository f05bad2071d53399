//! Full-screen rendering tests

use std::sync::Arc;

use awaazein_app::config::Settings;
use awaazein_app::state::{AppState, Tab};
use awaazein_app::{update, Message, MemoryStore, SecureCredentialStore};
use chrono::Duration;

use super::view;
use crate::test_utils::TestTerminal;

const SECRET: &str = "open-sesame";

fn test_state() -> AppState {
    let settings = Settings::default();
    let schedule = settings.schedule().unwrap();
    let store = SecureCredentialStore::new(MemoryStore::new());
    store.set_admin_secret(SECRET).unwrap();
    let now = schedule.event_start() - Duration::days(1);
    AppState::new(settings, schedule, Arc::new(store), now)
}

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_countdown_tab_renders() {
    let state = test_state();
    let term = draw(&state);

    assert!(term.buffer_contains("Countdown to Awaazein"));
    assert!(term.buffer_contains("DAYS"));
    assert!(term.buffer_contains("Lineup"));
    assert!(term.buffer_contains("q quit"));
}

#[test]
fn test_performing_phase_highlights_team() {
    let mut state = test_state();
    let start = state.schedule.event_start();
    update(&mut state, Message::Tick(start + Duration::minutes(18 + 13 + 1)));

    let term = draw(&state);
    assert!(term.buffer_contains("Now Performing: UMD Anokha"));
    assert!(term.buffer_contains("▶"));
}

#[test]
fn test_livestream_tab_placeholder() {
    let mut state = test_state();
    update(&mut state, Message::SwitchTab(Tab::Livestream));

    let term = draw(&state);
    assert!(term.buffer_contains("No livestream available"));
    assert!(!term.buffer_contains("Lineup"));
}

#[test]
fn test_admin_dialog_overlays_livestream() {
    let mut state = test_state();
    update(&mut state, Message::OpenAdmin);

    let term = draw(&state);
    assert!(term.buffer_contains("Enter the admin password"));
    assert!(term.buffer_contains("Esc close"));
}

#[test]
fn test_updated_link_renders_after_submit() {
    let mut state = test_state();
    update(&mut state, Message::OpenAdmin);
    for c in SECRET.chars() {
        update(&mut state, Message::AdminInput(c));
    }
    update(&mut state, Message::AdminSubmit);
    for c in "https://youtu.be/live42".chars() {
        update(&mut state, Message::AdminInput(c));
    }
    update(&mut state, Message::AdminSubmit);

    let term = draw(&state);
    assert!(term.buffer_contains("Livestream Link Updated Successfully"));

    update(&mut state, Message::CloseAdmin);
    let term = draw(&state);
    assert!(term.buffer_contains("watch?v=live42"));
}

#[test]
fn test_complete_event() {
    let mut state = test_state();
    let end = state.schedule.end();
    update(&mut state, Message::Tick(end));

    let term = draw(&state);
    assert!(term.buffer_contains("Event Complete"));
    assert!(!term.buffer_contains("DAYS"));
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let state = test_state();
    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &state));
}

//! Headless mode runner - main event loop without TUI

use std::sync::Arc;
use std::time::Duration;

use awaazein_app::config::Settings;
use awaazein_app::message::Message;
use awaazein_app::state::AppState;
use awaazein_app::{signals, spawn, update, SecureCredentialStore};
use awaazein_core::prelude::*;
use awaazein_core::{PhaseKind, ScheduleConfig};
use chrono::Utc;
use tokio::sync::mpsc;

use super::HeadlessEvent;

/// Run in headless mode: emit phase transitions as NDJSON until the event
/// completes or a shutdown signal arrives
pub async fn run_headless(
    settings: Settings,
    schedule: ScheduleConfig,
    store: Arc<SecureCredentialStore>,
) -> Result<()> {
    info!("Awaazein starting in HEADLESS mode");

    let tick = Duration::from_millis(settings.ui.tick_ms.max(100));
    let mut state = AppState::new(settings, schedule, store.clone(), Utc::now());

    HeadlessEvent::started(
        state.event_name(),
        state.schedule.event_start(),
        state.schedule.performer_names().len(),
    )
    .emit();
    HeadlessEvent::phase(&state.phase, state.event_name()).emit();

    if state.phase.is_complete() {
        HeadlessEvent::stopped("complete").emit();
        return Ok(());
    }

    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());
    let ticker = spawn::spawn_ticker(msg_tx.clone(), tick);
    let listener = spawn::spawn_store_listener(store, msg_tx);

    let mut seen = Seen::capture(&state);
    let reason = loop {
        let Some(msg) = msg_rx.recv().await else {
            break "channel_closed";
        };

        for event in process(&mut state, msg, &mut seen) {
            event.emit();
        }

        if state.should_quit() {
            break "signal";
        }
        if state.phase.is_complete() {
            break "complete";
        }
    };

    ticker.abort();
    listener.abort();

    HeadlessEvent::stopped(reason).emit();
    info!("Headless mode exiting: {}", reason);
    Ok(())
}

/// Last phase and livestream reported on stdout
#[derive(Debug, Clone, PartialEq, Eq)]
struct Seen {
    kind: PhaseKind,
    livestream: Option<String>,
}

impl Seen {
    fn capture(state: &AppState) -> Self {
        let livestream = state.admin.store().get_livestream_id().unwrap_or_else(|e| {
            warn!("Could not read livestream at startup: {}", e);
            None
        });
        Self {
            kind: state.phase.kind(),
            livestream,
        }
    }
}

/// Apply `msg` and collect the events it produces.
///
/// The store is re-read on every tick as well as on in-process notifications,
/// since a write from another process (`awaazein admin set-livestream`)
/// broadcasts nothing here.
fn process(state: &mut AppState, msg: Message, seen: &mut Seen) -> Vec<HeadlessEvent> {
    let mut events = Vec::new();
    let notified = matches!(msg, Message::LivestreamUpdated);
    let check_store = notified || matches!(msg, Message::Tick(_));

    let mut next = Some(msg);
    while let Some(m) = next {
        next = update(state, m).message;
    }

    let kind = state.phase.kind();
    if kind != seen.kind {
        seen.kind = kind;
        events.push(HeadlessEvent::phase(&state.phase, state.event_name()));
    }

    if check_store {
        match state.admin.store().get_livestream_id() {
            Ok(id) if id != seen.livestream => {
                seen.livestream = id.clone();
                events.push(HeadlessEvent::livestream_updated(id));
            }
            Ok(_) => {}
            Err(e) if notified => {
                events.push(HeadlessEvent::error(e.to_string(), e.is_fatal()));
            }
            Err(e) => debug!("Livestream re-read failed: {}", e),
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use awaazein_app::{FileStore, MemoryStore};
    use chrono::Duration as ChronoDuration;

    fn state_with(store: SecureCredentialStore) -> AppState {
        let settings = Settings::default();
        let schedule = settings.schedule().unwrap();
        store.set_admin_secret("pw").unwrap();
        let now = schedule.event_start() - ChronoDuration::seconds(2);
        AppState::new(settings, schedule, Arc::new(store), now)
    }

    fn test_state() -> AppState {
        state_with(SecureCredentialStore::new(MemoryStore::new()))
    }

    #[test]
    fn test_emits_only_on_transition() {
        let mut state = test_state();
        let mut seen = Seen::capture(&state);
        let start = state.schedule.event_start();

        let events = process(
            &mut state,
            Message::Tick(start - ChronoDuration::seconds(1)),
            &mut seen,
        );
        assert!(events.is_empty());

        let events = process(&mut state, Message::Tick(start), &mut seen);
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], HeadlessEvent::Phase { phase, .. } if phase == "pre_show"));
        assert_eq!(seen.kind, PhaseKind::PreShow);

        let events = process(
            &mut state,
            Message::Tick(start + ChronoDuration::seconds(5)),
            &mut seen,
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_livestream_update_reports_id() {
        let mut state = test_state();
        let mut seen = Seen::capture(&state);
        let store = state.admin.store().clone();
        let token = store.begin_session("pw").unwrap();
        store.set_livestream_id(&token, "abc").unwrap();

        let events = process(&mut state, Message::LivestreamUpdated, &mut seen);
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            HeadlessEvent::LivestreamUpdated { video_id: Some(id), .. } if id == "abc"
        ));
    }

    #[test]
    fn test_quit_message_requests_quit() {
        let mut state = test_state();
        let mut seen = Seen::capture(&state);
        let events = process(&mut state, Message::Quit, &mut seen);
        assert!(events.is_empty());
        assert!(state.should_quit());
    }

    #[test]
    fn test_tick_picks_up_write_from_another_process() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("store.json");

        let mut state = state_with(SecureCredentialStore::new(FileStore::new(&path)));
        let mut seen = Seen::capture(&state);
        let start = state.schedule.event_start();
        assert_eq!(seen.livestream, None);

        // Separate store instance on the same file, as the admin CLI would open
        let other = SecureCredentialStore::new(FileStore::new(&path));
        let token = other.begin_session("pw").unwrap();
        other.set_livestream_id(&token, "fromcli").unwrap();

        let events = process(
            &mut state,
            Message::Tick(start - ChronoDuration::seconds(1)),
            &mut seen,
        );
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            HeadlessEvent::LivestreamUpdated { video_id: Some(id), .. } if id == "fromcli"
        ));

        // Unchanged value on the next tick is not reported again
        let events = process(
            &mut state,
            Message::Tick(start - ChronoDuration::milliseconds(500)),
            &mut seen,
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_unreadable_store_reports_error_on_notification_only() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("store.json");

        let mut state = state_with(SecureCredentialStore::new(FileStore::new(&path)));
        let mut seen = Seen::capture(&state);
        let start = state.schedule.event_start();
        std::fs::write(&path, "{ not json").unwrap();

        let events = process(
            &mut state,
            Message::Tick(start - ChronoDuration::seconds(1)),
            &mut seen,
        );
        assert!(events.is_empty());

        let events = process(&mut state, Message::LivestreamUpdated, &mut seen);
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            HeadlessEvent::Error { fatal: false, message, .. } if message.contains("corrupt store")
        ));
    }
}

//! Main TUI runner - entry point and event loop

use std::sync::Arc;
use std::time::Duration;

use awaazein_app::config::Settings;
use awaazein_app::message::Message;
use awaazein_app::state::AppState;
use awaazein_app::{signals, spawn, SecureCredentialStore};
use awaazein_core::prelude::*;
use awaazein_core::ScheduleConfig;
use chrono::Utc;
use tokio::sync::mpsc;

use crate::{event, process, render, terminal};

/// Lower bound on the clock tick; anything faster only burns CPU
const MIN_TICK_MS: u64 = 100;

/// Run the TUI until the user quits or a shutdown signal arrives
pub async fn run(
    settings: Settings,
    schedule: ScheduleConfig,
    store: Arc<SecureCredentialStore>,
) -> Result<()> {
    terminal::install_panic_hook();

    let tick = Duration::from_millis(settings.ui.tick_ms.max(MIN_TICK_MS));
    let mut state = AppState::new(settings, schedule, store.clone(), Utc::now());
    info!("Starting TUI, phase: {}", state.phase.kind().as_str());

    // Unified message channel for signals, the clock and store events
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());
    let ticker = spawn::spawn_ticker(msg_tx.clone(), tick);
    let listener = spawn::spawn_store_listener(store, msg_tx);

    let mut term = ratatui::init();
    let result = run_loop(&mut term, &mut state, msg_rx);
    ratatui::restore();

    ticker.abort();
    listener.abort();

    info!("TUI stopped");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (ticks, store events, signals)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process::process_message(state, message);
        }
    }

    Ok(())
}

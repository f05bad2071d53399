//! Application state (Model in TEA pattern)

use std::sync::Arc;

use awaazein_core::prelude::*;
use awaazein_core::{ScheduleConfig, SchedulePhase};
use chrono::{DateTime, Duration, Utc};

use crate::admin::AdminSession;
use crate::config::Settings;
use crate::credentials::SecureCredentialStore;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Tabs with countdown or livestream
    #[default]
    Normal,

    /// Hidden admin dialog over the livestream tab
    AdminDialog,
}

/// Top-level tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Countdown, current phase and the lineup
    #[default]
    Countdown,

    /// Current livestream
    Livestream,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Countdown, Tab::Livestream];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Countdown => "Countdown",
            Tab::Livestream => "Live",
        }
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Countdown => Tab::Livestream,
            Tab::Livestream => Tab::Countdown,
        }
    }

    pub fn previous(&self) -> Tab {
        // Two tabs: previous and next coincide
        self.next()
    }
}

/// Which form the admin dialog shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminStage {
    /// Password entry
    Login,
    /// Livestream link entry
    LinkEntry,
}

/// Transient state of the admin dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminDialogState {
    /// Password or link being typed
    pub input: String,
    /// Last error to show under the input
    pub error: Option<String>,
    /// Confirmation shown until this instant
    pub success_until: Option<DateTime<Utc>>,
}

impl AdminDialogState {
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn show_success(&self, now: DateTime<Utc>) -> bool {
        self.success_until.is_some_and(|until| now < until)
    }
}

/// Livestream panel content
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LivestreamView {
    /// Nothing stored yet
    #[default]
    NotConfigured,
    /// A video ID is stored
    Live(String),
    /// The store could not be read
    Unavailable(String),
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,
    pub schedule: ScheduleConfig,

    /// Most recent tick instant
    pub now: DateTime<Utc>,
    /// Phase at `now`, recomputed on every tick
    pub phase: SchedulePhase,

    pub tab: Tab,
    pub ui_mode: UiMode,

    pub livestream: LivestreamView,

    pub admin: AdminSession,
    pub admin_dialog: AdminDialogState,

    quitting: bool,
}

impl AppState {
    pub fn new(
        settings: Settings,
        schedule: ScheduleConfig,
        store: Arc<SecureCredentialStore>,
        now: DateTime<Utc>,
    ) -> Self {
        let phase = schedule.phase_at(now);
        let mut state = Self {
            settings,
            schedule,
            now,
            phase,
            tab: Tab::default(),
            ui_mode: UiMode::default(),
            livestream: LivestreamView::default(),
            admin: AdminSession::new(store),
            admin_dialog: AdminDialogState::default(),
            quitting: false,
        };
        state.refresh_livestream();
        state
    }

    pub fn event_name(&self) -> &str {
        &self.settings.event.name
    }

    /// Recompute everything derived from the clock
    pub fn tick(&mut self, now: DateTime<Utc>) {
        self.now = now;
        let phase = self.schedule.phase_at(now);
        if phase.kind() != self.phase.kind() {
            info!("Schedule phase: {}", phase.heading(&self.settings.event.name));
        }
        self.phase = phase;

        if self
            .admin_dialog
            .success_until
            .is_some_and(|until| now >= until)
        {
            self.admin_dialog.success_until = None;
        }
    }

    /// Re-read the livestream ID from the store
    pub fn refresh_livestream(&mut self) {
        self.livestream = match self.admin.store().get_livestream_id() {
            Ok(Some(id)) if !id.is_empty() => LivestreamView::Live(id),
            Ok(_) => LivestreamView::NotConfigured,
            Err(e) => {
                warn!("Failed to read livestream setting: {}", e);
                LivestreamView::Unavailable(e.to_string())
            }
        };
    }

    pub fn admin_stage(&self) -> AdminStage {
        if self.admin.is_authenticated() {
            AdminStage::LinkEntry
        } else {
            AdminStage::Login
        }
    }

    pub fn open_admin_dialog(&mut self) {
        self.tab = Tab::Livestream;
        self.admin_dialog.reset();
        self.ui_mode = UiMode::AdminDialog;
    }

    pub fn close_admin_dialog(&mut self) {
        self.admin_dialog.reset();
        self.ui_mode = UiMode::Normal;
    }

    /// Mark the confirmation message visible for the configured time
    pub fn flash_success(&mut self) {
        let secs = self.settings.ui.success_message_secs as i64;
        self.admin_dialog.success_until = Some(self.now + Duration::seconds(secs));
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}

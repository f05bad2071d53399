//! Headless mode - JSON event output instead of the TUI
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"started","event_name":"Awaazein","event_start":"2025-03-09T01:30:00Z","performers":10,"timestamp":1741480000000}
//! {"event":"phase","phase":"pre_show","heading":"Pre-Show","remaining_secs":1080,"performer_index":null,"performer_name":null,"timestamp":1741483800000}
//! {"event":"phase","phase":"performing","heading":"Now Performing: UW Awaaz","remaining_secs":780,"performer_index":0,"performer_name":"UW Awaaz","timestamp":1741484880000}
//! ```

pub mod runner;

use std::io::{self, Write};

use awaazein_core::prelude::*;
use awaazein_core::SchedulePhase;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Runner started with this schedule
    Started {
        event_name: String,
        event_start: DateTime<Utc>,
        performers: usize,
        timestamp: i64,
    },

    /// The schedule entered a new phase
    Phase {
        phase: String,
        heading: String,
        remaining_secs: Option<i64>,
        performer_index: Option<usize>,
        performer_name: Option<String>,
        timestamp: i64,
    },

    /// The stored livestream changed
    LivestreamUpdated {
        video_id: Option<String>,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },

    /// Runner exiting
    Stopped { reason: String, timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn started(event_name: &str, event_start: DateTime<Utc>, performers: usize) -> Self {
        Self::Started {
            event_name: event_name.to_string(),
            event_start,
            performers,
            timestamp: Self::now(),
        }
    }

    pub fn phase(phase: &SchedulePhase, event_name: &str) -> Self {
        let (performer_index, performer_name) = match phase {
            SchedulePhase::Performing {
                performer_index,
                performer_name,
                ..
            } => (Some(*performer_index), Some(performer_name.clone())),
            _ => (None, None),
        };

        Self::Phase {
            phase: phase.kind().as_str().to_string(),
            heading: phase.heading(event_name),
            remaining_secs: phase.remaining().map(|d| d.num_seconds()),
            performer_index,
            performer_name,
            timestamp: Self::now(),
        }
    }

    pub fn livestream_updated(video_id: Option<String>) -> Self {
        Self::LivestreamUpdated {
            video_id,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    pub fn stopped(reason: &str) -> Self {
        Self::Stopped {
            reason: reason.to_string(),
            timestamp: Self::now(),
        }
    }
}

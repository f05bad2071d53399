//! Configuration types for the Awaazein companion
//!
//! Defines:
//! - `Settings` - Global application settings (`.awaazein/config.toml`)
//! - `EventSettings`, `UiSettings`, `StorageSettings`

use std::path::PathBuf;

use awaazein_core::prelude::*;
use awaazein_core::{ScheduleConfig, DEFAULT_PERFORMER_MINUTES, DEFAULT_PRE_SHOW_MINUTES};
use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Teams in running order for the 2025 competition
pub const DEFAULT_PERFORMERS: &[&str] = &[
    "UW Awaaz",
    "UMD Anokha",
    "UT Hum",
    "UCD Jhankaar",
    "UCB Dil Se",
    "UCLA Naya Zamaana",
    "UH Dhun",
    "TAMU Swaram",
    "SLU Astha",
    "OSU Dhadkan",
];

/// Application settings (.awaazein/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub event: EventSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub storage: StorageSettings,
}

impl Settings {
    /// Build the validated run-of-show from the `[event]` table
    pub fn schedule(&self) -> Result<ScheduleConfig> {
        let start = parse_event_start(&self.event.start)?;
        ScheduleConfig::new(
            start,
            minutes("pre_show_minutes", self.event.pre_show_minutes)?,
            self.event.performers.clone(),
            minutes("performer_minutes", self.event.performer_minutes)?,
        )
    }

    /// Where the key-value store lives
    pub fn store_path(&self) -> PathBuf {
        match &self.storage.path {
            Some(path) if !path.as_os_str().is_empty() => path.clone(),
            _ => awaazein_core::logging::data_directory().join(DEFAULT_STORE_FILE),
        }
    }
}

fn minutes(key: &str, value: i64) -> Result<Duration> {
    Duration::try_minutes(value)
        .ok_or_else(|| Error::config_invalid(format!("event.{key} is out of range: {value}")))
}

pub const DEFAULT_STORE_FILE: &str = "store.json";

/// Event schedule settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventSettings {
    /// Shown in the header and the countdown heading
    #[serde(default = "default_event_name")]
    pub name: String,

    /// Countdown target. RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS` in local time
    #[serde(default = "default_event_start")]
    pub start: String,

    #[serde(default = "default_pre_show_minutes")]
    pub pre_show_minutes: i64,

    #[serde(default = "default_performer_minutes")]
    pub performer_minutes: i64,

    /// Performers in running order
    #[serde(default = "default_performers")]
    pub performers: Vec<String>,
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            name: default_event_name(),
            start: default_event_start(),
            pre_show_minutes: default_pre_show_minutes(),
            performer_minutes: default_performer_minutes(),
            performers: default_performers(),
        }
    }
}

fn default_event_name() -> String {
    "Awaazein".to_string()
}

fn default_event_start() -> String {
    "2025-03-08T17:30:00".to_string()
}

fn default_pre_show_minutes() -> i64 {
    DEFAULT_PRE_SHOW_MINUTES
}

fn default_performer_minutes() -> i64 {
    DEFAULT_PERFORMER_MINUTES
}

fn default_performers() -> Vec<String> {
    DEFAULT_PERFORMERS.iter().map(|s| s.to_string()).collect()
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Interval between schedule recomputations
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// How long the "updated" confirmation stays in the admin dialog
    #[serde(default = "default_success_message_secs")]
    pub success_message_secs: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            success_message_secs: default_success_message_secs(),
        }
    }
}

fn default_tick_ms() -> u64 {
    1000
}

fn default_success_message_secs() -> u64 {
    3
}

/// Storage settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Key-value store file; unset or empty uses the data directory
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Parse the configured event start.
///
/// Accepts RFC 3339 (`2025-03-08T17:30:00-08:00`) or a naive timestamp
/// interpreted in the local timezone (`2025-03-08T17:30:00`,
/// `2025-03-08 17:30:00`).
pub fn parse_event_start(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .map_err(|e| Error::config_invalid(format!("event start '{raw}': {e}")))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| Error::config_invalid(format!("event start '{raw}' does not exist locally")))
}

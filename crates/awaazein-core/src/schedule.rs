//! Event run-of-show: countdown, pre-show, performer slots, completion.
//!
//! The current phase is never stored. Every caller recomputes it from the
//! wall clock with [`phase_at`], so a suspended process, a dropped tick or a
//! long gap between samples all resolve to the correct phase on the next call.

use chrono::{DateTime, Duration, Utc};

use crate::error::{Error, Result};

/// Pre-show length used when the configuration does not override it
pub const DEFAULT_PRE_SHOW_MINUTES: i64 = 18;

/// Length of each performer slot used when the configuration does not override it
pub const DEFAULT_PERFORMER_MINUTES: i64 = 13;

/// Immutable schedule supplied at startup.
///
/// Construct with [`ScheduleConfig::new`]; non-positive durations are rejected
/// so every slot has a non-empty span, and the schedule end must be a
/// representable instant so slot arithmetic cannot overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    event_start: DateTime<Utc>,
    pre_show_duration: Duration,
    performer_names: Vec<String>,
    per_performer_duration: Duration,
}

impl ScheduleConfig {
    pub fn new(
        event_start: DateTime<Utc>,
        pre_show_duration: Duration,
        performer_names: Vec<String>,
        per_performer_duration: Duration,
    ) -> Result<Self> {
        if pre_show_duration <= Duration::zero() {
            return Err(Error::config_invalid(format!(
                "pre-show duration must be positive, got {}s",
                pre_show_duration.num_seconds()
            )));
        }
        if per_performer_duration <= Duration::zero() {
            return Err(Error::config_invalid(format!(
                "performer slot duration must be positive, got {}s",
                per_performer_duration.num_seconds()
            )));
        }

        let count = i32::try_from(performer_names.len()).map_err(|_| {
            Error::config_invalid(format!(
                "too many performers: {}",
                performer_names.len()
            ))
        })?;
        let end = per_performer_duration
            .checked_mul(count)
            .and_then(|total| {
                event_start
                    .checked_add_signed(pre_show_duration)?
                    .checked_add_signed(total)
            });
        if end.is_none() {
            return Err(Error::config_invalid(
                "schedule end is out of the representable date range",
            ));
        }

        Ok(Self {
            event_start,
            pre_show_duration,
            performer_names,
            per_performer_duration,
        })
    }

    pub fn event_start(&self) -> DateTime<Utc> {
        self.event_start
    }

    pub fn pre_show_duration(&self) -> Duration {
        self.pre_show_duration
    }

    pub fn per_performer_duration(&self) -> Duration {
        self.per_performer_duration
    }

    pub fn performer_names(&self) -> &[String] {
        &self.performer_names
    }

    /// End of the pre-show, which is also the start of the first slot
    pub fn pre_show_end(&self) -> DateTime<Utc> {
        self.event_start + self.pre_show_duration
    }

    /// Absolute bounds of every performer slot, in running order
    pub fn slots(&self) -> Vec<Slot<'_>> {
        let first = self.pre_show_end();
        self.performer_names
            .iter()
            .enumerate()
            .map(|(index, name)| {
                // index < performer count, which `new` proved fits in i32
                let start = first + self.per_performer_duration * index as i32;
                Slot {
                    index,
                    name,
                    start,
                    end: start + self.per_performer_duration,
                }
            })
            .collect()
    }

    /// Instant from which the schedule is [`SchedulePhase::Complete`]
    pub fn end(&self) -> DateTime<Utc> {
        self.pre_show_end() + self.per_performer_duration * self.performer_names.len() as i32
    }

    /// Phase active at `now`. See [`phase_at`].
    pub fn phase_at(&self, now: DateTime<Utc>) -> SchedulePhase {
        phase_at(now, self)
    }
}

/// One performer slot with absolute bounds (`start` inclusive, `end` exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<'a> {
    pub index: usize,
    pub name: &'a str,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Slot<'_> {
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now < self.end
    }
}

/// The stage of the event schedule at a given instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulePhase {
    CountingDown {
        remaining: Duration,
    },
    PreShow {
        remaining: Duration,
    },
    Performing {
        performer_index: usize,
        performer_name: String,
        remaining: Duration,
    },
    Complete,
}

impl SchedulePhase {
    /// Time left in the current phase; `None` once the event is complete
    pub fn remaining(&self) -> Option<Duration> {
        match self {
            SchedulePhase::CountingDown { remaining }
            | SchedulePhase::PreShow { remaining }
            | SchedulePhase::Performing { remaining, .. } => Some(*remaining),
            SchedulePhase::Complete => None,
        }
    }

    pub fn kind(&self) -> PhaseKind {
        match self {
            SchedulePhase::CountingDown { .. } => PhaseKind::CountingDown,
            SchedulePhase::PreShow { .. } => PhaseKind::PreShow,
            SchedulePhase::Performing {
                performer_index, ..
            } => PhaseKind::Performing(*performer_index),
            SchedulePhase::Complete => PhaseKind::Complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, SchedulePhase::Complete)
    }

    /// Heading shown above the time cards
    ///
    /// - `"Countdown to Awaazein"`
    /// - `"Pre-Show"`
    /// - `"Now Performing: UT Hum"`
    /// - `"Event Complete"`
    pub fn heading(&self, event_name: &str) -> String {
        match self {
            SchedulePhase::CountingDown { .. } => format!("Countdown to {event_name}"),
            SchedulePhase::PreShow { .. } => "Pre-Show".to_string(),
            SchedulePhase::Performing { performer_name, .. } => {
                format!("Now Performing: {performer_name}")
            }
            SchedulePhase::Complete => "Event Complete".to_string(),
        }
    }

    /// Remaining time split for display; `None` once complete
    pub fn countdown_parts(&self) -> Option<CountdownParts> {
        self.remaining().map(CountdownParts::from_duration)
    }
}

/// Payload-free phase tag.
///
/// Ordering follows the schedule: `CountingDown < PreShow < Performing(0) <
/// Performing(1) < ... < Complete`. Successive samples never decrease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PhaseKind {
    CountingDown,
    PreShow,
    Performing(usize),
    Complete,
}

impl PhaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseKind::CountingDown => "counting_down",
            PhaseKind::PreShow => "pre_show",
            PhaseKind::Performing(_) => "performing",
            PhaseKind::Complete => "complete",
        }
    }
}

/// Remaining time broken into whole days, hours, minutes and seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownParts {
    /// Negative durations clamp to zero.
    pub fn from_duration(remaining: Duration) -> Self {
        let total = remaining.num_seconds().max(0);
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        }
    }
}

/// Compute the phase active at `now`.
///
/// Pure: no hidden state, safe to call at any rate. Slot `i` spans
/// `[pre_show_end + i*d, pre_show_end + (i+1)*d)`.
pub fn phase_at(now: DateTime<Utc>, config: &ScheduleConfig) -> SchedulePhase {
    if now < config.event_start {
        return SchedulePhase::CountingDown {
            remaining: config.event_start - now,
        };
    }

    let pre_show_end = config.pre_show_end();
    if now < pre_show_end {
        return SchedulePhase::PreShow {
            remaining: pre_show_end - now,
        };
    }

    for slot in config.slots() {
        if slot.contains(now) {
            return SchedulePhase::Performing {
                performer_index: slot.index,
                performer_name: slot.name.to_string(),
                remaining: slot.end - now,
            };
        }
    }

    SchedulePhase::Complete
}

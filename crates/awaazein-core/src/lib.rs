//! # awaazein-core - Core Domain Types
//!
//! Foundation crate for the Awaazein companion. Provides the event schedule,
//! livestream link parsing, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (chrono, regex, url, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Schedule (`schedule`)
//! - [`ScheduleConfig`] - Validated run-of-show (start, pre-show, performer slots)
//! - [`SchedulePhase`] - Phase active at an instant, with time remaining
//! - [`phase_at()`] - Pure time-to-phase computation
//! - [`PhaseKind`], [`CountdownParts`], [`Slot`]
//!
//! ### Livestream (`livestream`)
//! - [`extract_video_id()`] - Normalize a pasted link to a video ID
//! - [`embed_url()`], [`watch_url()`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `recoverable` vs `fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use awaazein_core::prelude::*;
//! ```

pub mod error;
pub mod livestream;
pub mod logging;
pub mod schedule;

/// Prelude for common imports used throughout all Awaazein crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use livestream::{embed_url, extract_video_id, parse_video_id, watch_url};
pub use schedule::{
    phase_at, CountdownParts, PhaseKind, ScheduleConfig, SchedulePhase, Slot,
    DEFAULT_PERFORMER_MINUTES, DEFAULT_PRE_SHOW_MINUTES,
};

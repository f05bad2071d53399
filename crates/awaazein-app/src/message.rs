//! Message types for the application (TEA pattern)

use chrono::{DateTime, Utc};

use crate::input_key::InputKey;
use crate::state::Tab;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic schedule recomputation at the given wall-clock instant
    Tick(DateTime<Utc>),

    /// The credential store published a livestream change
    LivestreamUpdated,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Show a specific tab
    SwitchTab(Tab),
    /// Cycle to the next tab
    NextTab,
    /// Cycle to the previous tab
    PreviousTab,

    // ─────────────────────────────────────────────────────────
    // Admin dialog
    // ─────────────────────────────────────────────────────────
    /// Open the hidden admin dialog
    OpenAdmin,
    /// Close the dialog; an authenticated session stays logged in
    CloseAdmin,
    /// Append a character to the dialog input
    AdminInput(char),
    /// Delete the last character of the dialog input
    AdminBackspace,
    /// Clear the dialog input
    AdminClearInput,
    /// Log in (password stage) or update the livestream (link stage)
    AdminSubmit,
    /// End the admin session
    AdminLogout,
}

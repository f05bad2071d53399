//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Storage Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Store error at {path}: {message}")]
    Store { path: PathBuf, message: String },

    // ─────────────────────────────────────────────────────────────
    // Livestream / Admin Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Could not find a video ID in: {link}")]
    InvalidLivestreamLink { link: String },

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Admin session required")]
    NotAuthenticated,

    #[error("No livestream has been configured")]
    NotConfigured,

    #[error("Admin secret has not been provisioned")]
    SecretNotProvisioned,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn store(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Store {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn invalid_link(link: impl Into<String>) -> Self {
        Self::InvalidLivestreamLink { link: link.into() }
    }

    /// Errors the UI reports inline and keeps running
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::InvalidLivestreamLink { .. }
                | Error::InvalidCredentials
                | Error::NotAuthenticated
                | Error::NotConfigured
                | Error::SecretNotProvisioned
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Terminal { .. } | Error::ConfigInvalid { .. })
    }

    /// Short message suitable for display in the admin dialog
    pub fn user_message(&self) -> String {
        match self {
            Error::InvalidLivestreamLink { .. } => "No video ID found in that link".to_string(),
            Error::InvalidCredentials => "Invalid Credentials".to_string(),
            Error::NotAuthenticated => "Please log in again".to_string(),
            Error::NotConfigured => "No livestream available".to_string(),
            Error::SecretNotProvisioned => "Admin access is not set up".to_string(),
            other => other.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

//! Admin session: password gate in front of livestream changes

use std::sync::Arc;

use awaazein_core::livestream::parse_video_id;
use awaazein_core::prelude::*;

use crate::credentials::{AdminToken, SecureCredentialStore};

/// One admin UI session.
///
/// Holds the capability token in memory only. Dropping the session, calling
/// [`logout`](Self::logout) or restarting the app all require a fresh login.
#[derive(Debug)]
pub struct AdminSession {
    store: Arc<SecureCredentialStore>,
    token: Option<AdminToken>,
}

impl AdminSession {
    pub fn new(store: Arc<SecureCredentialStore>) -> Self {
        Self { store, token: None }
    }

    pub fn store(&self) -> &Arc<SecureCredentialStore> {
        &self.store
    }

    /// Check `password` and, on success, hold a token for this session.
    ///
    /// Failure reveals nothing beyond `false`; the caller clears its input.
    pub fn authenticate(&mut self, password: &str) -> bool {
        match self.store.begin_session(password) {
            Ok(token) => {
                self.token = Some(token);
                true
            }
            Err(e) => {
                debug!("Admin authentication failed: {}", e);
                false
            }
        }
    }

    /// `true` while this session's token is the store's active one
    pub fn is_authenticated(&self) -> bool {
        self.token
            .as_ref()
            .is_some_and(|token| self.store.is_session_active(token))
    }

    pub fn logout(&mut self) {
        if let Some(token) = self.token.take() {
            self.store.end_session(token);
        }
    }

    /// Normalize `raw_link` and store its video ID. Returns the stored ID.
    pub fn update_livestream(&self, raw_link: &str) -> Result<String> {
        let token = self.token.as_ref().ok_or(Error::NotAuthenticated)?;
        let video_id = parse_video_id(raw_link)?;
        self.store.set_livestream_id(token, &video_id)?;
        Ok(video_id)
    }
}

impl Drop for AdminSession {
    fn drop(&mut self) {
        self.logout();
    }
}

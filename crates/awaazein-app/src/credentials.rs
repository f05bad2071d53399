//! Admin secret and livestream setting storage
//!
//! [`SecureCredentialStore`] owns two keys in an injected [`KeyValueStore`]:
//!
//! | key                       | value                            |
//! |---------------------------|----------------------------------|
//! | `admin_credentials_hash`  | hex SHA-256 of the admin secret  |
//! | `livestream_link`         | normalized video ID              |
//!
//! Changing the livestream requires an [`AdminToken`] for the session that is
//! currently active, and every change is broadcast as
//! [`StoreEvent::LivestreamLinkUpdated`]. Subscribers re-read the store.

use awaazein_core::prelude::*;
use parking_lot::Mutex;
use sha2::{Digest, Sha256};
use tokio::sync::broadcast;

use crate::store::KeyValueStore;

pub const ADMIN_CREDENTIALS_KEY: &str = "admin_credentials_hash";
pub const LIVESTREAM_LINK_KEY: &str = "livestream_link";

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Change notifications published by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The livestream ID was replaced. No payload: read it back from the store.
    LivestreamLinkUpdated,
}

/// Proof of a successful admin login.
///
/// Only [`SecureCredentialStore::begin_session`] creates one. It stays valid
/// until [`SecureCredentialStore::end_session`] is called, another session
/// begins, or the process exits; nothing about it is persisted.
#[derive(Debug, PartialEq, Eq)]
pub struct AdminToken {
    session_id: u64,
}

pub struct SecureCredentialStore {
    backend: Box<dyn KeyValueStore>,
    /// Held across the capability check and the persist of a livestream
    /// write, so a session can't be revoked halfway through one.
    active_session: Mutex<Option<u64>>,
    events: broadcast::Sender<StoreEvent>,
}

impl std::fmt::Debug for SecureCredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureCredentialStore")
            .field("session_active", &self.active_session.lock().is_some())
            .finish_non_exhaustive()
    }
}

impl SecureCredentialStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            backend: Box::new(backend),
            active_session: Mutex::new(None),
            events,
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Admin secret
    // ─────────────────────────────────────────────────────────────

    /// Hash and persist the admin secret, replacing any previous one.
    ///
    /// A provisioning step, run out-of-band (see `awaazein admin provision`).
    pub fn set_admin_secret(&self, password: &str) -> Result<()> {
        if password.is_empty() {
            return Err(Error::config_invalid("admin password must not be empty"));
        }
        self.backend
            .set(ADMIN_CREDENTIALS_KEY, &hash_password(password))
            .context("Failed to persist admin secret")?;
        info!("Admin secret provisioned");
        Ok(())
    }

    pub fn has_admin_secret(&self) -> Result<bool> {
        Ok(self.backend.get(ADMIN_CREDENTIALS_KEY)?.is_some())
    }

    /// Compare the digest of `password` with the stored one.
    ///
    /// `false` when nothing is provisioned or the store can't be read.
    pub fn verify(&self, password: &str) -> bool {
        match self.backend.get(ADMIN_CREDENTIALS_KEY) {
            Ok(Some(stored)) => stored == hash_password(password),
            Ok(None) => false,
            Err(e) => {
                warn!("Could not read admin credentials: {}", e);
                false
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Sessions
    // ─────────────────────────────────────────────────────────────

    /// Verify `password` and start a new admin session, ending any other.
    pub fn begin_session(&self, password: &str) -> Result<AdminToken> {
        if !self.has_admin_secret()? {
            return Err(Error::SecretNotProvisioned);
        }
        if !self.verify(password) {
            debug!("Admin login rejected");
            return Err(Error::InvalidCredentials);
        }

        let session_id = rand::random::<u64>();
        *self.active_session.lock() = Some(session_id);
        info!("Admin session started");
        Ok(AdminToken { session_id })
    }

    /// Revoke `token`. A stale token is ignored.
    pub fn end_session(&self, token: AdminToken) {
        let mut active = self.active_session.lock();
        if *active == Some(token.session_id) {
            *active = None;
            info!("Admin session ended");
        }
    }

    pub fn is_session_active(&self, token: &AdminToken) -> bool {
        *self.active_session.lock() == Some(token.session_id)
    }

    // ─────────────────────────────────────────────────────────────
    // Livestream setting
    // ─────────────────────────────────────────────────────────────

    /// Persist a normalized video ID and notify subscribers.
    ///
    /// Ending or superseding the session blocks until an in-flight write has
    /// been persisted.
    pub fn set_livestream_id(&self, token: &AdminToken, video_id: &str) -> Result<()> {
        let video_id = video_id.trim();
        {
            let active = self.active_session.lock();
            if *active != Some(token.session_id) {
                warn!("Rejected livestream update without an active admin session");
                return Err(Error::NotAuthenticated);
            }
            if video_id.is_empty() {
                return Err(Error::invalid_link(video_id));
            }
            self.backend
                .set(LIVESTREAM_LINK_KEY, video_id)
                .with_context(|| format!("Failed to persist livestream {video_id}"))?;
        }

        info!("Livestream updated to {}", video_id);
        // No receivers is fine
        let _ = self.events.send(StoreEvent::LivestreamLinkUpdated);
        Ok(())
    }

    /// Last persisted video ID, `None` if never set
    pub fn get_livestream_id(&self) -> Result<Option<String>> {
        self.backend.get(LIVESTREAM_LINK_KEY)
    }

    /// Like [`get_livestream_id`](Self::get_livestream_id) but "never set" is
    /// [`Error::NotConfigured`]. A stored empty string is returned as-is.
    pub fn require_livestream_id(&self) -> Result<String> {
        self.get_livestream_id()?.ok_or(Error::NotConfigured)
    }

    /// Receive change notifications for as long as the store lives
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}

/// Hex-encoded SHA-256 of `password`
fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

//! One-shot subcommands: phase lookup and admin maintenance

use std::fmt;
use std::io::BufRead;
use std::sync::Arc;

use awaazein_app::{AdminSession, SecureCredentialStore};
use awaazein_core::prelude::*;
use awaazein_core::{ScheduleConfig, SchedulePhase};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Phase at one instant, as printed by `awaazein phase`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseReport {
    pub at: DateTime<Utc>,
    pub phase: String,
    pub heading: String,
    pub remaining_secs: Option<i64>,
    pub performer_index: Option<usize>,
    pub performer_name: Option<String>,
}

impl PhaseReport {
    pub fn new(schedule: &ScheduleConfig, event_name: &str, at: DateTime<Utc>) -> Self {
        let phase = schedule.phase_at(at);
        let (performer_index, performer_name) = match &phase {
            SchedulePhase::Performing {
                performer_index,
                performer_name,
                ..
            } => (Some(*performer_index), Some(performer_name.clone())),
            _ => (None, None),
        };

        Self {
            at,
            phase: phase.kind().as_str().to_string(),
            heading: phase.heading(event_name),
            remaining_secs: phase.remaining().map(|d| d.num_seconds()),
            performer_index,
            performer_name,
        }
    }
}

impl fmt::Display for PhaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.heading)?;
        if let Some(secs) = self.remaining_secs {
            let secs = secs.max(0);
            write!(
                f,
                " ({}d {:02}h {:02}m {:02}s left)",
                secs / 86_400,
                (secs % 86_400) / 3_600,
                (secs % 3_600) / 60,
                secs % 60
            )?;
        }
        Ok(())
    }
}

/// Read one line from `reader` without its line ending
pub fn read_secret(reader: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let secret = line.trim_end_matches(['\r', '\n']).to_string();
    if secret.is_empty() {
        return Err(Error::config_invalid("no password given on stdin"));
    }
    Ok(secret)
}

/// Store the hash of the password read from `reader`
pub fn provision(store: &SecureCredentialStore, reader: &mut impl BufRead) -> Result<()> {
    let password = read_secret(reader)?;
    store.set_admin_secret(&password)
}

/// Log in with the password read from `reader` and store `link`'s video ID
pub fn set_livestream(
    store: Arc<SecureCredentialStore>,
    link: &str,
    reader: &mut impl BufRead,
) -> Result<String> {
    let password = read_secret(reader)?;

    if !store.has_admin_secret()? {
        return Err(Error::SecretNotProvisioned);
    }

    let mut session = AdminSession::new(store);
    if !session.authenticate(&password) {
        return Err(Error::InvalidCredentials);
    }

    let result = session.update_livestream(link);
    session.logout();
    result
}

/// Stored video ID, or [`Error::NotConfigured`]
pub fn show_livestream(store: &SecureCredentialStore) -> Result<String> {
    store.require_livestream_id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use awaazein_app::MemoryStore;
    use chrono::Duration;
    use std::io::Cursor;

    fn schedule() -> ScheduleConfig {
        ScheduleConfig::new(
            Utc::now(),
            Duration::minutes(18),
            vec!["UW Awaaz".to_string(), "UMD Anokha".to_string()],
            Duration::minutes(13),
        )
        .unwrap()
    }

    #[test]
    fn test_phase_report_performing() {
        let schedule = schedule();
        let at = schedule.event_start() + Duration::minutes(18 + 13 + 3);
        let report = PhaseReport::new(&schedule, "Awaazein", at);

        assert_eq!(report.phase, "performing");
        assert_eq!(report.performer_index, Some(1));
        assert_eq!(report.performer_name.as_deref(), Some("UMD Anokha"));
        assert_eq!(report.remaining_secs, Some(10 * 60));
        assert_eq!(
            report.to_string(),
            "Now Performing: UMD Anokha (0d 00h 10m 00s left)"
        );
    }

    #[test]
    fn test_phase_report_complete() {
        let schedule = schedule();
        let report = PhaseReport::new(&schedule, "Awaazein", schedule.end());
        assert_eq!(report.to_string(), "Event Complete");
        assert_eq!(report.remaining_secs, None);
    }

    #[test]
    fn test_read_secret_strips_line_ending() {
        let mut input = Cursor::new("pa ss\r\n");
        assert_eq!(read_secret(&mut input).unwrap(), "pa ss");

        let mut empty = Cursor::new("\n");
        assert!(read_secret(&mut empty).is_err());
    }

    #[test]
    fn test_provision_then_set_livestream() {
        let store = Arc::new(SecureCredentialStore::new(MemoryStore::new()));
        provision(&store, &mut Cursor::new("letmein\n")).unwrap();

        let id = set_livestream(
            store.clone(),
            "https://www.youtube.com/watch?v=qwerty",
            &mut Cursor::new("letmein\n"),
        )
        .unwrap();
        assert_eq!(id, "qwerty");
        assert_eq!(show_livestream(&store).unwrap(), "qwerty");
    }

    #[test]
    fn test_set_livestream_wrong_password() {
        let store = Arc::new(SecureCredentialStore::new(MemoryStore::new()));
        provision(&store, &mut Cursor::new("letmein\n")).unwrap();

        let err = set_livestream(
            store.clone(),
            "https://youtu.be/abc",
            &mut Cursor::new("nope\n"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
        assert!(matches!(show_livestream(&store), Err(Error::NotConfigured)));
    }

    #[test]
    fn test_set_livestream_before_provisioning() {
        let store = Arc::new(SecureCredentialStore::new(MemoryStore::new()));
        let err = set_livestream(store, "https://youtu.be/abc", &mut Cursor::new("x\n"))
            .unwrap_err();
        assert!(matches!(err, Error::SecretNotProvisioned));
    }
}

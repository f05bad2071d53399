//! Settings parser for .awaazein/config.toml

use super::types::Settings;
use awaazein_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
pub const AWAAZEIN_DIR: &str = ".awaazein";

/// Path of the config file for a base directory
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(AWAAZEIN_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.awaazein/config.toml`
///
/// Returns defaults if the file doesn't exist or can't be parsed.
pub fn load_settings(base_dir: &Path) -> Settings {
    let config_path = config_path(base_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a commented default config in `.awaazein/`
///
/// Leaves an existing file untouched.
pub fn init_config_dir(base_dir: &Path) -> Result<()> {
    let dir = base_dir.join(AWAAZEIN_DIR);

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create .awaazein dir: {}", e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Awaazein Configuration

[event]
name = "Awaazein"
start = "2025-03-08T17:30:00"   # RFC 3339, or local time without offset
pre_show_minutes = 18
performer_minutes = 13
performers = [
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
]

[ui]
tick_ms = 1000
success_message_secs = 3

[storage]
# path = "/var/lib/awaazein/store.json"   # default: local data directory
"#;

        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert_eq!(settings.event.name, "Awaazein");
        assert_eq!(settings.event.performers.len(), 10);
        assert_eq!(settings.ui.tick_ms, 1000);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".awaazein");
        std::fs::create_dir_all(&dir).unwrap();

        let config = r#"
[event]
name = "Spring Showcase"
start = "2026-04-01T19:00:00Z"
pre_show_minutes = 10
performers = ["A", "B", "C"]

[ui]
tick_ms = 500
"#;
        std::fs::write(dir.join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.event.name, "Spring Showcase");
        assert_eq!(settings.event.pre_show_minutes, 10);
        // Unspecified field keeps its default
        assert_eq!(settings.event.performer_minutes, 13);
        assert_eq!(settings.event.performers, vec!["A", "B", "C"]);
        assert_eq!(settings.ui.tick_ms, 500);

        let schedule = settings.schedule().unwrap();
        assert_eq!(schedule.event_start().to_rfc3339(), "2026-04-01T19:00:00+00:00");
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".awaazein");
        std::fs::create_dir_all(&dir).unwrap();

        std::fs::write(dir.join("config.toml"), "not valid toml {{{{").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.event.name, "Awaazein");
    }

    #[test]
    fn test_init_config_dir() {
        let temp = tempdir().unwrap();

        init_config_dir(temp.path()).unwrap();

        assert!(temp.path().join(".awaazein").exists());
        assert!(config_path(temp.path()).exists());

        // Generated file parses back to the defaults
        let settings = load_settings(temp.path());
        assert_eq!(settings.event.pre_show_minutes, 18);
        assert_eq!(settings.event.performers.len(), 10);
        assert!(settings.storage.path.is_none());
    }

    #[test]
    fn test_init_config_dir_keeps_existing() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".awaazein");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "[event]\nname = \"Mine\"\n").unwrap();

        init_config_dir(temp.path()).unwrap();

        assert_eq!(load_settings(temp.path()).event.name, "Mine");
    }
}

//! Configuration file parsing for the Awaazein companion
//!
//! Supports:
//! - `.awaazein/config.toml` - Event schedule, UI and storage settings

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings, AWAAZEIN_DIR};
pub use types::*;

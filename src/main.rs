//! Awaazein - event countdown and livestream companion for the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use awaazein::commands::{self, PhaseReport};
use awaazein_app::config::{self, Settings};
use awaazein_app::{FileStore, SecureCredentialStore};
use awaazein_core::logging;
use awaazein_core::prelude::*;
use chrono::Utc;
use clap::{Parser, Subcommand};

/// Awaazein - event countdown and livestream companion
#[derive(Parser, Debug)]
#[command(name = "awaazein")]
#[command(about = "Countdown, lineup and livestream for the Awaazein competition", long_about = None)]
struct Args {
    /// Directory holding `.awaazein/config.toml` (defaults to the current directory)
    #[arg(long, value_name = "PATH", global = true)]
    dir: Option<PathBuf>,

    /// Run in headless mode (NDJSON phase events, no TUI)
    #[arg(long)]
    headless: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a commented default config file
    Init,

    /// Print the schedule phase at an instant
    Phase {
        /// RFC 3339 or naive local timestamp; defaults to now
        #[arg(long)]
        at: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Admin maintenance; passwords are read from stdin
    Admin {
        #[command(subcommand)]
        action: AdminCommand,
    },
}

#[derive(Subcommand, Debug)]
enum AdminCommand {
    /// Store the hash of a new admin password
    Provision,

    /// Log in and replace the livestream with LINK's video ID
    SetLivestream {
        /// YouTube watch, youtu.be or embed link
        link: String,
    },

    /// Print the stored livestream video ID
    ShowLivestream,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let base_dir = args
        .dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if let Err(e) = logging::init() {
        eprintln!("Warning: file logging disabled: {}", e);
    }

    match args.command {
        Some(Command::Init) => {
            config::init_config_dir(&base_dir)?;
            println!("Wrote {}", config::config_path(&base_dir).display());
            Ok(())
        }
        Some(Command::Phase { at, json }) => run_phase(&base_dir, at.as_deref(), json),
        Some(Command::Admin { action }) => run_admin(&base_dir, action),
        None => {
            let settings = config::load_settings(&base_dir);
            let schedule = settings.schedule()?;
            let store = open_store(&settings);

            if args.headless {
                awaazein::run_headless(settings, schedule, store).await?;
            } else {
                awaazein::run(settings, schedule, store).await?;
            }
            Ok(())
        }
    }
}

fn open_store(settings: &Settings) -> Arc<SecureCredentialStore> {
    let path = settings.store_path();
    debug!("Using store at {}", path.display());
    Arc::new(SecureCredentialStore::new(FileStore::new(path)))
}

fn run_phase(base_dir: &Path, at: Option<&str>, json: bool) -> color_eyre::Result<()> {
    let settings = config::load_settings(base_dir);
    let schedule = settings.schedule()?;
    let at = match at {
        Some(raw) => config::parse_event_start(raw)?,
        None => Utc::now(),
    };

    let report = PhaseReport::new(&schedule, &settings.event.name, at);
    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

fn run_admin(base_dir: &Path, action: AdminCommand) -> color_eyre::Result<()> {
    let settings = config::load_settings(base_dir);
    let store = open_store(&settings);
    let mut stdin = io::stdin().lock();

    let result = match action {
        AdminCommand::Provision => {
            commands::provision(&store, &mut stdin).map(|()| "Admin password stored".to_string())
        }
        AdminCommand::SetLivestream { link } => commands::set_livestream(store, &link, &mut stdin)
            .map(|id| format!("Livestream Link Updated Successfully ({id})")),
        AdminCommand::ShowLivestream => commands::show_livestream(&store),
    };

    match result {
        Ok(line) => {
            println!("{}", line);
            Ok(())
        }
        Err(e) if e.is_recoverable() => {
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

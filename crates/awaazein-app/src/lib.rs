//! awaazein-app - Application state and orchestration for the Awaazein companion
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! configuration loading, the admin session gate and the persistent credential store.

pub mod admin;
pub mod config;
pub mod credentials;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod signals;
pub mod spawn;
pub mod state;
pub mod store;

// Re-export primary types
pub use admin::AdminSession;
pub use credentials::{AdminToken, SecureCredentialStore, StoreEvent};
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::AppState;
pub use store::{FileStore, KeyValueStore, MemoryStore};

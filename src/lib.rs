//! Awaazein Library
//!
//! Event countdown, run-of-show and livestream companion. The binary wires
//! these entry points to its command line.

pub mod commands;
pub mod headless;

// Re-export main entry points
pub use awaazein_tui::run;
pub use headless::runner::run_headless;

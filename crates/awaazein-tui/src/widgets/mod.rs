//! Widget components for the TUI

mod admin_dialog;
mod countdown;
mod footer;
mod header;
mod lineup;
mod livestream;
pub mod modal_overlay;

pub use admin_dialog::AdminDialog;
pub use countdown::CountdownPanel;
pub use footer::KeyHints;
pub use header::MainHeader;
pub use lineup::Lineup;
pub use livestream::LivestreamPanel;

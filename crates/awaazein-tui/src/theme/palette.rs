//! Maroon and gold palette of the Awaazein brand.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(20, 8, 12);
pub const CARD_BG: Color = Color::Rgb(48, 14, 24);
pub const POPUP_BG: Color = Color::Rgb(34, 10, 18);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(110, 60, 70);
pub const BORDER_ACTIVE: Color = Color::Rgb(230, 184, 92);

// --- Accent ---
pub const MAROON: Color = Color::Rgb(128, 24, 48);
pub const GOLD: Color = Color::Rgb(230, 184, 92);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(245, 235, 220);
pub const TEXT_SECONDARY: Color = Color::Rgb(200, 170, 160);
pub const TEXT_MUTED: Color = Color::Rgb(140, 110, 110);

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94);

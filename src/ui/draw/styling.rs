//! Styling utilities and color schemes

use crate::types::StatusLevel;
use ratatui::style::Color;

pub fn focused_border() -> Color {
    Color::Cyan
}

pub fn unfocused_border() -> Color {
    Color::DarkGray
}

/// Color for a status message line.
pub fn status_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Info => Color::Gray,
        StatusLevel::Success => Color::Green,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

/// Scroll lines per page-scroll action
pub const SCROLL_LINES_PER_ACTION: u16 = 5;

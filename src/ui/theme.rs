//! Color theme constants for the StackIt UI.

use ratatui::style::Color;

/// Brand name in the navbar
pub const COLOR_BRAND: Color = Color::Cyan;

/// Borders of unfocused panels
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Dim text for metadata and hints
pub const COLOR_DIM: Color = Color::DarkGray;

/// Body text
pub const COLOR_TEXT: Color = Color::White;

/// Highlight for the selected card
pub const COLOR_SELECTED: Color = Color::Cyan;

/// Accepted answers and success toasts
pub const COLOR_ACCEPTED: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Error toasts and failed loads
pub const COLOR_ERROR: Color = Color::Red;

/// Informational toasts and keybind keys
pub const COLOR_INFO: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Tag badge colors
pub const COLOR_TAG_FG: Color = Color::LightBlue;
pub const COLOR_TAG_BG: Color = Color::Rgb(25, 35, 60);

/// Toast background
pub const COLOR_TOAST_BG: Color = Color::Rgb(10, 15, 35);

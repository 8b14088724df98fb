//! Color constants for the markcopy GUI

use eframe::egui::Color32;

/// Window background
pub const BG_PRIMARY: Color32 = Color32::from_rgb(22, 24, 28);
/// Panel and frame background
pub const BG_SECONDARY: Color32 = Color32::from_rgb(30, 33, 39);
/// Active tab background
pub const BG_SELECTED: Color32 = Color32::from_rgb(44, 52, 66);

/// Primary text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(222, 226, 232);
/// Secondary text
pub const TEXT_DIM: Color32 = Color32::from_rgb(160, 166, 176);
/// Muted text for descriptions
pub const TEXT_MUTED: Color32 = Color32::from_rgb(110, 116, 128);

/// Accent for the active tab and headings
pub const ACCENT_BLUE: Color32 = Color32::from_rgb(96, 156, 255);
/// Success messages
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(96, 210, 130);
/// Errors and invalid input
pub const ACCENT_RED: Color32 = Color32::from_rgb(235, 90, 90);

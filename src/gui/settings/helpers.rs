//! UI helper functions for settings rendering
//!
//! Reusable row builders shared by the tab sections. The builders return
//! `true` when the user changed the control, so callers can persist once per
//! change event.

use eframe::egui::{self, RichText};

use crate::gui::theme::{ACCENT_BLUE, ACCENT_GREEN, ACCENT_RED, BG_SECONDARY, TEXT_DIM, TEXT_MUTED};

/// Render a section heading
pub fn render_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(12.0);
    ui.label(RichText::new(text).monospace().size(15.0).color(ACCENT_BLUE));
    ui.add_space(6.0);
}

/// Render a small italic note under a heading
pub fn render_note(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).italics().small().color(TEXT_MUTED));
    ui.add_space(4.0);
}

/// Render a labeled toggle with an optional description.
/// Returns true when the value changed this frame.
pub fn render_toggle_row(
    ui: &mut egui::Ui,
    value: &mut bool,
    label: &str,
    description: Option<&str>,
) -> bool {
    let changed = ui
        .horizontal(|ui| {
            let response = ui.checkbox(value, "");
            ui.label(RichText::new(label).color(TEXT_DIM));
            if let Some(desc) = description {
                ui.label(RichText::new(desc).small().color(TEXT_MUTED));
            }
            response.changed()
        })
        .inner;
    ui.add_space(4.0);
    changed
}

/// Render a status message (success or error)
pub fn render_status_message(ui: &mut egui::Ui, status: &Option<(String, bool)>) {
    if let Some((msg, is_error)) = status {
        let color = if *is_error { ACCENT_RED } else { ACCENT_GREEN };
        ui.add_space(8.0);
        ui.label(RichText::new(msg).color(color));
    }
}

/// Render a section frame with secondary background
pub fn render_section_frame<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .corner_radius(4.0)
        .inner_margin(12.0)
        .show(ui, add_contents)
        .inner
}

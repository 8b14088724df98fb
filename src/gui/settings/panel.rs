//! Main settings panel rendering
//!
//! Renders the tab bar and dispatches to the active tab's section.

use eframe::egui::{self, RichText, ScrollArea};

use crate::gui::theme::{BG_PRIMARY, BG_SELECTED, TEXT_DIM, TEXT_PRIMARY};
use crate::i18n::t;

use super::helpers::render_status_message;
use super::sections::{render_edit_tab, render_global_tab, render_reading_tab};
use super::state::SettingsState;
use super::tabs::{SettingsTab, visible_tabs};

/// Render the settings panel
pub fn render_settings(ctx: &egui::Context, state: &mut SettingsState<'_>) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
        .show(ctx, |ui| {
            ui.label(
                RichText::new(format!("⚙ {}", t("settings.title").to_uppercase()))
                    .monospace()
                    .size(18.0)
                    .color(TEXT_PRIMARY),
            );
            ui.add_space(12.0);

            let tabs = visible_tabs(state.config.applying_to);

            // Changing the target view can remove the active tab; fall back
            // to Global rather than keeping a hidden tab selected.
            if !tabs.contains(state.active_tab) {
                *state.active_tab = SettingsTab::Global;
            }

            render_tab_bar(ui, tabs, state.active_tab);
            ui.separator();
            ui.add_space(8.0);

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    match state.active_tab {
                        SettingsTab::Global => render_global_tab(ui, state),
                        SettingsTab::Reading => render_reading_tab(ui, state),
                        SettingsTab::Edit => render_edit_tab(ui, state),
                    }
                    render_status_message(ui, state.save_status);
                });
        });
}

/// Render the tab bar; clicking a tab makes it active
fn render_tab_bar(ui: &mut egui::Ui, tabs: &[SettingsTab], active_tab: &mut SettingsTab) {
    ui.horizontal(|ui| {
        for tab in tabs {
            let is_active = *tab == *active_tab;
            let text = RichText::new(format!("{} {}", tab.icon(), tab.title())).color(
                if is_active {
                    TEXT_PRIMARY
                } else {
                    TEXT_DIM
                },
            );
            let mut button = egui::Button::new(text);
            if is_active {
                button = button.fill(BG_SELECTED);
            }
            if ui.add(button).clicked() {
                *active_tab = *tab;
            }
        }
    });
    ui.add_space(8.0);
}

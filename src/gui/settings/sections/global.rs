//! Global tab: which view the conversion applies to

use eframe::egui::{self, RichText};

use crate::config::ApplyingToView;
use crate::gui::theme::{TEXT_DIM, TEXT_MUTED};
use crate::i18n::t;

use super::super::helpers::{render_heading, render_section_frame};
use super::super::save::persist_settings;
use super::super::state::SettingsState;

/// Render the Global tab
pub fn render_global_tab(ui: &mut egui::Ui, state: &mut SettingsState<'_>) {
    render_heading(ui, t("global.title"));

    render_section_frame(ui, |ui| {
        // The combo edits a copy so the change can be funneled through
        // Config::set_applying_to, which enforces the HTML-export invariant.
        let mut selected = state.config.applying_to;
        ui.horizontal(|ui| {
            ui.label(RichText::new(t("view.title")).color(TEXT_DIM));
            egui::ComboBox::from_id_salt("applying_to")
                .selected_text(view_label(selected))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut selected, ApplyingToView::All, t("view.all"));
                    ui.selectable_value(&mut selected, ApplyingToView::Reading, t("view.reading"));
                    ui.selectable_value(&mut selected, ApplyingToView::Edit, t("view.edit"));
                });
        });
        ui.label(RichText::new(t("view.desc")).small().color(TEXT_MUTED));

        if selected != state.config.applying_to {
            state.config.set_applying_to(selected);
            persist_settings(state);
            // The tab bar recomputes from applying_to on the next frame and
            // falls back to this tab if the active one disappeared.
        }
    });
}

fn view_label(view: ApplyingToView) -> &'static str {
    match view {
        ApplyingToView::All => t("view.all"),
        ApplyingToView::Reading => t("view.reading"),
        ApplyingToView::Edit => t("view.edit"),
    }
}

//! Edit tab: wiki links, tab handling, and edit-view overrides

use eframe::egui::{self, RichText};

use crate::gui::theme::{ACCENT_RED, TEXT_DIM};
use crate::i18n::t;

use super::super::helpers::{render_heading, render_note, render_toggle_row};
use super::super::save::{persist_settings, update_tab_space_size};
use super::super::state::SettingsState;
use super::scope;

/// Render the Edit tab
pub fn render_edit_tab(ui: &mut egui::Ui, state: &mut SettingsState<'_>) {
    render_heading(ui, t("edit.desc"));

    let mut changed = false;
    changed |= render_toggle_row(
        ui,
        &mut state.config.wiki_to_markdown,
        t("wikiToMarkdown.title"),
        Some(t("wikiToMarkdown.desc")),
    );
    changed |= render_toggle_row(ui, &mut state.config.tab_to_space, t("tabToSpace"), None);

    // The numeric field only shows while tab-to-space is on; the stored
    // value survives toggling it off.
    if state.config.tab_to_space {
        render_tab_space_field(ui, state);
    }

    render_heading(ui, t("links"));
    changed |= scope::render_links(ui, &mut state.config.overrides);
    changed |= scope::render_footnotes(ui, &mut state.config.overrides);

    render_heading(ui, t("unconventionalMarkdown.title"));
    render_note(ui, t("unconventionalMarkdown.desc"));
    changed |= scope::render_callout_title(ui, &mut state.config.overrides);
    changed |= scope::render_highlight(ui, &mut state.config.overrides);

    render_heading(ui, t("other"));
    changed |= scope::render_hard_break(ui, &mut state.config.overrides);

    if changed {
        persist_settings(state);
    }
}

/// Render the spaces-per-tab field with its invalid-input indicator
fn render_tab_space_field(ui: &mut egui::Ui, state: &mut SettingsState<'_>) {
    let changed = ui
        .horizontal(|ui| {
            ui.label(RichText::new(t("tabSpaceSize")).color(TEXT_DIM));
            let mut edit = egui::TextEdit::singleline(&mut *state.tab_space_size_input)
                .font(egui::TextStyle::Monospace)
                .desired_width(48.0);
            if *state.tab_space_size_invalid {
                edit = edit.text_color(ACCENT_RED);
            }
            let response = ui.add(edit);
            if *state.tab_space_size_invalid {
                ui.label(
                    RichText::new(format!("using {}", state.config.tab_space_size))
                        .small()
                        .color(ACCENT_RED),
                );
            }
            response.changed()
        })
        .inner;

    if changed {
        update_tab_space_size(state);
    }
    ui.add_space(4.0);
}

//! Reading tab: HTML export and reading-view conversion defaults

use eframe::egui;

use crate::i18n::t;

use super::super::helpers::{render_heading, render_note, render_toggle_row};
use super::super::save::persist_settings;
use super::super::state::SettingsState;
use super::scope;

/// Render the Reading tab.
///
/// When HTML export is on, the Markdown-only controls (links, footnotes,
/// highlight) disappear; the callout-title and hard-break controls apply to
/// both output formats and stay visible.
pub fn render_reading_tab(ui: &mut egui::Ui, state: &mut SettingsState<'_>) {
    render_heading(ui, t("reading.desc"));

    let mut changed = false;
    changed |= render_toggle_row(ui, &mut state.config.export_as_html, t("copyAsHTML"), None);

    if !state.config.export_as_html {
        render_heading(ui, t("links"));
        changed |= scope::render_links(ui, &mut state.config.global);
        changed |= scope::render_footnotes(ui, &mut state.config.global);

        render_heading(ui, t("unconventionalMarkdown.title"));
        render_note(ui, t("unconventionalMarkdown.desc"));
        changed |= scope::render_highlight(ui, &mut state.config.global);
    }

    changed |= scope::render_callout_title(ui, &mut state.config.global);

    render_heading(ui, t("other"));
    changed |= scope::render_hard_break(ui, &mut state.config.global);

    if changed {
        persist_settings(state);
    }
}

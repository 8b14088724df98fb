//! Conversion controls shared by the Reading and Edit tabs
//!
//! Each function binds one control to a [`ConversionSettings`] scope (the
//! reading-view defaults or the edit-view overrides) and returns true when
//! the user changed the value.

use eframe::egui::{self, RichText};

use crate::config::{CalloutTitle, ConversionSettings, FootnoteConversion, LinkConversion};
use crate::gui::theme::{TEXT_DIM, TEXT_MUTED};
use crate::i18n::t;

use super::super::helpers::render_toggle_row;

pub fn render_links(ui: &mut egui::Ui, settings: &mut ConversionSettings) -> bool {
    let previous = settings.links;
    ui.horizontal(|ui| {
        ui.label(RichText::new(t("copyLinksAsText.title")).color(TEXT_DIM));
        egui::ComboBox::from_id_salt("scope_links")
            .selected_text(link_label(settings.links))
            .show_ui(ui, |ui| {
                ui.selectable_value(
                    &mut settings.links,
                    LinkConversion::Keep,
                    t("copyLinksAsText.keep"),
                );
                ui.selectable_value(
                    &mut settings.links,
                    LinkConversion::Remove,
                    t("copyLinksAsText.remove"),
                );
                ui.selectable_value(
                    &mut settings.links,
                    LinkConversion::External,
                    t("copyLinksAsText.external"),
                );
            });
    });
    ui.label(
        RichText::new(t("copyLinksAsText.desc"))
            .small()
            .color(TEXT_MUTED),
    );
    ui.add_space(8.0);
    settings.links != previous
}

pub fn render_footnotes(ui: &mut egui::Ui, settings: &mut ConversionSettings) -> bool {
    let previous = settings.footnotes;
    ui.horizontal(|ui| {
        ui.label(RichText::new(t("removeFootnotesLinks.title")).color(TEXT_DIM));
        egui::ComboBox::from_id_salt("scope_footnotes")
            .selected_text(footnote_label(settings.footnotes))
            .show_ui(ui, |ui| {
                ui.selectable_value(
                    &mut settings.footnotes,
                    FootnoteConversion::Keep,
                    t("removeFootnotesLinks.keep"),
                );
                ui.selectable_value(
                    &mut settings.footnotes,
                    FootnoteConversion::Remove,
                    t("removeFootnotesLinks.remove"),
                );
                ui.selectable_value(
                    &mut settings.footnotes,
                    FootnoteConversion::Format,
                    t("removeFootnotesLinks.format"),
                );
            });
    });
    ui.label(
        RichText::new(t("removeFootnotesLinks.desc"))
            .small()
            .color(TEXT_MUTED),
    );
    ui.add_space(8.0);
    settings.footnotes != previous
}

pub fn render_callout_title(ui: &mut egui::Ui, settings: &mut ConversionSettings) -> bool {
    let previous = settings.callout;
    ui.horizontal(|ui| {
        ui.label(RichText::new(t("callout.title")).color(TEXT_DIM));
        egui::ComboBox::from_id_salt("scope_callout")
            .selected_text(callout_label(settings.callout))
            .show_ui(ui, |ui| {
                ui.selectable_value(
                    &mut settings.callout,
                    CalloutTitle::Obsidian,
                    t("callout.obsidian"),
                );
                ui.selectable_value(
                    &mut settings.callout,
                    CalloutTitle::Strong,
                    t("callout.strong"),
                );
                ui.selectable_value(
                    &mut settings.callout,
                    CalloutTitle::Remove,
                    t("callout.remove"),
                );
            });
    });
    ui.label(RichText::new(t("callout.desc")).small().color(TEXT_MUTED));
    ui.add_space(8.0);
    settings.callout != previous
}

pub fn render_highlight(ui: &mut egui::Ui, settings: &mut ConversionSettings) -> bool {
    render_toggle_row(
        ui,
        &mut settings.highlight,
        t("highlight.title"),
        Some(t("highlight.desc")),
    )
}

pub fn render_hard_break(ui: &mut egui::Ui, settings: &mut ConversionSettings) -> bool {
    render_toggle_row(
        ui,
        &mut settings.hard_break,
        t("hardBreaks.title"),
        Some(t("hardBreaks.desc")),
    )
}

fn link_label(links: LinkConversion) -> &'static str {
    match links {
        LinkConversion::Keep => t("copyLinksAsText.keep"),
        LinkConversion::Remove => t("copyLinksAsText.remove"),
        LinkConversion::External => t("copyLinksAsText.external"),
    }
}

fn footnote_label(footnotes: FootnoteConversion) -> &'static str {
    match footnotes {
        FootnoteConversion::Keep => t("removeFootnotesLinks.keep"),
        FootnoteConversion::Remove => t("removeFootnotesLinks.remove"),
        FootnoteConversion::Format => t("removeFootnotesLinks.format"),
    }
}

fn callout_label(callout: CalloutTitle) -> &'static str {
    match callout {
        CalloutTitle::Obsidian => t("callout.obsidian"),
        CalloutTitle::Strong => t("callout.strong"),
        CalloutTitle::Remove => t("callout.remove"),
    }
}

//! Application state and eframe::App implementation

use std::path::PathBuf;

use eframe::egui;

use super::settings::{self, SettingsState, SettingsTab};
use crate::config::Config;

/// Top-level application state for the settings window
pub struct MarkcopyApp {
    /// The persisted settings object
    config: Config,
    /// Where the config is written on every change
    config_path: PathBuf,

    /// Currently selected settings tab
    active_tab: SettingsTab,
    /// Text buffer for the spaces-per-tab field
    tab_space_size_input: String,
    /// Whether the last spaces-per-tab input failed to parse
    tab_space_size_invalid: bool,
    /// Save feedback: message plus error flag
    save_status: Option<(String, bool)>,
}

impl MarkcopyApp {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        let tab_space_size_input = config.tab_space_size.to_string();
        Self {
            config,
            config_path,
            active_tab: SettingsTab::Global,
            tab_space_size_input,
            tab_space_size_invalid: false,
            save_status: None,
        }
    }
}

impl eframe::App for MarkcopyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        settings::render_settings(
            ctx,
            &mut SettingsState {
                active_tab: &mut self.active_tab,
                tab_space_size_input: &mut self.tab_space_size_input,
                tab_space_size_invalid: &mut self.tab_space_size_invalid,
                save_status: &mut self.save_status,
                config: &mut self.config,
                config_path: &self.config_path,
            },
        );
    }
}

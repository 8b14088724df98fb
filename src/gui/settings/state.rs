//! Settings state struct for the GUI
//!
//! Borrows the mutable pieces of application state used while rendering the
//! settings panel. All mutation of the config goes through this struct and
//! is followed by exactly one persist call per change event.

use std::path::Path;

use super::tabs::SettingsTab;
use crate::config::Config;

/// State for the settings panel
pub struct SettingsState<'a> {
    /// Currently selected tab
    pub active_tab: &'a mut SettingsTab,

    /// Text buffer for the spaces-per-tab field. Kept separate from the
    /// stored value so invalid input stays visible while the stored value
    /// falls back to the default.
    pub tab_space_size_input: &'a mut String,
    /// Red-border flag for the spaces-per-tab field
    pub tab_space_size_invalid: &'a mut bool,

    /// Save feedback: message plus error flag
    pub save_status: &'a mut Option<(String, bool)>,

    /// The persisted settings object
    pub config: &'a mut Config,
    /// Where the config is written on every change
    pub config_path: &'a Path,
}

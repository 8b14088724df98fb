//! Configuration types and persistence
//!
//! The [`Config`] struct is the single persisted object of the application.
//! It is loaded once at startup and written back to disk after every change
//! made in the settings GUI.

mod conversion;
mod io;

pub use conversion::{CalloutTitle, ConversionSettings, FootnoteConversion, LinkConversion};

use serde::{Deserialize, Serialize};

/// Which view the conversion settings apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplyingToView {
    /// Both reading and edit view
    #[default]
    All,
    /// Reading view only
    Reading,
    /// Edit view only
    Edit,
}

/// Root configuration, persisted as `~/.markcopy/config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Which view(s) the copy conversion applies to
    #[serde(default)]
    pub applying_to: ApplyingToView,

    /// Copy the reading view as HTML instead of Markdown.
    /// Only meaningful for the reading view; forced off when
    /// `applying_to` is `Edit`.
    #[serde(default)]
    pub export_as_html: bool,

    /// Convert `[[wiki links]]` to standard Markdown links (edit view)
    #[serde(default)]
    pub wiki_to_markdown: bool,

    /// Replace leading tabs with spaces (edit view)
    #[serde(default)]
    pub tab_to_space: bool,

    /// Spaces per tab when `tab_to_space` is enabled
    #[serde(default = "default_tab_space_size")]
    pub tab_space_size: usize,

    /// Conversion behavior for the reading view
    #[serde(default)]
    pub global: ConversionSettings,

    /// Conversion overrides for the edit view
    #[serde(default)]
    pub overrides: ConversionSettings,
}

/// Fallback for `tab_space_size`, also used when the GUI input is invalid
pub const DEFAULT_TAB_SPACE_SIZE: usize = 4;

fn default_tab_space_size() -> usize {
    DEFAULT_TAB_SPACE_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            applying_to: ApplyingToView::default(),
            export_as_html: false,
            wiki_to_markdown: false,
            tab_to_space: false,
            tab_space_size: default_tab_space_size(),
            global: ConversionSettings::default(),
            overrides: ConversionSettings::default(),
        }
    }
}

impl Config {
    /// Change the target view.
    ///
    /// This is the only place `applying_to` is mutated: HTML export only
    /// exists in the reading view, so switching to `Edit` forces
    /// `export_as_html` off.
    pub fn set_applying_to(&mut self, view: ApplyingToView) {
        self.applying_to = view;
        if self.applying_to == ApplyingToView::Edit {
            self.export_as_html = false;
        }
    }

    /// Re-apply field invariants after deserializing a config file.
    ///
    /// Hand-edited files can combine `applying_to = "edit"` with
    /// `export_as_html = true` or set `tab_space_size = 0`.
    fn sanitize(&mut self) {
        if self.applying_to == ApplyingToView::Edit {
            self.export_as_html = false;
        }
        if self.tab_space_size == 0 {
            self.tab_space_size = DEFAULT_TAB_SPACE_SIZE;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.applying_to, ApplyingToView::All);
        assert!(!config.export_as_html);
        assert!(!config.wiki_to_markdown);
        assert!(!config.tab_to_space);
        assert_eq!(config.tab_space_size, 4);
    }

    #[test]
    fn test_edit_view_forces_html_export_off() {
        let mut config = Config {
            export_as_html: true,
            ..Config::default()
        };
        config.set_applying_to(ApplyingToView::Edit);
        assert!(!config.export_as_html);
    }

    #[test]
    fn test_reading_view_keeps_html_export() {
        let mut config = Config {
            export_as_html: true,
            ..Config::default()
        };
        config.set_applying_to(ApplyingToView::Reading);
        assert!(config.export_as_html);
        config.set_applying_to(ApplyingToView::All);
        assert!(config.export_as_html);
    }

    #[test]
    fn test_sanitize_repairs_invalid_fields() {
        let mut config = Config {
            applying_to: ApplyingToView::Edit,
            export_as_html: true,
            tab_space_size: 0,
            ..Config::default()
        };
        config.sanitize();
        assert!(!config.export_as_html);
        assert_eq!(config.tab_space_size, 4);
    }
}

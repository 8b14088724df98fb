//! Settings tab definitions
//!
//! The visible tab list is a pure function of the `applying_to` setting, so
//! there is no shared list to mutate and no dedup step.

use crate::config::ApplyingToView;
use crate::i18n::t;

/// One tab of the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsTab {
    Global,
    Reading,
    Edit,
}

impl SettingsTab {
    /// Display name for the tab bar
    pub fn title(&self) -> &str {
        match self {
            SettingsTab::Global => t("global.title"),
            SettingsTab::Reading => t("reading.title"),
            SettingsTab::Edit => t("edit.title"),
        }
    }

    /// Icon shown next to the tab name
    pub fn icon(&self) -> &'static str {
        match self {
            SettingsTab::Global => "🌐",
            SettingsTab::Reading => "📖",
            SettingsTab::Edit => "✏",
        }
    }
}

/// Compute which tabs are shown for the current target view.
///
/// Global is always present; Reading and Edit appear only when the
/// conversion applies to that view.
pub fn visible_tabs(applying_to: ApplyingToView) -> &'static [SettingsTab] {
    match applying_to {
        ApplyingToView::All => &[
            SettingsTab::Global,
            SettingsTab::Reading,
            SettingsTab::Edit,
        ],
        ApplyingToView::Reading => &[SettingsTab::Global, SettingsTab::Reading],
        ApplyingToView::Edit => &[SettingsTab::Global, SettingsTab::Edit],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shows_every_tab() {
        assert_eq!(
            visible_tabs(ApplyingToView::All),
            &[
                SettingsTab::Global,
                SettingsTab::Reading,
                SettingsTab::Edit
            ]
        );
    }

    #[test]
    fn test_reading_hides_edit_tab() {
        assert_eq!(
            visible_tabs(ApplyingToView::Reading),
            &[SettingsTab::Global, SettingsTab::Reading]
        );
    }

    #[test]
    fn test_edit_hides_reading_tab() {
        assert_eq!(
            visible_tabs(ApplyingToView::Edit),
            &[SettingsTab::Global, SettingsTab::Edit]
        );
    }

    #[test]
    fn test_tab_lists_have_no_duplicates() {
        for view in [
            ApplyingToView::All,
            ApplyingToView::Reading,
            ApplyingToView::Edit,
        ] {
            let tabs = visible_tabs(view);
            for (i, tab) in tabs.iter().enumerate() {
                assert!(!tabs[i + 1..].contains(tab));
            }
            assert_eq!(tabs[0], SettingsTab::Global);
        }
    }
}

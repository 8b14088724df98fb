//! Settings persistence and input validation
//!
//! Every control change funnels through [`persist_settings`], so each change
//! event results in exactly one write of the config file.

use super::state::SettingsState;
use crate::config::DEFAULT_TAB_SPACE_SIZE;

/// Write the current config to disk.
///
/// Persistence failures are local to the panel: a status line plus a log
/// entry, nothing propagates upward.
pub fn persist_settings(state: &mut SettingsState<'_>) {
    match state.config.save_to_file(state.config_path) {
        Ok(()) => {
            *state.save_status = None;
        }
        Err(e) => {
            tracing::warn!(
                "Failed to save config ({}): {}",
                state.config_path.display(),
                e
            );
            *state.save_status = Some((format!("Failed to save settings: {}", e), true));
        }
    }
}

/// Apply an edit of the spaces-per-tab field.
///
/// Valid input stores the parsed value and clears the invalid flag; anything
/// else stores the default and flags the field. Both paths persist.
pub fn update_tab_space_size(state: &mut SettingsState<'_>) {
    match parse_tab_space_size(state.tab_space_size_input) {
        Some(size) => {
            state.config.tab_space_size = size;
            *state.tab_space_size_invalid = false;
        }
        None => {
            state.config.tab_space_size = DEFAULT_TAB_SPACE_SIZE;
            *state.tab_space_size_invalid = true;
        }
    }
    persist_settings(state);
}

/// Parse a spaces-per-tab entry. Must be a positive integer.
fn parse_tab_space_size(input: &str) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::tabs::SettingsTab;
    use crate::config::Config;

    #[test]
    fn test_invalid_input_stores_default_flags_field_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config {
            tab_space_size: 7,
            ..Config::default()
        };
        let mut active_tab = SettingsTab::Edit;
        let mut input = "abc".to_string();
        let mut invalid = false;
        let mut status = None;

        update_tab_space_size(&mut SettingsState {
            active_tab: &mut active_tab,
            tab_space_size_input: &mut input,
            tab_space_size_invalid: &mut invalid,
            save_status: &mut status,
            config: &mut config,
            config_path: &path,
        });

        assert_eq!(config.tab_space_size, 4);
        assert!(invalid);
        assert_eq!(input, "abc");
        // The reset value is persisted, not just held in memory
        assert_eq!(Config::from_file(&path).unwrap().tab_space_size, 4);
    }

    #[test]
    fn test_valid_input_stores_value_and_clears_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        let mut active_tab = SettingsTab::Edit;
        let mut input = "7".to_string();
        let mut invalid = true;
        let mut status = None;

        update_tab_space_size(&mut SettingsState {
            active_tab: &mut active_tab,
            tab_space_size_input: &mut input,
            tab_space_size_invalid: &mut invalid,
            save_status: &mut status,
            config: &mut config,
            config_path: &path,
        });

        assert_eq!(config.tab_space_size, 7);
        assert!(!invalid);
        assert_eq!(Config::from_file(&path).unwrap().tab_space_size, 7);
    }

    #[test]
    fn test_parse_accepts_positive_integers() {
        assert_eq!(parse_tab_space_size("7"), Some(7));
        assert_eq!(parse_tab_space_size("  2 "), Some(2));
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        assert_eq!(parse_tab_space_size("abc"), None);
        assert_eq!(parse_tab_space_size("4.5"), None);
        assert_eq!(parse_tab_space_size(""), None);
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert_eq!(parse_tab_space_size("0"), None);
        assert_eq!(parse_tab_space_size("-3"), None);
    }
}

//! GUI runner - launches the markcopy settings window

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use eframe::egui;
use tracing::{info, warn};

use super::app::MarkcopyApp;
use crate::config::Config;

/// Run the settings GUI
pub fn run_gui(config_override: Option<PathBuf>) -> Result<()> {
    // Use global config by default (~/.markcopy/config.toml), allow override with --config
    let explicit = config_override.is_some();
    let config_path = config_override.unwrap_or_else(Config::global_config_path);
    let config = load_startup_config(&config_path, explicit);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 680.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    let app = MarkcopyApp::new(config, config_path);
    eframe::run_native(
        "markcopy",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow!("Failed to run GUI: {e}"))
}

/// Resolve the config the GUI starts with.
///
/// Only the global path is ever auto-created. An explicit `--config` path
/// that does not exist yet starts from defaults; the first change writes it.
fn load_startup_config(config_path: &Path, explicit: bool) -> Config {
    if config_path.exists() {
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(
                    "Failed to parse config ({}): {}. Falling back to defaults.",
                    config_path.display(),
                    e
                );
                Config::default()
            }
        }
    } else if explicit {
        info!(
            "Config {} does not exist yet; starting from defaults.",
            config_path.display()
        );
        Config::default()
    } else {
        // Missing global config: auto-create it with defaults
        Config::load().unwrap_or_else(|e| {
            warn!("Failed to initialize config: {}. Falling back to defaults.", e);
            Config::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_override_starts_from_defaults_without_creating_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = load_startup_config(&path, true);
        assert_eq!(config, Config::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_existing_override_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tab_space_size = 2\n").unwrap();

        let config = load_startup_config(&path, true);
        assert_eq!(config.tab_space_size, 2);
    }

    #[test]
    fn test_unparseable_override_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tab_space_size = [not toml").unwrap();

        let config = load_startup_config(&path, true);
        assert_eq!(config, Config::default());
    }
}

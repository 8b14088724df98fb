//! Settings panel for the GUI
//!
//! Renders the tabbed settings view where users configure:
//! - Which view the copy conversion applies to (Global tab)
//! - HTML export and reading-view conversion defaults (Reading tab)
//! - Wiki-link, tab handling, and edit-view overrides (Edit tab)

mod helpers;
mod panel;
mod save;
mod sections;
mod state;
mod tabs;

pub use panel::render_settings;
pub use state::SettingsState;
pub use tabs::{SettingsTab, visible_tabs};

//! markcopy - copy settings for Markdown notes
//!
//! markcopy owns the configuration that controls how notes are converted to
//! plain Markdown or HTML when copied: link handling, footnote handling,
//! callout titles, highlight syntax, tab-to-space conversion, and hard line
//! breaks. The crate provides a native settings GUI plus a small CLI for
//! inspecting and initializing the config file.
//!
//! Settings are split into three scopes:
//!
//! 1. **Global**: which view (reading, edit, or both) the conversion
//!    applies to.
//! 2. **Reading**: HTML export and conversion defaults for the reading view.
//! 3. **Edit**: wiki-link and tab handling plus conversion overrides for the
//!    edit view.

pub mod config;
pub mod gui;
pub mod i18n;

pub use config::Config;

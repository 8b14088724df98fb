//! GUI module for the markcopy settings application
//!
//! The GUI is a single settings panel with a tab bar (Global, Reading, Edit)
//! whose visible tabs depend on which view the conversion applies to. Every
//! control change is written back to the config file immediately.

pub mod app;
pub mod runner;
pub mod settings;
pub mod theme;

pub use app::MarkcopyApp;
pub use runner::run_gui;

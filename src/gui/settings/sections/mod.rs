//! Settings section render functions
//!
//! One module per tab, plus the scope controls shared by the Reading and
//! Edit tabs.

mod edit;
mod global;
mod reading;
mod scope;

pub use edit::render_edit_tab;
pub use global::render_global_tab;
pub use reading::render_reading_tab;

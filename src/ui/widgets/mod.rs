//! Reusable UI widgets

mod error_banner;
mod help_panel;
mod nav_tabs;
mod status_bar;

pub use error_banner::render_error_banner;
pub use help_panel::{build_help_lines, render_help_panel};
pub use nav_tabs::{NAV_HEIGHT, render_nav_tabs};
pub use status_bar::{build_status_bar, render_status_hints, status_hints_height};

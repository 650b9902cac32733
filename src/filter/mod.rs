//! Filter state for both pages
//!
//! - `time`: cutoff instant and the visible commit selection (meta page)
//! - `narrative`: scroll narrative steps that drive the cutoff
//! - `catalog`: search query and year selection (projects page)

mod catalog;
mod narrative;
mod time;

pub use catalog::{CatalogFilter, project_count_label};
pub use narrative::{Narrative, step_text};
pub use time::{SLIDER_MAX, Selection, TimeFilter, display_cutoff, visible_commits};

//! Page views
//!
//! Each view owns the state of one page of the application.

mod meta;
mod projects;

pub use meta::{CURSOR_STEP, CURSOR_STEP_FAST, MetaAction, MetaView};
pub use projects::{ProjectsInputMode, ProjectsView};

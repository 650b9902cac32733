//! Data models for folio
//!
//! UI-independent structures for the line-of-code dataset, the commits
//! aggregated from it, and the project catalog.

mod color_scheme;
mod commit;
mod line_record;
mod notification;
mod project;

pub use color_scheme::ColorScheme;
pub use commit::{Commit, CommitLines, History};
pub use line_record::{ADDED, ChangeKind, LineRecord, REMOVED};
pub use notification::{NOTIFICATION_TTL, Notification, NotificationKind};
pub use project::{FIELD_JOIN, ProjectRecord};

//! Line record data model (one row of the line-of-code dataset)

use chrono::{DateTime, FixedOffset};

/// Change kind token for an added line
pub const ADDED: &str = "added";
/// Change kind token for a removed line
pub const REMOVED: &str = "removed";

/// How a line was touched by its commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Removed,
    /// Any other token (unchanged lines, empty column, unknown values)
    Other,
}

impl ChangeKind {
    /// Classify a raw `change` column value (exact, case-sensitive match)
    pub fn from_token(token: &str) -> Self {
        match token {
            ADDED => ChangeKind::Added,
            REMOVED => ChangeKind::Removed,
            _ => ChangeKind::Other,
        }
    }
}

/// One source line as seen by one commit
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    /// Commit identifier
    pub commit: String,
    /// File path relative to the repository root
    pub file: String,
    /// Line index within the file
    pub line: u32,
    /// Nesting depth
    pub depth: u32,
    /// Line length in characters
    pub length: u32,
    /// Local midnight of the commit day (`date` + `T00:00` + `timezone`)
    ///
    /// Nothing downstream reads this, but the loader always produces it.
    pub date: DateTime<FixedOffset>,
    /// Raw `time` column
    pub time: String,
    /// Raw `timezone` column
    pub timezone: String,
    /// Actual commit moment
    pub datetime: DateTime<FixedOffset>,
    pub author: String,
    /// Raw `change` column
    pub change: String,
    /// Language / type tag (e.g. `js`, `css`)
    pub language: String,
}

impl LineRecord {
    pub fn change_kind(&self) -> ChangeKind {
        ChangeKind::from_token(&self.change)
    }
}

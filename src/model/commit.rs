//! Commit summary data model

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::LineRecord;

/// Aggregated summary of all line records sharing one commit id
///
/// Plain data: the rows behind a commit live in [`CommitLines`], so this
/// struct serializes without dragging its source rows along.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    pub id: String,
    /// Link to the commit on the hosting service
    pub url: String,
    pub author: String,
    /// Local midnight of the commit day
    pub date: DateTime<FixedOffset>,
    /// Raw `time` column of the first row
    pub time: String,
    /// Raw `timezone` column of the first row
    pub timezone: String,
    pub datetime: DateTime<FixedOffset>,
    /// Hour of day plus minutes as a fraction (vertical scatter encoding)
    pub hour_frac: f64,
    pub total_lines: usize,
    pub additions: usize,
    pub deletions: usize,
    pub net_change: i64,
    pub file_count: usize,
    pub files: Vec<String>,
    pub max_depth: u32,
    pub avg_depth: f64,
    pub max_length: u32,
    pub avg_length: f64,
    pub hour: u32,
    /// 0 = Sunday, 6 = Saturday
    pub day_of_week: u32,
    pub is_weekend: bool,
}

impl Commit {
    /// Full date, e.g. "Tuesday, February 25, 2025"
    pub fn display_date(&self) -> String {
        self.datetime.format("%A, %B %-d, %Y").to_string()
    }

    /// Short time, e.g. "2:03 PM"
    pub fn display_time(&self) -> String {
        self.datetime.format("%-I:%M %p").to_string()
    }

    pub fn display_author(&self) -> &str {
        if self.author.is_empty() {
            "Unknown"
        } else {
            &self.author
        }
    }

    /// First 7 characters of the id
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(7) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }
}

/// Owned source rows of every commit, keyed by commit id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitLines {
    rows: HashMap<String, Vec<LineRecord>>,
}

impl CommitLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, commit_id: String, lines: Vec<LineRecord>) {
        self.rows.insert(commit_id, lines);
    }

    /// Rows of one commit (empty when the id is unknown)
    pub fn of(&self, commit_id: &str) -> &[LineRecord] {
        self.rows.get(commit_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The aggregated dataset: commits in ascending time order plus their rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    /// Every loaded row, sorted by datetime
    pub records: Vec<LineRecord>,
    pub commits: Vec<Commit>,
    pub lines: CommitLines,
}

impl History {
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Flatten the rows of the given commits, in commit order
    pub fn lines_of<'a, I>(&'a self, commits: I) -> Vec<&'a LineRecord>
    where
        I: IntoIterator<Item = &'a Commit>,
    {
        commits
            .into_iter()
            .flat_map(|c| self.lines.of(&c.id))
            .collect()
    }
}

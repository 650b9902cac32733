//! Commit aggregation (line records → per-commit summaries)

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Timelike};

use crate::model::{ChangeKind, Commit, CommitLines, History, LineRecord};

/// Commit link prefix used when none is configured
pub const DEFAULT_COMMIT_URL: &str = "https://github.com/YOUR_REPO/commit/";

/// Groups line records into one [`Commit`] per distinct commit id
#[derive(Debug, Clone)]
pub struct Aggregator {
    url_prefix: String,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(DEFAULT_COMMIT_URL)
    }
}

impl Aggregator {
    pub fn new(url_prefix: impl Into<String>) -> Self {
        Self {
            url_prefix: url_prefix.into(),
        }
    }

    /// Aggregate rows into commits
    ///
    /// Rows are stably sorted by datetime first, so the first row of each
    /// group carries the commit's authorship metadata and commits come out
    /// in ascending time order.
    pub fn aggregate(&self, mut records: Vec<LineRecord>) -> History {
        records.sort_by(|a, b| a.datetime.cmp(&b.datetime));

        let mut order: Vec<(String, Vec<LineRecord>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for record in &records {
            match index.get(&record.commit) {
                Some(&i) => order[i].1.push(record.clone()),
                None => {
                    index.insert(record.commit.clone(), order.len());
                    order.push((record.commit.clone(), vec![record.clone()]));
                }
            }
        }

        let mut commits = Vec::with_capacity(order.len());
        let mut lines = CommitLines::new();
        for (id, group) in order {
            // Every group holds at least one row by construction
            if let Some(commit) = self.summarize(&id, &group) {
                commits.push(commit);
                lines.insert(id, group);
            }
        }

        log::debug!(
            "aggregated {} rows into {} commits",
            records.len(),
            commits.len()
        );

        History {
            records,
            commits,
            lines,
        }
    }

    fn summarize(&self, id: &str, group: &[LineRecord]) -> Option<Commit> {
        let first = group.first()?;
        let total = group.len();

        let additions = group
            .iter()
            .filter(|r| r.change_kind() == ChangeKind::Added)
            .count();
        let deletions = group
            .iter()
            .filter(|r| r.change_kind() == ChangeKind::Removed)
            .count();

        let mut seen = HashSet::new();
        let files: Vec<String> = group
            .iter()
            .filter(|r| seen.insert(r.file.as_str()))
            .map(|r| r.file.clone())
            .collect();

        let max_depth = group.iter().map(|r| r.depth).max().unwrap_or(0);
        let max_length = group.iter().map(|r| r.length).max().unwrap_or(0);
        let avg_depth = mean(group.iter().map(|r| r.depth));
        let avg_length = mean(group.iter().map(|r| r.length));

        let datetime = first.datetime;
        let hour = datetime.hour();
        let day_of_week = datetime.weekday().num_days_from_sunday();

        Some(Commit {
            id: id.to_string(),
            url: format!("{}{}", self.url_prefix, id),
            author: first.author.clone(),
            date: first.date,
            time: first.time.clone(),
            timezone: first.timezone.clone(),
            datetime,
            hour_frac: f64::from(hour) + f64::from(datetime.minute()) / 60.0,
            total_lines: total,
            additions,
            deletions,
            net_change: additions as i64 - deletions as i64,
            file_count: files.len(),
            files,
            max_depth,
            avg_depth,
            max_length,
            avg_length,
            hour,
            day_of_week,
            is_weekend: day_of_week == 0 || day_of_week == 6,
        })
    }
}

fn mean(values: impl Iterator<Item = u32>) -> f64 {
    let (sum, count) = values.fold((0u64, 0usize), |(s, c), v| (s + u64::from(v), c + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum as f64 / count as f64
    }
}

//! Summary statistics for the meta page header

use std::collections::HashMap;
use std::fmt;

use chrono::Timelike;

use crate::model::{Commit, LineRecord};

/// Coarse period of the day a line was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPeriod {
    pub fn from_hour(hour: u32) -> Self {
        if !(5..21).contains(&hour) {
            DayPeriod::Night
        } else if hour < 12 {
            DayPeriod::Morning
        } else if hour < 17 {
            DayPeriod::Afternoon
        } else {
            DayPeriod::Evening
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayPeriod::Morning => "Morning",
            DayPeriod::Afternoon => "Afternoon",
            DayPeriod::Evening => "Evening",
            DayPeriod::Night => "Night",
        }
    }

    /// "at Night", "in the Morning", ...
    pub fn phrase(self) -> String {
        match self {
            DayPeriod::Night => format!("at {}", self.label()),
            _ => format!("in the {}", self.label()),
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Headline numbers over the whole dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_loc: usize,
    pub commits: usize,
    pub files: usize,
    /// Longest file and its line count (first one wins on ties)
    pub longest_file: Option<(String, usize)>,
    pub mean_file_length: f64,
    pub mean_line_length: f64,
    pub peak_period: Option<DayPeriod>,
}

impl Summary {
    pub fn compute(records: &[LineRecord], commits: &[Commit]) -> Self {
        // Files in first-seen order
        let mut file_index: HashMap<&str, usize> = HashMap::new();
        let mut file_lengths: Vec<(&str, usize)> = Vec::new();
        for record in records {
            match file_index.get(record.file.as_str()) {
                Some(&i) => file_lengths[i].1 += 1,
                None => {
                    file_index.insert(record.file.as_str(), file_lengths.len());
                    file_lengths.push((record.file.as_str(), 1));
                }
            }
        }

        let longest_file = file_lengths
            .iter()
            .fold(None::<(&str, usize)>, |best, &(name, len)| match best {
                Some((_, best_len)) if best_len >= len => best,
                _ => Some((name, len)),
            })
            .map(|(name, len)| (name.to_string(), len));

        let mean_file_length = if file_lengths.is_empty() {
            0.0
        } else {
            records.len() as f64 / file_lengths.len() as f64
        };

        let mean_line_length = if records.is_empty() {
            0.0
        } else {
            records.iter().map(|r| f64::from(r.length)).sum::<f64>() / records.len() as f64
        };

        let mut period_counts: Vec<(DayPeriod, usize)> = Vec::new();
        for record in records {
            let period = DayPeriod::from_hour(record.datetime.hour());
            match period_counts.iter_mut().find(|(p, _)| *p == period) {
                Some((_, count)) => *count += 1,
                None => period_counts.push((period, 1)),
            }
        }
        let peak_period = period_counts
            .iter()
            .fold(None::<(DayPeriod, usize)>, |best, &(period, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((period, count)),
            })
            .map(|(period, _)| period);

        Self {
            total_loc: records.len(),
            commits: commits.len(),
            files: file_lengths.len(),
            longest_file,
            mean_file_length,
            mean_line_length,
            peak_period,
        }
    }

    /// (term, definition) pairs in display order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Total LOC", self.total_loc.to_string()),
            ("Commits", self.commits.to_string()),
            ("# Files", self.files.to_string()),
            (
                "Longest File",
                self.longest_file
                    .as_ref()
                    .map(|(_, len)| format!("{} lines", len))
                    .unwrap_or_else(|| "-".to_string()),
            ),
            (
                "Mean File Length",
                format!("{} lines", self.mean_file_length.round()),
            ),
            (
                "Mean Line Length",
                format!("{:.1} chars", self.mean_line_length),
            ),
            (
                "Peak Work Time",
                self.peak_period
                    .map(DayPeriod::phrase)
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]
    }
}

//! Language and file breakdowns of a set of line records

use std::collections::{HashMap, HashSet};

use crate::model::LineRecord;

/// Share of one language in a set of lines
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageShare {
    pub language: String,
    pub count: usize,
    pub proportion: f64,
}

impl LanguageShare {
    /// "12 lines (33.3%)"
    pub fn describe(&self) -> String {
        format!("{} lines ({})", self.count, format_percent(self.proportion))
    }
}

/// Count lines per language, in first-seen order
pub fn language_breakdown(lines: &[&LineRecord]) -> Vec<LanguageShare> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for line in lines {
        match counts.iter_mut().find(|(lang, _)| *lang == line.language) {
            Some((_, count)) => *count += 1,
            None => counts.push((line.language.as_str(), 1)),
        }
    }

    let total = lines.len() as f64;
    counts
        .into_iter()
        .map(|(language, count)| LanguageShare {
            language: language.to_string(),
            count,
            proportion: count as f64 / total,
        })
        .collect()
}

/// Percentage with at most one decimal, trailing zeros trimmed ("50%", "33.3%")
pub fn format_percent(proportion: f64) -> String {
    let text = format!("{:.1}", proportion * 100.0);
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{}%", text)
}

/// The lines of one file, as language tags in line order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    pub name: String,
    pub languages: Vec<String>,
}

impl FileGroup {
    pub fn line_count(&self) -> usize {
        self.languages.len()
    }
}

/// Group lines by file, largest file first (ties keep first-seen order)
pub fn group_by_file(lines: &[&LineRecord]) -> Vec<FileGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<FileGroup> = Vec::new();
    for line in lines {
        match index.get(line.file.as_str()) {
            Some(&i) => groups[i].languages.push(line.language.clone()),
            None => {
                index.insert(line.file.as_str(), groups.len());
                groups.push(FileGroup {
                    name: line.file.clone(),
                    languages: vec![line.language.clone()],
                });
            }
        }
    }
    groups.sort_by(|a, b| b.line_count().cmp(&a.line_count()));
    groups
}

/// Ordinal color assignment: each new key takes the next palette slot
#[derive(Debug, Clone, Default)]
pub struct OrdinalColors {
    assigned: HashMap<String, usize>,
}

impl OrdinalColors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette slot for `key`, assigning one on first sight
    ///
    /// Slots grow without bound; callers wrap them onto their palette.
    pub fn slot(&mut self, key: &str) -> usize {
        let next = self.assigned.len();
        *self.assigned.entry(key.to_string()).or_insert(next)
    }

    pub fn peek(&self, key: &str) -> Option<usize> {
        self.assigned.get(key).copied()
    }
}

/// What a keyed update did to the displayed file groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinSummary {
    pub entered: Vec<String>,
    pub updated: Vec<String>,
    pub exited: Vec<String>,
}

/// File groups currently on display, updated by a join on file path
#[derive(Debug, Clone, Default)]
pub struct FileDisplay {
    groups: Vec<FileGroup>,
    last_join: JoinSummary,
}

impl FileDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed groups, recording entered/updated/exited keys
    pub fn update(&mut self, groups: Vec<FileGroup>) -> &JoinSummary {
        let previous: HashSet<&str> = self.groups.iter().map(|g| g.name.as_str()).collect();
        let next: HashSet<&str> = groups.iter().map(|g| g.name.as_str()).collect();

        let mut summary = JoinSummary::default();
        for group in &groups {
            if previous.contains(group.name.as_str()) {
                summary.updated.push(group.name.clone());
            } else {
                summary.entered.push(group.name.clone());
            }
        }
        summary.exited = self
            .groups
            .iter()
            .filter(|g| !next.contains(g.name.as_str()))
            .map(|g| g.name.clone())
            .collect();

        self.groups = groups;
        self.last_join = summary;
        &self.last_join
    }

    pub fn groups(&self) -> &[FileGroup] {
        &self.groups
    }

    /// Was this file added by the most recent update?
    pub fn is_new(&self, name: &str) -> bool {
        self.last_join.entered.iter().any(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use insta::assert_snapshot;

    use super::*;

    fn line(file: &str, language: &str) -> LineRecord {
        let datetime = DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z").unwrap();
        LineRecord {
            commit: "c".to_string(),
            file: file.to_string(),
            line: 1,
            depth: 0,
            length: 1,
            date: datetime,
            time: String::new(),
            timezone: String::new(),
            datetime,
            author: String::new(),
            change: String::new(),
            language: language.to_string(),
        }
    }

    fn sample() -> Vec<LineRecord> {
        vec![
            line("index.html", "html"),
            line("main.js", "js"),
            line("main.js", "js"),
            line("style.css", "css"),
            line("main.js", "js"),
            line("index.html", "css"),
        ]
    }

    #[test]
    fn test_language_breakdown_first_seen_order() {
        let rows = sample();
        let refs: Vec<&LineRecord> = rows.iter().collect();
        let text = language_breakdown(&refs)
            .iter()
            .map(|s| format!("{} {}", s.language.to_uppercase(), s.describe()))
            .collect::<Vec<_>>()
            .join("\n");
        assert_snapshot!(text, @r"
        HTML 1 lines (16.7%)
        JS 3 lines (50%)
        CSS 2 lines (33.3%)
        ");
    }

    #[test]
    fn test_language_breakdown_empty() {
        assert!(language_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1.0), "100%");
        assert_eq!(format_percent(0.5), "50%");
        assert_eq!(format_percent(0.125), "12.5%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn test_group_by_file_orders_by_size() {
        let rows = sample();
        let refs: Vec<&LineRecord> = rows.iter().collect();
        let groups = group_by_file(&refs);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["main.js", "index.html", "style.css"]);
        assert_eq!(groups[1].languages, vec!["html", "css"]);
    }

    #[test]
    fn test_ordinal_colors_are_stable() {
        let mut colors = OrdinalColors::new();
        assert_eq!(colors.slot("js"), 0);
        assert_eq!(colors.slot("css"), 1);
        assert_eq!(colors.slot("js"), 0);
        assert_eq!(colors.peek("html"), None);
        assert_eq!(colors.slot("html"), 2);
    }

    #[test]
    fn test_file_display_join() {
        let group = |name: &str, n: usize| FileGroup {
            name: name.to_string(),
            languages: vec!["js".to_string(); n],
        };
        let mut display = FileDisplay::new();
        let first = display.update(vec![group("a.js", 2), group("b.js", 1)]).clone();
        assert_eq!(first.entered, vec!["a.js", "b.js"]);
        assert!(first.exited.is_empty());

        let second = display.update(vec![group("a.js", 3), group("c.js", 1)]).clone();
        assert_eq!(second.entered, vec!["c.js"]);
        assert_eq!(second.updated, vec!["a.js"]);
        assert_eq!(second.exited, vec!["b.js"]);
        assert!(display.is_new("c.js"));
        assert!(!display.is_new("a.js"));
        assert_eq!(display.groups()[0].line_count(), 3);
    }
}

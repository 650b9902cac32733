//! Year pie chart layout

use std::f64::consts::TAU;

use crate::model::ProjectRecord;

/// One pie slice (angles in radians, clockwise from 12 o'clock)
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: usize,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Slice {
    pub fn contains_angle(&self, angle: f64) -> bool {
        self.start_angle <= angle && angle < self.end_angle
    }
}

/// Highlight state of a slice and its legend entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceState {
    Normal,
    Selected,
    Dimmed,
}

/// Slices of the project count per year
///
/// Slices come back in first-seen year order; angles are laid out largest
/// value first (ties by order), so the biggest year starts at 12 o'clock.
pub fn year_slices(projects: &[ProjectRecord]) -> Vec<Slice> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for project in projects {
        match counts.iter_mut().find(|(year, _)| *year == project.year) {
            Some((_, n)) => *n += 1,
            None => counts.push((project.year.as_str(), 1)),
        }
    }

    let total: usize = counts.iter().map(|(_, n)| n).sum();
    let mut layout_order: Vec<usize> = (0..counts.len()).collect();
    layout_order.sort_by(|&a, &b| counts[b].1.cmp(&counts[a].1));

    let mut angles = vec![(0.0, 0.0); counts.len()];
    let mut start = 0.0;
    for &i in &layout_order {
        let end = if total == 0 {
            start
        } else {
            start + TAU * counts[i].1 as f64 / total as f64
        };
        angles[i] = (start, end);
        start = end;
    }

    counts
        .into_iter()
        .zip(angles)
        .map(|((label, value), (start_angle, end_angle))| Slice {
            label: label.to_string(),
            value,
            start_angle,
            end_angle,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, year: &str) -> ProjectRecord {
        serde_json::from_value(serde_json::json!({ "title": title, "year": year })).unwrap()
    }

    fn catalog() -> Vec<ProjectRecord> {
        vec![
            project("a", "2023"),
            project("b", "2024"),
            project("c", "2024"),
            project("d", "2025"),
            project("e", "2024"),
        ]
    }

    #[test]
    fn test_slices_in_first_seen_order() {
        let slices = year_slices(&catalog());
        let labels: Vec<(&str, usize)> = slices.iter().map(|s| (s.label.as_str(), s.value)).collect();
        assert_eq!(labels, vec![("2023", 1), ("2024", 3), ("2025", 1)]);
    }

    #[test]
    fn test_largest_slice_starts_at_top() {
        let slices = year_slices(&catalog());
        assert_eq!(slices[1].start_angle, 0.0);
        assert!((slices[1].end_angle - 0.6 * TAU).abs() < 1e-9);
        assert!((slices[2].end_angle - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_slices_cover_circle_without_overlap() {
        let slices = year_slices(&catalog());
        let probe = 1.0;
        let hits = slices.iter().filter(|s| s.contains_angle(probe)).count();
        assert_eq!(hits, 1);
        let total: f64 = slices.iter().map(|s| s.end_angle - s.start_angle).sum();
        assert!((total - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_empty_catalog_has_no_slices() {
        assert!(year_slices(&[]).is_empty());
    }
}

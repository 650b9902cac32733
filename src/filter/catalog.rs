//! Project catalog filter: free-text query AND selected year

use crate::chart::{Slice, SliceState};
use crate::model::ProjectRecord;

/// "4 projects"
pub fn project_count_label(count: usize) -> String {
    format!("{} projects", count)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub query: String,
    /// Index of the selected pie slice
    pub selected: Option<usize>,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a slice, or clear the selection if it is already selected
    pub fn toggle_year(&mut self, index: usize) {
        self.selected = if self.selected == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Projects passing both the query and the year selection
    pub fn apply<'a>(&self, projects: &'a [ProjectRecord], slices: &[Slice]) -> Vec<&'a ProjectRecord> {
        let year = self
            .selected
            .and_then(|i| slices.get(i))
            .map(|s| s.label.as_str());
        projects
            .iter()
            .filter(|p| p.matches(&self.query))
            .filter(|p| year.is_none_or(|y| p.year == y))
            .collect()
    }

    pub fn slice_state(&self, index: usize) -> SliceState {
        match self.selected {
            None => SliceState::Normal,
            Some(i) if i == index => SliceState::Selected,
            Some(_) => SliceState::Dimmed,
        }
    }
}

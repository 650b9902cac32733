//! Projects View - project catalog with search and a year pie filter

mod input;
mod render;


use crate::chart::{Slice, SliceState, year_slices};
use crate::filter::CatalogFilter;
use crate::model::ProjectRecord;

/// Input mode for Projects View
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectsInputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Live search query input
    Search,
}

/// Projects View state
#[derive(Debug, Default)]
pub struct ProjectsView {
    projects: Vec<ProjectRecord>,
    /// Computed once from the full catalog
    slices: Vec<Slice>,
    filter: CatalogFilter,
    /// Current input mode
    pub input_mode: ProjectsInputMode,
    /// Legend entry under the cursor
    legend_cursor: usize,
    /// Index of the first card shown
    scroll_offset: usize,
}

impl ProjectsView {
    /// Create a new ProjectsView with an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog; the query survives, the year selection does not
    pub fn set_projects(&mut self, projects: Vec<ProjectRecord>) {
        self.slices = year_slices(&projects);
        self.projects = projects;
        self.filter.selected = None;
        self.legend_cursor = 0;
        self.scroll_offset = 0;
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn query(&self) -> &str {
        &self.filter.query
    }

    pub fn selected_year(&self) -> Option<&str> {
        self.filter
            .selected
            .and_then(|i| self.slices.get(i))
            .map(|s| s.label.as_str())
    }

    pub fn slice_state(&self, index: usize) -> SliceState {
        self.filter.slice_state(index)
    }

    pub fn legend_cursor(&self) -> usize {
        self.legend_cursor
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Projects passing the query and the year selection
    pub fn visible(&self) -> Vec<&ProjectRecord> {
        self.filter.apply(&self.projects, &self.slices)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
        self.scroll_offset = 0;
    }

    /// Toggle the year of slice `index` as the filter
    pub fn toggle_year(&mut self, index: usize) {
        if index < self.slices.len() {
            self.filter.toggle_year(index);
            self.scroll_offset = 0;
        }
    }

    pub fn move_legend_left(&mut self) {
        self.legend_cursor = self.legend_cursor.saturating_sub(1);
    }

    pub fn move_legend_right(&mut self) {
        if self.legend_cursor + 1 < self.slices.len() {
            self.legend_cursor += 1;
        }
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.visible().len() {
            self.scroll_offset += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.visible().len().saturating_sub(1);
    }

    /// Start search input mode (keeps the current query for editing)
    pub fn start_search(&mut self) {
        self.input_mode = ProjectsInputMode::Search;
    }
}

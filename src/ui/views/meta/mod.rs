//! Meta View - commit history visualization
//!
//! Owns every piece of page state (scales, cutoff, brush, hover) and
//! recomputes the visible [`Selection`] in one place.

mod input;
mod render;

#[cfg(test)]
mod tests;

use crate::chart::{
    BrushRect, FileDisplay, LanguageShare, OrdinalColors, ScatterPlot, USABLE, group_by_file,
    language_breakdown,
};
use crate::data::Summary;
use crate::filter::{Narrative, Selection, TimeFilter};
use crate::model::{Commit, History};

/// Plot-space distance moved by one cursor key press
pub const CURSOR_STEP: f64 = 10.0;
/// Plot-space distance moved by one fast cursor key press
pub const CURSOR_STEP_FAST: f64 = 50.0;

/// Actions that MetaView can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaAction {
    /// No action needed
    None,
    /// Copy a commit link to the clipboard
    CopyLink(String),
}

/// Meta View state
#[derive(Debug, Default)]
pub struct MetaView {
    history: History,
    summary: Option<Summary>,
    /// `None` while there are no commits
    filter: Option<TimeFilter>,
    selection: Option<Selection>,
    plot: ScatterPlot,
    narrative: Narrative,
    /// Plot cursor in plot space
    cursor: (f64, f64),
    /// Tooltip stays hidden until the cursor first moves
    interacted: bool,
    hovered: Option<usize>,
    /// Set while a brush is being dragged
    brush_anchor: Option<(f64, f64)>,
    brush: Option<BrushRect>,
    /// Brushed commit indices, ascending
    brushed: Vec<usize>,
    breakdown: Vec<LanguageShare>,
    colors: OrdinalColors,
    files: FileDisplay,
}

fn plot_center() -> (f64, f64) {
    (
        USABLE.left + USABLE.width() / 2.0,
        USABLE.top + USABLE.height() / 2.0,
    )
}

impl MetaView {
    /// Create a new MetaView with no data
    pub fn new() -> Self {
        Self {
            cursor: plot_center(),
            ..Self::default()
        }
    }

    /// Replace the dataset and reset all interaction state
    pub fn set_history(&mut self, history: History) {
        self.summary = (!history.is_empty())
            .then(|| Summary::compute(&history.records, &history.commits));
        self.filter = TimeFilter::new(&history.commits);
        self.narrative = Narrative::new(history.commits.len());
        self.history = history;
        self.cursor = plot_center();
        self.interacted = false;
        self.brush_anchor = None;
        self.brush = None;
        self.apply_cutoff();
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn commits(&self) -> &[Commit] {
        &self.history.commits
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn filter(&self) -> Option<&TimeFilter> {
        self.filter.as_ref()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn plot(&self) -> &ScatterPlot {
        &self.plot
    }

    pub fn narrative(&self) -> &Narrative {
        &self.narrative
    }

    pub fn cursor(&self) -> (f64, f64) {
        self.cursor
    }

    /// Hovered commit, once the cursor has moved
    pub fn hovered_commit(&self) -> Option<&Commit> {
        if !self.interacted {
            return None;
        }
        self.hovered.and_then(|i| self.history.commits.get(i))
    }

    pub fn brush(&self) -> Option<&BrushRect> {
        self.brush.as_ref()
    }

    pub fn is_brushing(&self) -> bool {
        self.brush_anchor.is_some()
    }

    pub fn brushed(&self) -> &[usize] {
        &self.brushed
    }

    pub fn breakdown(&self) -> &[LanguageShare] {
        &self.breakdown
    }

    pub fn files(&self) -> &FileDisplay {
        &self.files
    }

    /// Palette slot of a language, if one has been assigned
    pub fn color_slot(&self, language: &str) -> Option<usize> {
        self.colors.peek(language)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Recomputation
    // ─────────────────────────────────────────────────────────────────────────

    /// Recompute the selection for the current cutoff and every view fed by it
    pub fn apply_cutoff(&mut self) {
        let commits = &self.history.commits;
        let selection = self.filter.as_ref().map(|f| f.select(commits));
        let visible = selection.as_ref().map_or(&[][..], |s| s.visible.as_slice());
        self.plot = ScatterPlot::fit(commits, visible);

        let lines = match &selection {
            Some(s) => self.history.lines_of(s.commits(commits)),
            None => Vec::new(),
        };
        let groups = group_by_file(&lines);
        for group in &groups {
            for language in &group.languages {
                self.colors.slot(language);
            }
        }
        let join = self.files.update(groups);
        log::debug!(
            "files: {} entered, {} updated, {} exited",
            join.entered.len(),
            join.updated.len(),
            join.exited.len()
        );

        self.selection = selection;
        self.refresh_hover();
        self.refresh_brush();
    }

    fn refresh_hover(&mut self) {
        self.hovered = self.plot.hit_test(self.cursor.0, self.cursor.1);
    }

    /// Recompute the brushed set and the language breakdown
    fn refresh_brush(&mut self) {
        self.brushed = self.plot.brushed(self.brush.as_ref());
        let commits = &self.history.commits;
        let lines = if self.brush.is_some() {
            self.history
                .lines_of(self.brushed.iter().filter_map(|&i| commits.get(i)))
        } else {
            match &self.selection {
                Some(s) => self.history.lines_of(s.commits(commits)),
                None => Vec::new(),
            }
        };
        self.breakdown = language_breakdown(&lines);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Cursor and brush
    // ─────────────────────────────────────────────────────────────────────────

    /// Move the plot cursor, dragging the brush when one is in progress
    pub fn move_cursor(&mut self, dx: f64, dy: f64) {
        self.cursor = USABLE.clamp(self.cursor.0 + dx, self.cursor.1 + dy);
        self.interacted = true;
        self.refresh_hover();
        if let Some(anchor) = self.brush_anchor {
            self.brush = BrushRect::from_corners(anchor, self.cursor);
            self.refresh_brush();
        }
    }

    /// Start a brush at the cursor, or finish the one in progress
    pub fn toggle_brush(&mut self) {
        if self.brush_anchor.take().is_none() {
            self.brush_anchor = Some(self.cursor);
            self.brush = None;
            self.refresh_brush();
        }
    }

    /// Drop the brush; returns whether there was one
    pub fn clear_brush(&mut self) -> bool {
        let had_brush = self.brush.is_some() || self.brush_anchor.is_some();
        self.brush_anchor = None;
        self.brush = None;
        if had_brush {
            self.refresh_brush();
        }
        had_brush
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Time filter drivers
    // ─────────────────────────────────────────────────────────────────────────

    /// Move the slider to `progress`; the story leaves its active step
    pub fn set_progress(&mut self, progress: u8) {
        if let Some(filter) = self.filter.as_mut() {
            filter.set_progress(progress);
            self.narrative.reset();
            self.apply_cutoff();
        }
    }

    /// Nudge the slider by `delta`
    pub fn step_progress(&mut self, delta: i16) {
        if let Some(filter) = self.filter.as_mut() {
            filter.step_progress(delta);
            self.narrative.reset();
            self.apply_cutoff();
        }
    }

    /// Activate a narrative step (entered through `Narrative`)
    fn enter_step(&mut self, step: Option<usize>) {
        let Some(step) = step else {
            return;
        };
        if let Some(filter) = self.filter.as_mut()
            && filter.set_step(&self.history.commits, step).is_some()
        {
            self.apply_cutoff();
        }
    }

    pub fn next_step(&mut self) {
        let step = self.narrative.next();
        self.enter_step(step);
    }

    pub fn prev_step(&mut self) {
        let step = self.narrative.prev();
        self.enter_step(step);
    }

    /// Story text for the active step
    pub fn active_step_text(&self) -> Option<String> {
        let step = self.narrative.active()?;
        let commit = self.history.commits.get(step)?;
        Some(crate::filter::step_text(step, commit))
    }
}

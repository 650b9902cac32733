//! Scroll narrative: one step per commit, at most one active

use crate::model::Commit;

/// Narrative text for the step of `commit` at position `index`
pub fn step_text(index: usize, commit: &Commit) -> String {
    let moment = commit.datetime.format("%A, %B %-d, %Y at %-I:%M %p");
    let what = if index > 0 {
        "another glorious commit"
    } else {
        "my first commit, and it was glorious"
    };
    format!(
        "On {}, I made {}. I edited {} lines across {} files. \
         Then I looked over all I had done victoriously, and with great triumph. \
         I did not think about the next long assignment, for I had earned my rest.",
        moment, what, commit.total_lines, commit.file_count
    )
}

/// Which narrative step is active
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Narrative {
    len: usize,
    active: Option<usize>,
}

impl Narrative {
    pub fn new(len: usize) -> Self {
        Self { len, active: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Activate `step`; returns it when this is a change (a step "enter")
    pub fn enter(&mut self, step: usize) -> Option<usize> {
        if step >= self.len || self.active == Some(step) {
            return None;
        }
        self.active = Some(step);
        Some(step)
    }

    pub fn next(&mut self) -> Option<usize> {
        let step = self.active.map_or(0, |s| s + 1);
        self.enter(step)
    }

    pub fn prev(&mut self) -> Option<usize> {
        let step = self.active?.checked_sub(1)?;
        self.enter(step)
    }

    /// Leave narrative mode (the slider took over)
    pub fn reset(&mut self) {
        self.active = None;
    }
}

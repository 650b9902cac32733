//! Time filter: a cutoff instant and the commits at or before it

use chrono::{DateTime, FixedOffset};

use crate::chart::TimeScale;
use crate::model::Commit;

/// Slider positions run from 0 to this value
pub const SLIDER_MAX: u8 = 100;

/// Indices of commits with `datetime <= cutoff`, in commit order
pub fn visible_commits(commits: &[Commit], cutoff: DateTime<FixedOffset>) -> Vec<usize> {
    commits
        .iter()
        .enumerate()
        .filter(|(_, c)| c.datetime <= cutoff)
        .map(|(i, _)| i)
        .collect()
}

/// "February 25, 2025 at 2:03 PM"
pub fn display_cutoff(cutoff: &DateTime<FixedOffset>) -> String {
    cutoff.format("%B %-d, %Y at %-I:%M %p").to_string()
}

/// The currently visible subset, shared by every view's redraw
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub cutoff: DateTime<FixedOffset>,
    /// Indices into the full commit list, ascending
    pub visible: Vec<usize>,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.visible.binary_search(&index).is_ok()
    }

    pub fn commits<'a>(&'a self, all: &'a [Commit]) -> impl Iterator<Item = &'a Commit> + 'a {
        self.visible.iter().filter_map(move |&i| all.get(i))
    }
}

/// Cutoff state driven by the slider or by narrative steps
#[derive(Debug, Clone, PartialEq)]
pub struct TimeFilter {
    /// Commit time extent → [0, SLIDER_MAX]
    scale: TimeScale,
    progress: u8,
    cutoff: DateTime<FixedOffset>,
}

impl TimeFilter {
    /// Filter over `commits` with the slider at its maximum
    ///
    /// Returns `None` when there are no commits.
    pub fn new(commits: &[Commit]) -> Option<Self> {
        let scale = TimeScale::from_extent(
            commits.iter().map(|c| c.datetime),
            (0.0, f64::from(SLIDER_MAX)),
        )?;
        let mut filter = Self {
            scale,
            progress: SLIDER_MAX,
            cutoff: scale.extent().1,
        };
        filter.set_progress(SLIDER_MAX);
        Some(filter)
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn cutoff(&self) -> DateTime<FixedOffset> {
        self.cutoff
    }

    /// Move the slider; the cutoff becomes the inverse-scaled instant
    pub fn set_progress(&mut self, progress: u8) -> DateTime<FixedOffset> {
        self.progress = progress.min(SLIDER_MAX);
        self.cutoff = self.scale.invert(f64::from(self.progress));
        log::debug!("slider at {} → cutoff {}", self.progress, self.cutoff);
        self.cutoff
    }

    /// Nudge the slider by `delta` positions (clamped)
    pub fn step_progress(&mut self, delta: i16) -> DateTime<FixedOffset> {
        let next = (i16::from(self.progress) + delta).clamp(0, i16::from(SLIDER_MAX));
        self.set_progress(next as u8)
    }

    /// A narrative step became active: cut off at its commit's instant
    ///
    /// The slider follows to the nearest position so both drivers agree on
    /// what is shown.
    pub fn set_step(&mut self, commits: &[Commit], step: usize) -> Option<DateTime<FixedOffset>> {
        let commit = commits.get(step)?;
        self.cutoff = commit.datetime;
        self.progress = self.scale.map(&commit.datetime).round().clamp(0.0, f64::from(SLIDER_MAX)) as u8;
        log::debug!("narrative step {} → cutoff {}", step, self.cutoff);
        Some(self.cutoff)
    }

    /// Recompute the visible selection for the current cutoff
    pub fn select(&self, commits: &[Commit]) -> Selection {
        Selection {
            cutoff: self.cutoff,
            visible: visible_commits(commits, self.cutoff),
        }
    }
}

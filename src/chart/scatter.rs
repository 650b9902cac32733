//! Scatter plot layout: one point per commit, hover hit-testing, brushing

use super::scale::{LinearScale, SqrtScale, TimeScale};
use crate::model::Commit;

/// Plot coordinate space (y grows downward, like the SVG viewBox)
pub const PLOT_WIDTH: f64 = 1000.0;
pub const PLOT_HEIGHT: f64 = 600.0;

/// Pixel range of point radii
pub const RADIUS_RANGE: (f64, f64) = (2.0, 30.0);

/// Edges of the drawable region inside the plot space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl PlotArea {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Clamp a position into the area
    pub fn clamp(&self, x: f64, y: f64) -> (f64, f64) {
        (x.clamp(self.left, self.right), y.clamp(self.top, self.bottom))
    }
}

/// Margins: top 10, right 10, bottom 30, left 20
pub const USABLE: PlotArea = PlotArea {
    top: 10.0,
    right: PLOT_WIDTH - 10.0,
    bottom: PLOT_HEIGHT - 30.0,
    left: 20.0,
};

/// A laid-out point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    /// Index into the full commit list
    pub commit: usize,
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl ScatterPoint {
    fn contains(&self, x: f64, y: f64) -> bool {
        let (dx, dy) = (x - self.x, y - self.y);
        dx * dx + dy * dy <= self.r * self.r
    }
}

/// Scales and points for the currently visible commits
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    /// `None` while nothing is visible
    pub x: Option<TimeScale>,
    pub y: LinearScale,
    /// Points in draw order (largest first)
    pub points: Vec<ScatterPoint>,
}

impl Default for ScatterPlot {
    fn default() -> Self {
        Self {
            x: None,
            y: hour_scale(),
            points: Vec::new(),
        }
    }
}

fn hour_scale() -> LinearScale {
    LinearScale::new((0.0, 24.0), (USABLE.bottom, USABLE.top))
}

impl ScatterPlot {
    /// Fit scales to `visible` (indices into `commits`) and lay out points
    ///
    /// The x domain and the radius domain follow the visible set; the hour
    /// axis is fixed.
    pub fn fit(commits: &[Commit], visible: &[usize]) -> Self {
        let shown: Vec<(usize, &Commit)> = visible
            .iter()
            .filter_map(|&i| commits.get(i).map(|c| (i, c)))
            .collect();

        let Some(x) = TimeScale::from_extent(
            shown.iter().map(|(_, c)| c.datetime),
            (USABLE.left, USABLE.right),
        ) else {
            return Self::default();
        };
        let y = hour_scale();

        let min_lines = shown.iter().map(|(_, c)| c.total_lines).min().unwrap_or(0);
        let max_lines = shown.iter().map(|(_, c)| c.total_lines).max().unwrap_or(0);
        let r = SqrtScale::new((min_lines as f64, max_lines as f64), RADIUS_RANGE);

        let mut ordered = shown;
        // Stable: equal sizes keep time order
        ordered.sort_by(|a, b| b.1.total_lines.cmp(&a.1.total_lines));

        let points = ordered
            .into_iter()
            .map(|(i, c)| ScatterPoint {
                commit: i,
                x: x.map(&c.datetime),
                y: y.map(c.hour_frac),
                r: r.map(c.total_lines as f64),
            })
            .collect();

        Self {
            x: Some(x),
            y,
            points,
        }
    }

    pub fn point_of(&self, commit: usize) -> Option<&ScatterPoint> {
        self.points.iter().find(|p| p.commit == commit)
    }

    /// Topmost point under `(x, y)`
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        self.points
            .iter()
            .rev()
            .find(|p| p.contains(x, y))
            .map(|p| p.commit)
    }

    /// Commits inside the brush, in ascending commit order
    pub fn brushed(&self, brush: Option<&BrushRect>) -> Vec<usize> {
        let mut selected: Vec<usize> = self
            .points
            .iter()
            .filter(|p| is_commit_selected(brush, (p.x, p.y)))
            .map(|p| p.commit)
            .collect();
        selected.sort_unstable();
        selected
    }
}

/// A normalized, non-degenerate brush rectangle in plot space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BrushRect {
    /// Rectangle spanned by two corners; `None` when it has no area
    pub fn from_corners(a: (f64, f64), b: (f64, f64)) -> Option<Self> {
        let rect = Self {
            x0: a.0.min(b.0),
            y0: a.1.min(b.1),
            x1: a.0.max(b.0),
            y1: a.1.max(b.1),
        };
        (rect.x1 > rect.x0 && rect.y1 > rect.y0).then_some(rect)
    }

    /// Inclusive containment
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x0 <= x && x <= self.x1 && self.y0 <= y && y <= self.y1
    }
}

pub fn is_commit_selected(selection: Option<&BrushRect>, position: (f64, f64)) -> bool {
    selection.is_some_and(|rect| rect.contains(position.0, position.1))
}

/// "3 commits selected" / "No commits selected"
pub fn selection_label(count: usize) -> String {
    if count == 0 {
        "No commits selected".to_string()
    } else {
        format!("{} commits selected", count)
    }
}

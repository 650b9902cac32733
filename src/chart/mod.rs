//! Chart geometry
//!
//! Scales, point layout, hit-testing and brushing for the scatter plot,
//! file and language breakdowns, and the year pie chart. Nothing here
//! draws; the views turn these values into widgets.

mod breakdown;
mod pie;
mod scale;
mod scatter;

pub use breakdown::{
    FileDisplay, FileGroup, JoinSummary, LanguageShare, OrdinalColors, format_percent,
    group_by_file, language_breakdown,
};
pub use pie::{Slice, SliceState, year_slices};
pub use scale::{LinearScale, SqrtScale, TimeScale, hour_label};
pub use scatter::{
    BrushRect, PLOT_HEIGHT, PLOT_WIDTH, PlotArea, RADIUS_RANGE, ScatterPlot, ScatterPoint, USABLE,
    is_commit_selected, selection_label,
};

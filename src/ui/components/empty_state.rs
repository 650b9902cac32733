//! Empty state components
//!
//! Display messages when there's no content to show.

use ratatui::{style::Stylize, text::Line, widgets::Paragraph};

/// Create a centered empty state display
///
/// # Arguments
/// * `title` - Main message to display
/// * `hint` - Optional hint text (displayed in gray)
pub fn empty_state(title: &str, hint: Option<&str>) -> Paragraph<'static> {
    let mut lines = vec![Line::from(""), Line::from(title.to_string()).centered()];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(hint_text.to_string()).dark_gray().centered());
    }

    lines.push(Line::from(""));

    Paragraph::new(lines)
}

/// Empty state for a page whose dataset failed to load or had no rows
pub fn no_data_state(path_hint: &str) -> Paragraph<'static> {
    empty_state(
        "No commit data loaded.",
        Some(&format!("Hint: generate {path_hint}, then press Ctrl+l")),
    )
}

/// Empty state for a search that matched nothing
pub fn no_projects_state() -> Paragraph<'static> {
    empty_state("No projects match.", Some("Hint: Esc clears the search"))
}

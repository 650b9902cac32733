//! Block components for UI rendering
//!
//! Common block patterns used across pages.

use ratatui::{
    style::Style,
    text::Line,
    widgets::{Block, Borders},
};

use crate::ui::theme::Palette;

/// Create a block with title and specified borders
pub fn titled_block<'a>(title: Line<'a>, borders: Borders) -> Block<'a> {
    Block::default().borders(borders).title(title)
}

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    titled_block(title, Borders::ALL)
}

/// Bordered block painted with the active palette
pub fn panel<'a>(title: Line<'a>, palette: &Palette) -> Block<'a> {
    bordered_block(title)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().fg(palette.fg).bg(palette.bg))
}

/// Bordered block whose title carries an optional notification line
pub fn panel_with_notification<'a>(
    title: Line<'a>,
    notification: Option<Line<'a>>,
    palette: &Palette,
) -> Block<'a> {
    let block = panel(title, palette);
    match notification {
        Some(line) => block.title(line),
        None => block,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColorScheme;

    #[test]
    fn test_bordered_block() {
        let title = Line::from("Test");
        let _block = bordered_block(title);
        // Block is created without panic
    }

    #[test]
    fn test_panel_with_and_without_notification() {
        let palette = Palette::for_scheme(ColorScheme::Dark);
        let _plain = panel_with_notification(Line::from("Meta"), None, &palette);
        let _noted =
            panel_with_notification(Line::from("Meta"), Some(Line::from(" | Copied")), &palette);
    }
}

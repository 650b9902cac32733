//! Help panel widget
//!
//! Lists every key binding from `keys`, one section per page.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::keys;
use crate::ui::theme::Palette;

/// Sections shown in the help panel, in order
pub const HELP_SECTIONS: &[(&str, &[keys::KeyBindEntry])] = &[
    ("Global", keys::GLOBAL_KEYS),
    ("Meta", keys::META_KEYS),
    ("Projects", keys::PROJECTS_KEYS),
    ("Search Input", keys::INPUT_KEYS),
];

/// Build all help panel lines
pub fn build_help_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Key bindings:".bold()), Line::from("")];

    for (title, entries) in HELP_SECTIONS {
        lines.push(Line::from(format!("{title}:")).underlined());
        for entry in *entries {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:12}", entry.key), Style::default().fg(Color::Yellow)),
                Span::styled(entry.description.to_string(), Style::default().fg(palette.fg)),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines
}

/// Render help content showing key bindings.
///
/// `scroll` is the vertical scroll offset (0 = top); ratatui clamps values
/// past the end of the content.
pub fn render_help_panel(frame: &mut Frame, area: Rect, scroll: u16, palette: &Palette) {
    let title = Line::from(" folio - Help ").bold().centered();

    frame.render_widget(
        Paragraph::new(build_help_lines(palette))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(palette.border)),
            )
            .style(Style::default().fg(palette.fg).bg(palette.bg))
            .scroll((scroll, 0)),
        area,
    );
}

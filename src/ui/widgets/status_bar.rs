//! Status bar widget
//!
//! Key hints rendered as colored badges along the bottom rows. Hints wrap
//! onto a second row when the terminal is too narrow.

use ratatui::{
    Frame,
    prelude::*,
    text::Line,
    widgets::{Paragraph, Wrap},
};

use crate::keys::KeyHint;

fn badge(hint: &KeyHint) -> String {
    format!(" [{}] {} ", hint.key, hint.label)
}

/// Build a status bar line from key hints
pub fn build_status_bar(hints: &[KeyHint]) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            badge(hint),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Rows needed to show `hints` at `width` (0 when there is nothing to show)
pub fn status_hints_height(hints: &[KeyHint], width: u16) -> u16 {
    if hints.is_empty() || width == 0 {
        return 0;
    }
    let width = usize::from(width);
    let mut rows = 1;
    let mut used = 0;
    for hint in hints {
        let w = badge(hint).chars().count();
        let needed = if used == 0 { w } else { w + 1 };
        if used > 0 && used + needed > width {
            rows += 1;
            used = w;
        } else {
            used += needed;
        }
    }
    rows.min(2)
}

/// Render the hints at the bottom of the screen
pub fn render_status_hints(frame: &mut Frame, hints: &[KeyHint]) {
    let area = frame.area();
    let height = status_hints_height(hints, area.width);
    if height == 0 || area.height <= height {
        return;
    }

    let status_area = Rect {
        x: area.x,
        y: area.y + area.height - height,
        width: area.width,
        height,
    };
    frame.render_widget(
        Paragraph::new(build_status_bar(hints)).wrap(Wrap { trim: true }),
        status_area,
    );
}

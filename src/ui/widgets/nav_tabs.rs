//! Page navigation bar
//!
//! One row at the top of the screen: page tabs on the left, the active
//! color scheme on the right.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Tabs},
};

use crate::app::View;
use crate::model::ColorScheme;
use crate::ui::theme::Palette;

pub const NAV_HEIGHT: u16 = 1;

const PAGES: [(View, &str); 3] = [
    (View::Projects, "Projects"),
    (View::Meta, "Meta"),
    (View::Help, "Help"),
];

fn tab_index(view: View) -> usize {
    PAGES.iter().position(|(v, _)| *v == view).unwrap_or(0)
}

pub fn render_nav_tabs(
    frame: &mut Frame,
    area: Rect,
    current: View,
    scheme: ColorScheme,
    palette: &Palette,
) {
    let scheme_label = format!(" theme: {} ", scheme);
    let [tabs_area, scheme_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(scheme_label.len() as u16),
    ])
    .areas(area);

    let tabs = Tabs::new(PAGES.iter().map(|(_, title)| Line::from(*title)))
        .select(tab_index(current))
        .style(Style::default().fg(palette.muted).bg(palette.bg))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    frame.render_widget(tabs, tabs_area);
    frame.render_widget(
        Paragraph::new(scheme_label).style(Style::default().fg(palette.muted).bg(palette.bg)),
        scheme_area,
    );
}

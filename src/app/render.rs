//! Rendering logic for the application

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
};

use super::state::{App, View};
use crate::keys::{self, HintContext, KeyHint};
use crate::ui::theme::Palette;
use crate::ui::widgets::{
    NAV_HEIGHT, render_error_banner, render_help_panel, render_nav_tabs, render_status_hints,
    status_hints_height,
};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let palette = Palette::for_scheme(self.color_scheme);
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().fg(palette.fg).bg(palette.bg)),
            area,
        );

        let hints = self.current_hints();
        let sb_height = status_hints_height(&hints, area.width);
        let [nav_area, main_area, _] = Layout::vertical([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(sb_height),
        ])
        .areas(area);

        render_nav_tabs(
            frame,
            nav_area,
            self.current_view,
            self.color_scheme,
            &palette,
        );

        let notification = self.notification.as_ref().filter(|n| !n.is_expired());
        match self.current_view {
            View::Projects => {
                self.projects_view
                    .render(frame, main_area, notification, &palette)
            }
            View::Meta => self
                .meta_view
                .render(frame, main_area, notification, &palette),
            View::Help => render_help_panel(frame, main_area, self.help_scroll, &palette),
        }

        render_status_hints(frame, &hints);

        // Errors are always shown prominently, above the status bar
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error, sb_height);
        }
    }

    /// Hints for the current page and its state
    pub(crate) fn current_hints(&self) -> Vec<KeyHint> {
        let ctx = HintContext {
            brushing: self.meta_view.is_brushing(),
            has_brush: self.meta_view.brush().is_some(),
            hovering: self.meta_view.hovered_commit().is_some(),
            projects_input: self.projects_view.input_mode,
        };
        keys::current_hints(self.current_view, &ctx)
    }
}

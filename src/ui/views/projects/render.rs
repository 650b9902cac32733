//! Rendering for ProjectsView

use std::f64::consts::TAU;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Paragraph, Wrap,
        canvas::{Canvas, Points},
    },
};

use crate::chart::{Slice, SliceState};
use crate::filter::project_count_label;
use crate::model::{Notification, ProjectRecord};
use crate::ui::theme::{self, Palette, projects_view};
use crate::ui::{components, symbols};

use super::{ProjectsInputMode, ProjectsView};

/// Sampling step of the pie fill in unit-circle coordinates
const PIE_SAMPLE: f64 = 0.02;

/// Angle of `(x, y)` clockwise from 12 o'clock, in `[0, TAU)`
pub(super) fn clock_angle(x: f64, y: f64) -> f64 {
    x.atan2(y).rem_euclid(TAU)
}

/// Unit-disc sample points, bucketed by the slice they fall in
pub(super) fn pie_points(slices: &[Slice]) -> Vec<Vec<(f64, f64)>> {
    let mut buckets = vec![Vec::new(); slices.len()];
    let steps = (2.0 / PIE_SAMPLE) as i32;
    for i in 0..=steps {
        for j in 0..=steps {
            let x = -1.0 + f64::from(i) * PIE_SAMPLE;
            let y = -1.0 + f64::from(j) * PIE_SAMPLE;
            if x * x + y * y > 1.0 {
                continue;
            }
            let angle = clock_angle(x, y);
            if let Some(k) = slices.iter().position(|s| s.contains_angle(angle)) {
                buckets[k].push((x, y));
            }
        }
    }
    buckets
}

fn slice_color(index: usize, state: SliceState) -> Color {
    match state {
        SliceState::Dimmed => projects_view::DIMMED,
        SliceState::Normal | SliceState::Selected => theme::ordinal(index),
    }
}

impl ProjectsView {
    /// Render the page with optional notification in title bar
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        notification: Option<&Notification>,
        palette: &Palette,
    ) {
        let title = Line::from(" folio - Projects ")
            .bold()
            .fg(palette.accent)
            .centered();
        let available = area.width.saturating_sub(title.width() as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available)))
            .filter(|line| !line.spans.is_empty());
        let block = components::panel_with_notification(title, notif_line, palette);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [search_area, body] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);
        let [chart_area, cards_area] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(body);
        let legend_height = (self.slices().len() as u16 + 2).min(chart_area.height / 2);
        let [pie_area, legend_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(legend_height)])
                .areas(chart_area);

        self.render_search_bar(frame, search_area, palette);
        self.render_pie(frame, pie_area, palette);
        self.render_legend(frame, legend_area, palette);
        self.render_cards(frame, cards_area, palette);
    }

    fn render_search_bar(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let editing = self.input_mode == ProjectsInputMode::Search;
        let text = format!("Search: {}", self.query());
        let style = if editing {
            Style::default().fg(palette.fg)
        } else {
            Style::default().fg(palette.muted)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text.clone(), style))
                .block(components::panel(Line::from(" / Search "), palette)),
            area,
        );

        if editing {
            let max = area.width.saturating_sub(2);
            let col = (text.chars().count() as u16).min(max);
            frame.set_cursor_position(Position::new(area.x + 1 + col, area.y + 1));
        }
    }

    fn render_pie(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let buckets = pie_points(self.slices());
        let canvas = Canvas::default()
            .block(components::panel(Line::from(" Projects by year "), palette))
            .background_color(palette.bg)
            .marker(Marker::Braille)
            .x_bounds([-1.1, 1.1])
            .y_bounds([-1.1, 1.1])
            .paint(|ctx| {
                for (i, coords) in buckets.iter().enumerate() {
                    ctx.draw(&Points {
                        coords: coords.as_slice(),
                        color: slice_color(i, self.slice_state(i)),
                    });
                }
            });
        frame.render_widget(canvas, area);
    }

    fn render_legend(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let lines: Vec<Line> = self
            .slices()
            .iter()
            .enumerate()
            .map(|(i, slice)| {
                let state = self.slice_state(i);
                let mut label_style = match state {
                    SliceState::Selected => Style::default()
                        .fg(palette.fg)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                    SliceState::Dimmed => Style::default().fg(projects_view::DIMMED),
                    SliceState::Normal => Style::default().fg(palette.fg),
                };
                if i == self.legend_cursor() {
                    label_style = label_style.bg(projects_view::LEGEND_CURSOR_BG);
                }
                Line::from(vec![
                    Span::styled(
                        format!("{} ", symbols::markers::SWATCH),
                        Style::default().fg(slice_color(i, state)),
                    ),
                    Span::styled(format!("{} ({})", slice.label, slice.value), label_style),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines).block(components::panel(Line::from(" Year "), palette)),
            area,
        );
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let visible = self.visible();
        let title = Line::from(format!(" {} ", project_count_label(visible.len())));
        let block = components::panel(title, palette);

        if visible.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(components::no_projects_state(), inner);
            return;
        }

        let lines: Vec<Line> = visible
            .iter()
            .skip(self.scroll_offset())
            .flat_map(|p| card_lines(p, palette))
            .collect();
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }
}

fn card_lines(project: &ProjectRecord, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(project.title.clone()).fg(projects_view::TITLE).bold(),
        Line::from(project.year.clone()).fg(projects_view::YEAR),
    ];
    if !project.description.is_empty() {
        lines.push(Line::from(project.description.clone()).fg(palette.fg));
    }
    lines.push(Line::from(""));
    lines
}

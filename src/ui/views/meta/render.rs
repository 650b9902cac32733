//! Rendering for MetaView

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Gauge, Paragraph, Wrap,
        canvas::{Canvas, Circle, Context, Line as CanvasLine, Rectangle},
    },
};

use crate::chart::{PLOT_HEIGHT, PLOT_WIDTH, USABLE, hour_label, selection_label};
use crate::filter::{SLIDER_MAX, display_cutoff};
use crate::model::Notification;
use crate::ui::theme::{self, Palette, meta_view};
use crate::ui::{components, symbols};

use super::MetaView;

/// Hours with a labelled gridline
const LABELLED_HOURS: [u32; 7] = [0, 4, 8, 12, 16, 20, 24];

/// Canvas y grows upward; plot space grows downward
fn flip(y: f64) -> f64 {
    PLOT_HEIGHT - y
}

fn is_daytime(hour: u32) -> bool {
    (6..18).contains(&hour)
}

impl MetaView {
    /// Render the page with optional notification in title bar
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        notification: Option<&Notification>,
        palette: &Palette,
    ) {
        let title = Line::from(" folio - Meta ").bold().fg(palette.accent).centered();
        let available = area.width.saturating_sub(title.width() as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available)))
            .filter(|line| !line.spans.is_empty());
        let block = components::panel_with_notification(title, notif_line, palette);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.commits().is_empty() {
            frame.render_widget(components::no_data_state("loc.csv"), inner);
            return;
        }

        let [top, bottom] =
            Layout::vertical([Constraint::Min(12), Constraint::Length(10)]).areas(inner);
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
                .areas(top);
        let [plot_area, slider_area] =
            Layout::vertical([Constraint::Min(6), Constraint::Length(3)]).areas(left);
        let [stats_area, tooltip_area, selection_area] = Layout::vertical([
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Min(3),
        ])
        .areas(right);
        let [files_area, story_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(bottom);

        self.render_plot(frame, plot_area, palette);
        self.render_slider(frame, slider_area, palette);
        self.render_stats(frame, stats_area, palette);
        self.render_tooltip(frame, tooltip_area, palette);
        self.render_selection(frame, selection_area, palette);
        self.render_files(frame, files_area, palette);
        self.render_story(frame, story_area, palette);
    }

    fn render_plot(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let title = Line::from(format!(
            " Commits by time of day ({}) ",
            self.selection().map_or(0, |s| s.len())
        ));
        let canvas = Canvas::default()
            .block(components::panel(title, palette))
            .background_color(palette.bg)
            .marker(Marker::Braille)
            .x_bounds([0.0, PLOT_WIDTH])
            .y_bounds([0.0, PLOT_HEIGHT])
            .paint(|ctx| {
                self.paint_grid(ctx, palette);
                ctx.layer();
                self.paint_points(ctx);
                ctx.layer();
                self.paint_overlay(ctx);
            });
        frame.render_widget(canvas, area);
    }

    fn paint_grid(&self, ctx: &mut Context, palette: &Palette) {
        let y = self.plot().y;
        for hour in (0..=24).step_by(2) {
            let py = flip(y.map(f64::from(hour)));
            let color = if is_daytime(hour) {
                meta_view::GRID_DAY
            } else {
                meta_view::GRID_NIGHT
            };
            ctx.draw(&CanvasLine {
                x1: USABLE.left,
                y1: py,
                x2: USABLE.right,
                y2: py,
                color,
            });
        }
        for hour in LABELLED_HOURS {
            let py = flip(y.map(f64::from(hour)));
            ctx.print(
                0.0,
                py,
                Span::styled(hour_label(hour), Style::default().fg(palette.muted)),
            );
        }

        if let Some(x) = self.plot().x {
            let (start, end) = x.extent();
            let label_y = flip(PLOT_HEIGHT - 5.0);
            ctx.print(
                USABLE.left,
                label_y,
                Span::styled(
                    start.format("%b %-d, %Y").to_string(),
                    Style::default().fg(palette.muted),
                ),
            );
            let end_label = end.format("%b %-d, %Y").to_string();
            // keep the end label inside the plot
            let end_x = (USABLE.right - end_label.len() as f64 * 12.0).max(USABLE.left);
            ctx.print(
                end_x,
                label_y,
                Span::styled(end_label, Style::default().fg(palette.muted)),
            );
        }
    }

    fn paint_points(&self, ctx: &mut Context) {
        let hovered = self.hovered.filter(|_| self.interacted);
        let brushed = self.brushed();
        for point in &self.plot().points {
            let color = if hovered == Some(point.commit) {
                meta_view::POINT_HOVER
            } else if brushed.binary_search(&point.commit).is_ok() {
                meta_view::POINT_SELECTED
            } else {
                meta_view::POINT
            };
            ctx.draw(&Circle {
                x: point.x,
                y: flip(point.y),
                radius: point.r,
                color,
            });
        }
    }

    fn paint_overlay(&self, ctx: &mut Context) {
        if let Some(rect) = self.brush() {
            ctx.draw(&Rectangle {
                x: rect.x0,
                y: flip(rect.y1),
                width: rect.x1 - rect.x0,
                height: rect.y1 - rect.y0,
                color: meta_view::BRUSH,
            });
        }
        let (cx, cy) = self.cursor();
        ctx.print(
            cx,
            flip(cy),
            Span::styled(
                symbols::markers::CURSOR.to_string(),
                Style::default().fg(meta_view::CURSOR).add_modifier(Modifier::BOLD),
            ),
        );
    }

    fn render_slider(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let Some(filter) = self.filter() else {
            return;
        };
        let progress = filter.progress();
        let gauge = Gauge::default()
            .block(components::panel(Line::from(" Commit progress "), palette))
            .gauge_style(Style::default().fg(meta_view::SLIDER).bg(palette.bg))
            .ratio(f64::from(progress) / f64::from(SLIDER_MAX))
            .label(display_cutoff(&filter.cutoff()));
        frame.render_widget(gauge, area);
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let lines: Vec<Line> = self
            .summary()
            .map(|s| s.entries())
            .unwrap_or_default()
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{:<17}", label), Style::default().fg(palette.muted)),
                    Span::styled(value, Style::default().fg(meta_view::STAT_VALUE)),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines).block(components::panel(Line::from(" Summary "), palette)),
            area,
        );
    }

    fn render_tooltip(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let block = components::panel(Line::from(" Commit "), palette);
        let Some(commit) = self.hovered_commit() else {
            frame.render_widget(
                Paragraph::new(Line::from(symbols::empty::NO_HOVER).fg(palette.muted))
                    .block(block),
                area,
            );
            return;
        };

        let row = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<8}", label), Style::default().fg(palette.muted)),
                Span::raw(value),
            ])
        };
        let lines = vec![
            row("Commit", commit.short_id().to_string()),
            Line::from(vec![
                Span::styled(format!("{:<8}", "Link"), Style::default().fg(palette.muted)),
                Span::styled(commit.url.clone(), Style::default().fg(palette.accent).underlined()),
            ]),
            row("Date", commit.display_date()),
            row("Time", commit.display_time()),
            row("Author", commit.display_author().to_string()),
            row("Lines", commit.total_lines.to_string()),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_selection(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let mut lines = vec![Line::from(selection_label(self.brushed().len())).bold()];
        for share in self.breakdown() {
            let color = self
                .color_slot(&share.language)
                .map_or(palette.fg, theme::ordinal);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", symbols::markers::SWATCH),
                    Style::default().fg(color),
                ),
                Span::styled(share.language.to_uppercase(), Style::default().bold()),
                Span::raw(format!(" — {}", share.describe())),
            ]));
        }
        frame.render_widget(
            Paragraph::new(lines).block(components::panel(Line::from(" Selection "), palette)),
            area,
        );
    }

    fn render_files(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let name_width = usize::from(area.width / 3).max(8);
        let marker_room = usize::from(area.width)
            .saturating_sub(name_width + 2 + 12)
            .min(symbols::MAX_LINE_MARKERS);
        let inner_height = usize::from(area.height.saturating_sub(2));

        let lines: Vec<Line> = self
            .files()
            .groups()
            .iter()
            .take(inner_height)
            .map(|group| {
                let is_new = self.files().is_new(&group.name);
                let name_style = if is_new {
                    Style::default().fg(meta_view::NEW_FILE).bold()
                } else {
                    Style::default().fg(palette.fg)
                };
                let mark = if is_new { symbols::markers::NEW } else { ' ' };
                let mut spans = vec![
                    Span::styled(format!("{}{:<name_width$.name_width$}", mark, group.name), name_style),
                    Span::styled(
                        format!(" {:>5} lines ", group.line_count()),
                        Style::default().fg(palette.muted),
                    ),
                ];
                for language in group.languages.iter().take(marker_room) {
                    let color = self.color_slot(language).map_or(palette.fg, theme::ordinal);
                    spans.push(Span::styled(
                        symbols::markers::LINE.to_string(),
                        Style::default().fg(color),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        let title = Line::from(format!(" Files ({}) ", self.files().groups().len()));
        frame.render_widget(
            Paragraph::new(lines).block(components::panel(title, palette)),
            area,
        );
    }

    fn render_story(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let narrative = self.narrative();
        let title = match narrative.active() {
            Some(step) => format!(" Story {}/{} ", step + 1, narrative.len()),
            None => " Story ".to_string(),
        };
        let text = match self.active_step_text() {
            Some(text) => Line::from(text),
            None => Line::from(symbols::empty::NO_STEP).fg(palette.muted),
        };
        frame.render_widget(
            Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .block(components::panel(Line::from(title), palette)),
            area,
        );
    }
}

//! Tests for the Projects page rendering

use ratatui::{Terminal, backend::TestBackend};

use folio::model::ColorScheme;
use folio::ui::theme::Palette;
use folio::ui::views::ProjectsView;

use crate::support::{buffer_text, projects};

fn render(view: &ProjectsView) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    let palette = Palette::for_scheme(ColorScheme::Light);
    terminal
        .draw(|frame| view.render(frame, frame.area(), None, &palette))
        .unwrap();
    buffer_text(&terminal)
}

fn loaded_view() -> ProjectsView {
    let mut view = ProjectsView::new();
    view.set_projects(projects());
    view
}

#[test]
fn test_projects_page_lists_cards_and_legend() {
    let text = render(&loaded_view());

    assert!(text.contains("folio - Projects"));
    assert!(text.contains("4 projects"));
    assert!(text.contains("Lab 1"));
    assert!(text.contains("Intro to HTML"));
    assert!(text.contains("2024 (2)"));
    assert!(text.contains("2025 (1)"));
    assert!(text.contains("2023 (1)"));
}

#[test]
fn test_projects_page_year_filter() {
    let mut view = loaded_view();
    view.toggle_year(0);

    let text = render(&view);
    assert!(text.contains("2 projects"));
    assert!(text.contains("Lab 2"));
    assert!(!text.contains("Portfolio"));
}

#[test]
fn test_projects_page_search_shows_query() {
    let mut view = loaded_view();
    view.set_query("grid");

    let text = render(&view);
    assert!(text.contains("Search: grid"));
    assert!(text.contains("1 projects"));
    assert!(text.contains("Lab 2"));
}

#[test]
fn test_projects_page_no_match() {
    let mut view = loaded_view();
    view.set_query("nothing like this");

    let text = render(&view);
    assert!(text.contains("0 projects"));
    assert!(text.contains("No projects match."));
}

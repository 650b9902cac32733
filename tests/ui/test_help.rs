//! Tests for the Help panel and status bar

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use folio::app::View;
use folio::keys::{self, HintContext};
use folio::model::ColorScheme;
use folio::ui::theme::Palette;
use folio::ui::views::ProjectsInputMode;
use folio::ui::widgets::{build_status_bar, render_help_panel};

use crate::support::buffer_text;

#[test]
fn test_help_panel_lists_sections() {
    let mut terminal = Terminal::new(TestBackend::new(80, 50)).unwrap();
    let palette = Palette::for_scheme(ColorScheme::Auto);
    terminal
        .draw(|frame| render_help_panel(frame, frame.area(), 0, &palette))
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("folio - Help"));
    assert!(text.contains("Key bindings:"));
    for section in ["Global:", "Meta:", "Projects:", "Search Input:"] {
        assert!(text.contains(section), "missing {section}");
    }
    assert!(text.contains("Copy hovered commit link"));
}

#[test]
fn test_help_panel_scrolls() {
    let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
    let palette = Palette::for_scheme(ColorScheme::Dark);
    terminal
        .draw(|frame| render_help_panel(frame, frame.area(), 2, &palette))
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(!text.contains("Key bindings:"));
    assert!(text.contains("Global:"));
}

#[test]
fn test_projects_status_bar() {
    let hints = keys::current_hints(View::Projects, &HintContext::default());
    let line = build_status_bar(&hints);
    assert_snapshot!(
        line.to_string().trim(),
        @"[?] Help   [/] Search   [Space] Year   [j/k] Scroll   [t] Theme   [Tab] Page   [q] Quit"
    );
}

#[test]
fn test_search_status_bar() {
    let ctx = HintContext {
        projects_input: ProjectsInputMode::Search,
        ..HintContext::default()
    };
    let line = build_status_bar(&keys::current_hints(View::Projects, &ctx));
    assert_snapshot!(line.to_string().trim(), @"[Enter] Keep   [Esc] Clear");
}

//! Tests for the Meta page rendering

use ratatui::{Terminal, backend::TestBackend};

use folio::model::ColorScheme;
use folio::ui::theme::Palette;
use folio::ui::views::MetaView;

use crate::support::{buffer_text, history};

fn render(view: &MetaView) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    let palette = Palette::for_scheme(ColorScheme::Dark);
    terminal
        .draw(|frame| view.render(frame, frame.area(), None, &palette))
        .unwrap();
    buffer_text(&terminal)
}

fn loaded_view() -> MetaView {
    let mut view = MetaView::new();
    view.set_history(history());
    view
}

#[test]
fn test_meta_page_panels() {
    let text = render(&loaded_view());

    assert!(text.contains("folio - Meta"));
    assert!(text.contains("Total LOC"));
    assert!(text.contains("Commit progress"));
    assert!(text.contains("January 10, 2025 at 10:00 PM"));
    assert!(text.contains("No commits selected"));
    assert!(text.contains("Files (3)"));
    assert!(text.contains("(press n to start the story)"));
    assert!(text.contains("(hover a commit)"));
}

#[test]
fn test_meta_page_tooltip_after_hover() {
    let mut view = loaded_view();
    let point = *view.plot().point_of(2).unwrap();
    let (cx, cy) = view.cursor();
    view.move_cursor(point.x - cx, point.y - cy);

    let text = render(&view);
    assert!(!text.contains("(hover a commit)"));
    assert!(text.contains("Unknown"));
    assert!(text.contains("https://example.com/commit/c3"));
}

#[test]
fn test_meta_page_story_after_step() {
    let mut view = loaded_view();
    view.next_step();

    let text = render(&view);
    assert!(text.contains("Story 1/3"));
    assert!(!text.contains("(press n to start the story)"));
}

#[test]
fn test_meta_page_without_data() {
    let text = render(&MetaView::new());
    assert!(text.contains("folio - Meta"));
    assert!(text.contains("No commit data loaded."));
}

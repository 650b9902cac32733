//! Tests for MetaView

use crossterm::event::{KeyCode, KeyEvent};

use crate::chart::USABLE;
use crate::data::{Aggregator, read_records};
use crate::keys;
use crate::model::History;

use super::{MetaAction, MetaView};

const CSV: &str = "\
commit,file,line,depth,length,date,time,timezone,datetime,author,change,type
c1,a.rs,1,0,20,2025-01-01,09:00:00-08:00,-08:00,2025-01-01T09:00:00-08:00,mz,added,rust
c1,a.rs,2,1,32,2025-01-01,09:00:00-08:00,-08:00,2025-01-01T09:00:00-08:00,mz,added,rust
c2,a.rs,3,1,18,2025-01-05,14:30:00-08:00,-08:00,2025-01-05T14:30:00-08:00,mz,removed,rust
c2,b.js,1,0,40,2025-01-05,14:30:00-08:00,-08:00,2025-01-05T14:30:00-08:00,mz,added,js
c2,b.js,2,2,12,2025-01-05,14:30:00-08:00,-08:00,2025-01-05T14:30:00-08:00,mz,added,js
c3,c.css,1,0,8,2025-01-10,22:00:00-08:00,-08:00,2025-01-10T22:00:00-08:00,,added,css
";

fn history() -> History {
    let records = read_records(CSV.as_bytes()).unwrap();
    Aggregator::new("https://example.com/commit/").aggregate(records)
}

fn loaded_view() -> MetaView {
    let mut view = MetaView::new();
    view.set_history(history());
    view
}

fn press_key(view: &mut MetaView, key: KeyCode) -> MetaAction {
    view.handle_key(KeyEvent::from(key))
}

fn visible_ids(view: &MetaView) -> Vec<String> {
    let selection = view.selection().unwrap();
    selection
        .commits(view.commits())
        .map(|c| c.id.clone())
        .collect()
}

/// Move the cursor onto the point of `commit`
fn hover(view: &mut MetaView, commit: usize) {
    let point = *view.plot().point_of(commit).unwrap();
    let (cx, cy) = view.cursor();
    view.move_cursor(point.x - cx, point.y - cy);
}

#[test]
fn test_all_commits_visible_after_load() {
    let view = loaded_view();
    assert_eq!(visible_ids(&view), vec!["c1", "c2", "c3"]);
    assert_eq!(view.filter().unwrap().progress(), 100);
    assert_eq!(view.plot().points.len(), 3);
}

#[test]
fn test_files_sorted_by_line_count() {
    let view = loaded_view();
    let names: Vec<&str> = view
        .files()
        .groups()
        .iter()
        .map(|g| g.name.as_str())
        .collect();
    assert_eq!(names, vec!["a.rs", "b.js", "c.css"]);
}

#[test]
fn test_tooltip_hidden_before_interaction() {
    let view = loaded_view();
    assert!(view.hovered_commit().is_none());
}

#[test]
fn test_hover_and_copy_link() {
    let mut view = loaded_view();
    assert_eq!(press_key(&mut view, keys::YANK_LINK), MetaAction::None);

    hover(&mut view, 2);
    assert_eq!(view.hovered_commit().unwrap().id, "c3");
    assert_eq!(view.hovered_commit().unwrap().display_author(), "Unknown");
    assert_eq!(
        press_key(&mut view, keys::YANK_LINK),
        MetaAction::CopyLink("https://example.com/commit/c3".to_string())
    );
}

#[test]
fn test_cursor_clamped_to_plot() {
    let mut view = loaded_view();
    view.move_cursor(-5000.0, -5000.0);
    assert_eq!(view.cursor(), (USABLE.left, USABLE.top));
    view.move_cursor(5000.0, 5000.0);
    assert_eq!(view.cursor(), (USABLE.right, USABLE.bottom));
}

#[test]
fn test_slider_home_and_end() {
    let mut view = loaded_view();
    press_key(&mut view, keys::SLIDER_START);
    assert_eq!(visible_ids(&view), vec!["c1"]);
    assert_eq!(view.plot().points.len(), 1);

    press_key(&mut view, keys::SLIDER_END);
    assert_eq!(visible_ids(&view), vec!["c1", "c2", "c3"]);
}

#[test]
fn test_slider_steps_are_monotonic() {
    let mut view = loaded_view();
    press_key(&mut view, keys::SLIDER_START);
    let mut previous = view.selection().unwrap().len();
    for _ in 0..10 {
        press_key(&mut view, keys::SLIDER_FORWARD_FAST);
        let now = view.selection().unwrap().len();
        assert!(now >= previous);
        previous = now;
    }
    assert_eq!(previous, 3);
}

#[test]
fn test_brush_over_whole_plot_selects_visible() {
    let mut view = loaded_view();
    view.move_cursor(-5000.0, -5000.0);
    press_key(&mut view, keys::BRUSH);
    assert!(view.is_brushing());
    view.move_cursor(5000.0, 5000.0);
    press_key(&mut view, keys::BRUSH);
    assert!(!view.is_brushing());

    assert_eq!(view.brushed(), &[0, 1, 2]);
    let total: usize = view.breakdown().iter().map(|s| s.count).sum();
    assert_eq!(total, 6);
}

#[test]
fn test_zero_area_brush_selects_nothing() {
    let mut view = loaded_view();
    press_key(&mut view, keys::BRUSH);
    press_key(&mut view, keys::BRUSH);
    assert!(view.brush().is_none());
    assert!(view.brushed().is_empty());
}

#[test]
fn test_brush_ignores_commits_past_cutoff() {
    let mut view = loaded_view();
    view.move_cursor(-5000.0, -5000.0);
    press_key(&mut view, keys::BRUSH);
    view.move_cursor(5000.0, 5000.0);
    press_key(&mut view, keys::SLIDER_START);
    assert_eq!(view.brushed(), &[0]);
}

#[test]
fn test_breakdown_without_brush_uses_visible_set() {
    let mut view = loaded_view();
    let languages: Vec<&str> = view
        .breakdown()
        .iter()
        .map(|s| s.language.as_str())
        .collect();
    assert_eq!(languages, vec!["rust", "js", "css"]);

    press_key(&mut view, keys::SLIDER_START);
    assert_eq!(view.breakdown().len(), 1);
    assert_eq!(view.breakdown()[0].describe(), "2 lines (100%)");
}

#[test]
fn test_clear_brush() {
    let mut view = loaded_view();
    assert!(!view.clear_brush());
    view.move_cursor(-5000.0, -5000.0);
    press_key(&mut view, keys::BRUSH);
    view.move_cursor(5000.0, 5000.0);
    assert!(view.brush().is_some());
    press_key(&mut view, keys::BRUSH_CLEAR);
    assert!(view.brush().is_none());
    assert!(!view.is_brushing());
    assert!(view.brushed().is_empty());
}

#[test]
fn test_narrative_steps_drive_cutoff() {
    let mut view = loaded_view();
    assert!(view.active_step_text().is_none());

    press_key(&mut view, keys::STEP_NEXT);
    assert_eq!(view.narrative().active(), Some(0));
    assert_eq!(visible_ids(&view), vec!["c1"]);
    assert!(view.active_step_text().unwrap().contains("my first commit"));

    press_key(&mut view, keys::STEP_NEXT);
    assert_eq!(visible_ids(&view), vec!["c1", "c2"]);
    assert!(view.active_step_text().unwrap().contains("another glorious commit"));

    press_key(&mut view, keys::STEP_PREV);
    assert_eq!(visible_ids(&view), vec!["c1"]);
}

#[test]
fn test_slider_after_story_leaves_the_step() {
    let mut view = loaded_view();
    for _ in 0..3 {
        press_key(&mut view, keys::STEP_NEXT);
    }
    assert_eq!(view.narrative().active(), Some(2));
    assert_eq!(view.filter().unwrap().progress(), 100);

    press_key(&mut view, keys::SLIDER_START);
    assert_eq!(view.narrative().active(), None);
    assert!(view.active_step_text().is_none());
    assert_eq!(visible_ids(&view), vec!["c1"]);

    // The story starts over and takes the cutoff back
    press_key(&mut view, keys::STEP_NEXT);
    press_key(&mut view, keys::STEP_NEXT);
    assert_eq!(view.narrative().active(), Some(1));
    assert_eq!(visible_ids(&view), vec!["c1", "c2"]);
    assert_eq!(view.filter().unwrap().progress(), 44);
    assert!(view.active_step_text().unwrap().contains("another glorious commit"));

    press_key(&mut view, keys::SLIDER_FORWARD);
    assert_eq!(view.narrative().active(), None);
    assert_eq!(view.filter().unwrap().progress(), 45);
    assert_eq!(visible_ids(&view), vec!["c1", "c2"]);
}

#[test]
fn test_files_report_new_entries() {
    let mut view = loaded_view();
    press_key(&mut view, keys::SLIDER_START);
    press_key(&mut view, keys::SLIDER_END);
    assert!(view.files().is_new("b.js"));
    assert!(view.files().is_new("c.css"));
    assert!(!view.files().is_new("a.rs"));
}

#[test]
fn test_language_colors_stable_across_filters() {
    let mut view = loaded_view();
    let css = view.color_slot("css");
    press_key(&mut view, keys::SLIDER_START);
    press_key(&mut view, keys::SLIDER_END);
    assert_eq!(view.color_slot("rust"), Some(0));
    assert_eq!(view.color_slot("css"), css);
}

#[test]
fn test_empty_view_ignores_keys() {
    let mut view = MetaView::new();
    for key in [
        keys::SLIDER_START,
        keys::STEP_NEXT,
        keys::BRUSH,
        KeyCode::Char('l'),
        keys::YANK_LINK,
    ] {
        assert_eq!(press_key(&mut view, key), MetaAction::None);
    }
    assert!(view.selection().is_none());
    assert!(view.summary().is_none());
}

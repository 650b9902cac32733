//! Whole-app key flows and rendering

use std::ffi::OsString;
use std::path::Path;

use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tempfile::TempDir;

use folio::app::{App, View};
use folio::config::Config;
use folio::data::PreferenceStore;
use folio::model::ColorScheme;

use crate::support::{buffer_text, write_data_files};

fn config_for(dir: &Path) -> Config {
    let args: [OsString; 7] = [
        "folio".into(),
        "--data".into(),
        dir.join("loc.csv").into_os_string(),
        "--projects".into(),
        dir.join("projects.json").into_os_string(),
        "--repo-url".into(),
        "https://example.com/commit/".into(),
    ];
    Config::parse_from(args)
}

fn app_in(dir: &TempDir) -> App {
    write_data_files(dir.path());
    let store = PreferenceStore::new(dir.path().join("prefs").join("preferences.json"));
    App::with_preferences(config_for(dir.path()), Some(store))
}

fn press(app: &mut App, code: KeyCode) {
    app.on_key_event(KeyEvent::from(code));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn test_app_loads_both_pages() {
    let dir = TempDir::new().unwrap();
    let app = app_in(&dir);

    assert!(app.running);
    assert_eq!(app.current_view, View::Projects);
    assert_eq!(app.projects_view.projects().len(), 4);
    assert_eq!(app.meta_view.commits().len(), 3);
    assert!(app.error_message.is_none());
}

#[test]
fn test_tab_switches_pages() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.current_view, View::Meta);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.current_view, View::Projects);
}

#[test]
fn test_color_scheme_is_persisted() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    assert_eq!(app.color_scheme, ColorScheme::Auto);

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.color_scheme, ColorScheme::Light);

    let store = PreferenceStore::new(dir.path().join("prefs").join("preferences.json"));
    assert_eq!(store.load(), ColorScheme::Light);

    // A fresh app picks the stored scheme up
    let reopened = App::with_preferences(config_for(dir.path()), Some(store));
    assert_eq!(reopened.color_scheme, ColorScheme::Light);
}

#[test]
fn test_help_and_back() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    press(&mut app, KeyCode::Tab);

    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.current_view, View::Help);

    // q leaves help instead of quitting
    press(&mut app, KeyCode::Char('q'));
    assert_eq!(app.current_view, View::Meta);
    assert!(app.running);

    press(&mut app, KeyCode::Char('?'));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current_view, View::Meta);
}

#[test]
fn test_quit_keys() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.running);

    let mut app = app_in(&dir);
    app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!app.running);
}

#[test]
fn test_search_input_captures_global_keys() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);

    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "qt");
    assert!(app.running);
    assert_eq!(app.color_scheme, ColorScheme::Auto);
    assert_eq!(app.projects_view.query(), "qt");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.projects_view.query(), "");
    assert_eq!(app.current_view, View::Projects);
}

#[test]
fn test_search_filters_projects() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);

    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "lab");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.projects_view.visible().len(), 2);
    // Back in normal mode, q quits again
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.running);
}

#[test]
fn test_missing_dataset_reports_error() {
    let dir = TempDir::new().unwrap();
    let app = App::with_preferences(config_for(dir.path()), None);

    assert!(app.error_message.is_some());
    assert!(app.meta_view.commits().is_empty());
    assert!(app.projects_view.projects().is_empty());
}

#[test]
fn test_refresh_reloads_files() {
    let dir = TempDir::new().unwrap();
    let mut app = App::with_preferences(config_for(dir.path()), None);
    assert!(app.meta_view.commits().is_empty());

    write_data_files(dir.path());
    app.on_key_event(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));

    assert!(app.error_message.is_none());
    assert_eq!(app.meta_view.commits().len(), 3);
    assert_eq!(app.projects_view.projects().len(), 4);
    let notification = app.notification.as_ref().unwrap();
    assert_eq!(notification.message, "Reloaded 3 commits, 4 projects");
}

#[test]
fn test_render_nav_and_status_bar() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

    terminal.draw(|frame| app.render(frame)).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Projects"));
    assert!(text.contains("theme: auto"));
    assert!(text.contains("[Tab] Page"));

    press(&mut app, KeyCode::Tab);
    terminal.draw(|frame| app.render(frame)).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("folio - Meta"));
}
